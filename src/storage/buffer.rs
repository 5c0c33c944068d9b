use crate::errors::storage_error::StorageError;
use crate::types::catalog_types::Catalog;
use crate::types::page_types::Page;
use log::debug;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

// Bounded page cache over the heap file. Capacity is counted in pages.
// All heap file IO goes through here; the file is opened per operation.
pub struct Buffer {
    pages: HashMap<i32, Page>,
    page_size: usize,
    capacity: usize,
    heap_path: PathBuf,
}

impl Buffer {
    pub fn new(heap_path: impl Into<PathBuf>, page_size: usize, capacity: usize) -> Self {
        Self {
            pages: HashMap::with_capacity(capacity),
            page_size,
            capacity,
            heap_path: heap_path.into(),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn resident_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_resident(&self, page_id: i32) -> bool {
        self.pages.contains_key(&page_id)
    }

    /// Returns the page from the buffer if resident, otherwise loads it
    /// from the heap file, evicting if the buffer is full.
    pub fn get_page(&mut self, page_id: i32) -> Result<&mut Page, StorageError> {
        if !self.pages.contains_key(&page_id) {
            let page = self.read_page_from_file(page_id)?;
            debug!("page {} loaded from heap file", page_id);
            self.evict_if_needed()?;
            self.pages.insert(page_id, page);
        }
        let Some(page) = self.pages.get_mut(&page_id) else {
            return Err(StorageError::PageOutOfBounds(page_id));
        };
        page.touch();
        Ok(page)
    }

    /// Allocates an empty page: the free page list head when one exists,
    /// otherwise a fresh page appended to the heap file. The page comes
    /// back owned and dirty; hand it to [`Buffer::put_page`] once wired.
    pub fn create_new_page(&mut self, catalog: &mut Catalog) -> Result<Page, StorageError> {
        let free_page_id = catalog.free_page_list_head();

        let mut page = if free_page_id != -1 {
            // reuse: prefer the resident copy, fall back to disk
            let mut page = match self.pages.remove(&free_page_id) {
                Some(page) => page,
                None => self.read_page_from_file(free_page_id)?,
            };
            catalog.set_free_page_list_head(page.next_page_id());
            debug!("reusing free page {}", free_page_id);
            page.clean_data();
            page
        } else {
            let page_id = catalog.last_page_id() + 1;
            self.append_page_to_file(page_id)?;
            catalog.set_last_page_id(page_id);
            debug!("appended page {} to heap file", page_id);
            Page::new(page_id, self.page_size)
        };

        page.set_dirty();
        page.touch();
        Ok(page)
    }

    /// Inserts an owned page into residency, evicting if the buffer is full.
    pub fn put_page(&mut self, page: Page) -> Result<(), StorageError> {
        if !self.pages.contains_key(&page.page_id()) {
            self.evict_if_needed()?;
        }
        self.pages.insert(page.page_id(), page);
        Ok(())
    }

    /// Writes every dirty resident page through to the heap file and
    /// clears residency.
    pub fn evict_all(&mut self) -> Result<(), StorageError> {
        let page_ids: Vec<i32> = self.pages.keys().copied().collect();
        for page_id in page_ids {
            if let Some(mut page) = self.pages.remove(&page_id) {
                if page.is_dirty() {
                    self.write_page_to_file(&mut page)?;
                }
            }
        }
        Ok(())
    }

    fn evict_if_needed(&mut self) -> Result<(), StorageError> {
        if self.pages.len() < self.capacity {
            return Ok(());
        }
        self.evict_least_recently_used()
    }

    fn evict_least_recently_used(&mut self) -> Result<(), StorageError> {
        let victim = self
            .pages
            .values()
            .min_by_key(|page| page.last_access())
            .map(|page| page.page_id());
        let Some(victim_id) = victim else {
            return Ok(());
        };
        let Some(mut page) = self.pages.remove(&victim_id) else {
            return Ok(());
        };
        if page.is_dirty() {
            debug!("evicting dirty page {}, writing through", victim_id);
            self.write_page_to_file(&mut page)?;
        } else {
            debug!("evicting clean page {}", victim_id);
        }
        Ok(())
    }

    fn page_offset(&self, page_id: i32) -> u64 {
        page_id as u64 * self.page_size as u64
    }

    fn read_page_from_file(&self, page_id: i32) -> Result<Page, StorageError> {
        if page_id < 0 {
            return Err(StorageError::PageOutOfBounds(page_id));
        }

        let mut file = File::open(&self.heap_path)?;
        let offset = self.page_offset(page_id);
        if offset + self.page_size as u64 > file.metadata()?.len() {
            return Err(StorageError::PageOutOfBounds(page_id));
        }

        file.seek(SeekFrom::Start(offset))?;
        let mut buf = vec![0u8; self.page_size];
        file.read_exact(&mut buf)?;

        Page::deserialize(&buf, self.page_size)
    }

    // The persisted dirty flag is always 0: the flag is cleared before
    // serialization, so a reloaded page starts clean.
    fn write_page_to_file(&self, page: &mut Page) -> Result<(), StorageError> {
        page.clean_dirty();
        let bytes = self.normalize_page_bytes(page.serialize()?)?;

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.heap_path)?;
        file.seek(SeekFrom::Start(self.page_offset(page.page_id())))?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        Ok(())
    }

    fn append_page_to_file(&self, page_id: i32) -> Result<(), StorageError> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.heap_path)?;
        file.seek(SeekFrom::Start(self.page_offset(page_id)))?;
        file.write_all(&vec![0u8; self.page_size])?;
        file.sync_all()?;
        Ok(())
    }

    // Every write to the heap file is exactly one page: shorter payloads
    // are zero padded, longer ones are refused.
    fn normalize_page_bytes(&self, mut bytes: Vec<u8>) -> Result<Vec<u8>, StorageError> {
        if bytes.len() > self.page_size {
            return Err(StorageError::PageSizeMismatch {
                got: bytes.len(),
                expected: self.page_size,
            });
        }
        bytes.resize(self.page_size, 0);
        Ok(bytes)
    }
}
