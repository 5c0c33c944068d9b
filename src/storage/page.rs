use crate::consts::page_consts::{PAGE_HEADER_SIZE, SLOT_ENTRY_SIZE};
use crate::errors::storage_error::StorageError;
use crate::types::page_types::{Page, Slot};
use std::sync::atomic::{AtomicU64, Ordering};

// Monotonic source for LRU stamps. Two touches never tie, unlike a
// millisecond clock.
static LRU_CLOCK: AtomicU64 = AtomicU64::new(1);

fn next_access_stamp() -> u64 {
    LRU_CLOCK.fetch_add(1, Ordering::Relaxed)
}

fn read_u32(buf: &[u8], at: usize) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&buf[at..at + 4]);
    u32::from_le_bytes(raw)
}

fn read_i32(buf: &[u8], at: usize) -> i32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&buf[at..at + 4]);
    i32::from_le_bytes(raw)
}

fn read_u64(buf: &[u8], at: usize) -> u64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&buf[at..at + 8]);
    u64::from_le_bytes(raw)
}

impl Page {
    pub fn new(page_id: i32, page_size: usize) -> Self {
        Self {
            page_id,
            page_size,
            records: Vec::new(),
            slots: Vec::new(),
            free_space_end: page_size,
            next_page_id: -1, // -1 means no next page
            last_access: next_access_stamp(),
            dirty: false,
        }
    }

    /// Bumps the LRU stamp. Called whenever the page is read or written.
    pub fn touch(&mut self) {
        self.last_access = next_access_stamp();
    }

    /// Removes all data from the page, keeping its id. The caller decides
    /// whether the wipe needs to reach disk and sets the dirty flag itself.
    pub fn clean_data(&mut self) {
        self.records.clear();
        self.slots.clear();
        self.free_space_end = self.page_size;
        self.next_page_id = -1;
        self.touch();
    }

    /// Free bytes between the slot directory and the record area.
    pub fn free_space(&self) -> usize {
        self.free_space_end
            .saturating_sub(PAGE_HEADER_SIZE + self.slots.len() * SLOT_ENTRY_SIZE)
    }

    /// Attempts to append a record. Returns false when the record plus its
    /// slot entry would not fit; the page is left untouched in that case.
    pub fn add_record(&mut self, data: &[u8]) -> bool {
        if data.len() + SLOT_ENTRY_SIZE > self.free_space() {
            return false;
        }
        self.push_record(data);
        self.dirty = true;
        true
    }

    // Unchecked insert shared by add_record and split. Split halves always
    // fit: they are subsets of a record set that fit a page of the same size.
    fn push_record(&mut self, data: &[u8]) {
        self.free_space_end -= data.len();
        self.slots.push(Slot {
            offset: self.free_space_end as u32,
            length: data.len() as u32,
        });
        self.records.push(data.to_vec());
        self.touch();
    }

    /// Removes the record at `slot_index`, compacting the record area:
    /// records below the removed one shift up by its length.
    pub fn remove_record(&mut self, slot_index: usize) -> bool {
        if slot_index >= self.slots.len() {
            return false;
        }
        let removed = self.slots.remove(slot_index);
        self.records.remove(slot_index);

        for slot in &mut self.slots {
            if slot.offset < removed.offset {
                slot.offset += removed.length;
            }
        }

        self.free_space_end += removed.length as usize;
        self.dirty = true;
        self.touch();
        true
    }

    /// Moves this page's records into two fresh pages, first half into
    /// `first`, second half into `second`, preserving order. The caller
    /// wires the chain links and retires this page.
    pub fn split(&mut self, first: &mut Page, second: &mut Page) {
        self.set_dirty();

        let mid = self.slots.len() / 2;
        for data in &self.records[..mid] {
            first.push_record(data);
        }
        for data in &self.records[mid..] {
            second.push_record(data);
        }
        first.set_dirty();
        second.set_dirty();
    }

    pub fn page_id(&self) -> i32 {
        self.page_id
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn next_page_id(&self) -> i32 {
        self.next_page_id
    }

    pub fn set_next_page(&mut self, page_id: i32) {
        self.next_page_id = page_id;
        self.set_dirty();
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page_id != -1
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clean_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn records(&self) -> &[Vec<u8>] {
        &self.records
    }

    pub fn num_records(&self) -> usize {
        self.slots.len()
    }

    pub fn last_access(&self) -> u64 {
        self.last_access
    }

    /// Serializes to exactly `page_size` bytes: header, slot directory,
    /// zero-filled gap, records at their slot offsets.
    pub fn serialize(&self) -> Result<Vec<u8>, StorageError> {
        let directory_end = PAGE_HEADER_SIZE + self.slots.len() * SLOT_ENTRY_SIZE;
        if directory_end > self.page_size {
            return Err(StorageError::CorruptPage {
                page_id: self.page_id,
                reason: "slot directory overruns the page".into(),
            });
        }

        let mut buf = vec![0u8; self.page_size];
        buf[0..4].copy_from_slice(&self.page_id.to_le_bytes());
        buf[4..8].copy_from_slice(&(self.page_size as u32).to_le_bytes());
        buf[8..12].copy_from_slice(&(self.free_space_end as u32).to_le_bytes());
        buf[12..16].copy_from_slice(&(self.slots.len() as u32).to_le_bytes());
        buf[16..20].copy_from_slice(&self.next_page_id.to_le_bytes());
        buf[20..28].copy_from_slice(&self.last_access.to_le_bytes());
        buf[28] = self.dirty as u8;

        let mut pos = PAGE_HEADER_SIZE;
        for slot in &self.slots {
            buf[pos..pos + 4].copy_from_slice(&slot.offset.to_le_bytes());
            buf[pos + 4..pos + 8].copy_from_slice(&slot.length.to_le_bytes());
            pos += SLOT_ENTRY_SIZE;
        }

        for (slot, record) in self.slots.iter().zip(&self.records) {
            let start = slot.offset as usize;
            let end = start + slot.length as usize;
            if start < directory_end || end > self.page_size || record.len() != slot.length as usize
            {
                return Err(StorageError::CorruptPage {
                    page_id: self.page_id,
                    reason: "slot points outside the record area".into(),
                });
            }
            buf[start..end].copy_from_slice(record);
        }

        Ok(buf)
    }

    /// Inverse of [`Page::serialize`]. Round trips every field except the
    /// dirty flag (always written as 0 by the buffer) and the LRU stamp,
    /// which are observational.
    pub fn deserialize(bytes: &[u8], page_size: usize) -> Result<Page, StorageError> {
        if bytes.len() != page_size {
            return Err(StorageError::PageSizeMismatch {
                got: bytes.len(),
                expected: page_size,
            });
        }
        if page_size < PAGE_HEADER_SIZE {
            return Err(StorageError::CorruptPage {
                page_id: -1,
                reason: "page smaller than its header".into(),
            });
        }

        let page_id = read_i32(bytes, 0);
        let corrupt = |reason: &str| StorageError::CorruptPage {
            page_id,
            reason: reason.into(),
        };

        let stored_size = read_u32(bytes, 4) as usize;
        if stored_size != page_size {
            return Err(corrupt("stored page size disagrees with the heap file"));
        }

        let free_space_end = read_u32(bytes, 8) as usize;
        if free_space_end > page_size {
            return Err(corrupt("free space boundary outside the page"));
        }

        let slot_count = read_u32(bytes, 12) as usize;
        let directory_end = PAGE_HEADER_SIZE + slot_count * SLOT_ENTRY_SIZE;
        if directory_end > page_size {
            return Err(corrupt("slot directory overruns the page"));
        }

        let next_page_id = read_i32(bytes, 16);
        let last_access = read_u64(bytes, 20);
        let dirty = bytes[28] == 1;

        let mut slots = Vec::with_capacity(slot_count);
        let mut pos = PAGE_HEADER_SIZE;
        for _ in 0..slot_count {
            let slot = Slot {
                offset: read_u32(bytes, pos),
                length: read_u32(bytes, pos + 4),
            };
            let start = slot.offset as usize;
            let end = start + slot.length as usize;
            if slot.length == 0 || start < directory_end || end > page_size {
                return Err(corrupt("slot points outside the record area"));
            }
            slots.push(slot);
            pos += SLOT_ENTRY_SIZE;
        }

        let records = slots
            .iter()
            .map(|slot| {
                let start = slot.offset as usize;
                bytes[start..start + slot.length as usize].to_vec()
            })
            .collect();

        Ok(Page {
            page_id,
            page_size,
            records,
            slots,
            free_space_end,
            next_page_id,
            last_access,
            dirty,
        })
    }
}
