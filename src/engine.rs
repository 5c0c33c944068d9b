use crate::catalog::io as catalog_io;
use crate::consts::catalog_consts::{CATALOG_FILE, HEAP_FILE};
use crate::consts::page_consts::{PAGE_HEADER_SIZE, SLOT_ENTRY_SIZE};
use crate::errors::engine_error::EngineError;
use crate::storage::storage_manager::StorageManager;
use crate::types::catalog_types::Catalog;
use log::info;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

// The whole database: catalog plus storage manager over one directory.
pub struct Engine {
    pub catalog: Catalog,
    pub storage: StorageManager,
    catalog_path: PathBuf,
}

impl Engine {
    /// Opens the database directory, creating it (and an empty heap file)
    /// on first run. On a restart the catalog's stored page size and
    /// indexing flag override the arguments.
    pub fn open(
        dir: &Path,
        page_size: u32,
        buffer_pages: usize,
        indexing: bool,
    ) -> Result<Self, EngineError> {
        if buffer_pages == 0 {
            return Err(EngineError::Execution("buffer size must be positive".into()));
        }

        fs::create_dir_all(dir)?;

        let heap_path = dir.join(HEAP_FILE);
        if !heap_path.exists() {
            OpenOptions::new()
                .create(true)
                .write(true)
                .open(&heap_path)?;
            info!("created empty heap file at {}", heap_path.display());
        }

        let catalog_path = dir.join(CATALOG_FILE);
        let restarting = catalog_path.exists();
        let catalog = catalog_io::load_or_create(&catalog_path, page_size, indexing)?;

        if restarting {
            info!(
                "restarting database: stored page size {} and indexing {} govern",
                catalog.page_size(),
                catalog.indexing()
            );
        }

        let effective_page_size = catalog.page_size() as usize;
        if effective_page_size <= PAGE_HEADER_SIZE + SLOT_ENTRY_SIZE {
            return Err(EngineError::Execution(format!(
                "page size must exceed {} bytes",
                PAGE_HEADER_SIZE + SLOT_ENTRY_SIZE
            )));
        }

        let storage = StorageManager::new(heap_path, effective_page_size, buffer_pages);

        Ok(Self {
            catalog,
            storage,
            catalog_path,
        })
    }

    /// Flushes the page buffer and saves the catalog. The catalog save is
    /// attempted even when the flush fails.
    pub fn shutdown(&mut self) -> Result<(), EngineError> {
        let flushed = self.storage.evict_all();
        catalog_io::save(&self.catalog_path, &self.catalog)?;
        flushed?;
        info!("database shut down cleanly");
        Ok(())
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }
}
