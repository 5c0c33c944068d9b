use crate::types::schema_types::TableSchema;
use std::collections::BTreeMap;

// Persistent database metadata. Page size and indexing are fixed when the
// database is created; the free page list and last page id track heap file
// allocation across restarts.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub(crate) page_size: u32,
    pub(crate) indexing: bool,
    pub(crate) free_page_list_head: i32, // -1 means no free pages
    pub(crate) last_page_id: i32,        // -1 until the first page is allocated
    pub(crate) tables: BTreeMap<String, TableSchema>,
}

impl Catalog {
    pub fn new(page_size: u32, indexing: bool) -> Self {
        Self {
            page_size,
            indexing,
            free_page_list_head: -1,
            last_page_id: -1,
            tables: BTreeMap::new(),
        }
    }

    /// Registers a table. Refuses a duplicate name.
    pub fn add_table(&mut self, table: TableSchema) -> bool {
        let name = table.name().to_string();
        if self.tables.contains_key(&name) {
            return false;
        }
        self.tables.insert(name, table);
        true
    }

    /// Removes the named table from the catalog.
    pub fn drop_table(&mut self, name: &str) -> bool {
        self.tables.remove(&name.to_lowercase()).is_some()
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.tables.contains_key(&name.to_lowercase())
    }

    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.get(&name.to_lowercase())
    }

    pub fn table_mut(&mut self, name: &str) -> Option<&mut TableSchema> {
        self.tables.get_mut(&name.to_lowercase())
    }

    pub fn tables(&self) -> &BTreeMap<String, TableSchema> {
        &self.tables
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn indexing(&self) -> bool {
        self.indexing
    }

    pub fn free_page_list_head(&self) -> i32 {
        self.free_page_list_head
    }

    pub fn set_free_page_list_head(&mut self, page_id: i32) {
        self.free_page_list_head = page_id;
    }

    pub fn last_page_id(&self) -> i32 {
        self.last_page_id
    }

    pub fn set_last_page_id(&mut self, page_id: i32) {
        self.last_page_id = page_id;
    }
}
