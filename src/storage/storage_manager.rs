use crate::errors::storage_error::StorageError;
use crate::storage::buffer::Buffer;
use crate::types::catalog_types::Catalog;
use crate::types::schema_types::TableSchema;
use crate::types::storage_types::{Record, Value};
use log::debug;
use std::path::PathBuf;

// Table-level facade. Owns the page chain topology per table; every page
// access goes through the buffer, never the heap file directly.
pub struct StorageManager {
    buffer: Buffer,
}

impl StorageManager {
    pub fn new(heap_path: impl Into<PathBuf>, page_size: usize, buffer_pages: usize) -> Self {
        Self {
            buffer: Buffer::new(heap_path, page_size, buffer_pages),
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Allocates an empty head page and registers the schema. Returns
    /// false when a table with the same name already exists.
    pub fn create_table(
        &mut self,
        catalog: &mut Catalog,
        mut schema: TableSchema,
    ) -> Result<bool, StorageError> {
        if catalog.has_table(schema.name()) {
            return Ok(false);
        }

        let head = self.buffer.create_new_page(catalog)?;
        schema.set_head_page_id(head.page_id());
        self.buffer.put_page(head)?;

        Ok(catalog.add_table(schema))
    }

    /// Returns every page of the table to the free list and removes the
    /// schema from the catalog. Returns false for an unknown table.
    pub fn drop_table(&mut self, catalog: &mut Catalog, name: &str) -> Result<bool, StorageError> {
        let Some(schema) = catalog.table(name).cloned() else {
            return Ok(false);
        };

        let mut page_id = schema.head_page_id();
        while page_id != -1 {
            // the chain link dies when the page is freed, so read it first
            let next = self.buffer.get_page(page_id)?.next_page_id();
            self.free_page(catalog, page_id)?;
            page_id = next;
        }

        Ok(catalog.drop_table(name))
    }

    /// Appends a record to the table, splitting the tail page when it is
    /// full. Returns false on a primary key violation.
    pub fn insert(
        &mut self,
        catalog: &mut Catalog,
        table_name: &str,
        values: Vec<Value>,
    ) -> Result<bool, StorageError> {
        let schema = catalog
            .table(table_name)
            .cloned()
            .ok_or_else(|| StorageError::UnknownTable(table_name.to_string()))?;

        let record = Record::new(values);
        let bytes = record.encode(&schema)?;

        if self.has_primary_key_violation(&schema, &record)? {
            return Ok(false);
        }

        let (before_tail, tail) = self.find_tail_pages(schema.head_page_id())?;
        if self.buffer.get_page(tail)?.add_record(&bytes) {
            return Ok(true);
        }

        // Tail is full: split it into two fresh pages and retire it.
        debug!("splitting page {} of table '{}'", tail, schema.name());
        let mut first = self.buffer.create_new_page(catalog)?;
        let mut second = self.buffer.create_new_page(catalog)?;
        first.set_next_page(second.page_id());

        self.buffer.get_page(tail)?.split(&mut first, &mut second);

        if before_tail == -1 {
            if let Some(table) = catalog.table_mut(table_name) {
                table.set_head_page_id(first.page_id());
            }
        } else {
            self.buffer
                .get_page(before_tail)?
                .set_next_page(first.page_id());
        }

        let inserted = second.add_record(&bytes);
        self.buffer.put_page(first)?;
        self.buffer.put_page(second)?;
        self.free_page(catalog, tail)?;

        if !inserted {
            // the incoming record exceeds a whole empty page
            return Err(StorageError::SplitOverflow);
        }
        Ok(true)
    }

    /// Full scan: chain order, then within-page insertion order.
    pub fn select_all(
        &mut self,
        catalog: &Catalog,
        table_name: &str,
    ) -> Result<Vec<Record>, StorageError> {
        let schema = catalog
            .table(table_name)
            .cloned()
            .ok_or_else(|| StorageError::UnknownTable(table_name.to_string()))?;

        let mut records = Vec::new();
        let mut page_id = schema.head_page_id();
        while page_id != -1 {
            let (datas, next) = {
                let page = self.buffer.get_page(page_id)?;
                (page.records().to_vec(), page.next_page_id())
            };
            for data in &datas {
                records.push(Record::decode(data, &schema)?);
            }
            page_id = next;
        }

        Ok(records)
    }

    /// Rebuilds the table under the new schema: fresh head page, every old
    /// record rewritten (values matched by attribute name, defaults or
    /// null for added attributes), old pages freed as they drain.
    pub fn alter_table(
        &mut self,
        catalog: &mut Catalog,
        old_name: &str,
        mut new_schema: TableSchema,
    ) -> Result<bool, StorageError> {
        let Some(old_schema) = catalog.table(old_name).cloned() else {
            return Ok(false);
        };

        let new_head = self.buffer.create_new_page(catalog)?;
        new_schema.set_head_page_id(new_head.page_id());
        self.buffer.put_page(new_head)?;

        catalog.drop_table(old_name);
        let new_name = new_schema.name().to_string();
        catalog.add_table(new_schema.clone());

        let mut old_page_id = old_schema.head_page_id();
        while old_page_id != -1 {
            let (datas, next) = {
                let page = self.buffer.get_page(old_page_id)?;
                (page.records().to_vec(), page.next_page_id())
            };
            for data in &datas {
                let old_record = Record::decode(data, &old_schema)?;
                let values = rewrite_record_for_alter(&old_record, &old_schema, &new_schema);
                if !self.insert(catalog, &new_name, values)? {
                    return Err(StorageError::AlterRebuild);
                }
            }
            self.free_page(catalog, old_page_id)?;
            old_page_id = next;
        }

        Ok(true)
    }

    /// Wipes the page and threads it onto the tail of the free page list.
    pub fn free_page(&mut self, catalog: &mut Catalog, page_id: i32) -> Result<(), StorageError> {
        {
            let page = self.buffer.get_page(page_id)?;
            page.clean_data();
            page.set_dirty();
        }

        if catalog.free_page_list_head() == -1 {
            catalog.set_free_page_list_head(page_id);
            return Ok(());
        }

        let mut current = catalog.free_page_list_head();
        loop {
            let page = self.buffer.get_page(current)?;
            match page.next_page_id() {
                -1 => {
                    page.set_next_page(page_id);
                    return Ok(());
                }
                next => current = next,
            }
        }
    }

    /// Flushes every dirty page to the heap file.
    pub fn evict_all(&mut self) -> Result<(), StorageError> {
        self.buffer.evict_all()
    }

    // Walks the chain to the tail page (next == -1) and its predecessor,
    // -1 when the tail is the head.
    fn find_tail_pages(&mut self, head_page_id: i32) -> Result<(i32, i32), StorageError> {
        let mut previous = -1;
        let mut current = head_page_id;
        loop {
            let next = self.buffer.get_page(current)?.next_page_id();
            if next == -1 {
                return Ok((previous, current));
            }
            previous = current;
            current = next;
        }
    }

    // Scans the chain for an equal primary key value. A null candidate is
    // itself a violation.
    fn has_primary_key_violation(
        &mut self,
        schema: &TableSchema,
        candidate: &Record,
    ) -> Result<bool, StorageError> {
        let Some(pk) = schema.primary_key() else {
            return Ok(false);
        };
        let Some(pk_index) = schema.attribute_index(pk.name()) else {
            return Ok(false);
        };

        let candidate_value = match candidate.value(pk_index) {
            Some(Value::Null) | None => return Ok(true),
            Some(value) => value,
        };

        let mut page_id = schema.head_page_id();
        while page_id != -1 {
            let (datas, next) = {
                let page = self.buffer.get_page(page_id)?;
                (page.records().to_vec(), page.next_page_id())
            };
            for data in &datas {
                let record = Record::decode(data, schema)?;
                if record.value(pk_index) == Some(candidate_value) {
                    return Ok(true);
                }
            }
            page_id = next;
        }

        Ok(false)
    }
}

// For every attribute of the new schema, copy the value at the matching
// name from the old record, or fall back to the attribute's default.
fn rewrite_record_for_alter(
    old_record: &Record,
    old_schema: &TableSchema,
    new_schema: &TableSchema,
) -> Vec<Value> {
    new_schema
        .attributes()
        .iter()
        .map(|attribute| match old_schema.attribute_index(attribute.name()) {
            Some(index) => old_record.values()[index].clone(),
            None => attribute.default().cloned().unwrap_or(Value::Null),
        })
        .collect()
}
