pub const HEAP_FILE: &str = "db";        // heap file inside the database directory
pub const CATALOG_FILE: &str = "catalog"; // catalog file next to the heap file
