// Slot directory entry: where a record sits inside the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub(crate) offset: u32, // byte offset from the start of the page
    pub(crate) length: u32, // record length in bytes
}

// In-memory slotted page. Records and slots are parallel vectors; on disk
// each record sits at its slot offset in the area growing down from the
// end of the page.
#[derive(Debug, Clone)]
pub struct Page {
    pub(crate) page_id: i32,
    pub(crate) page_size: usize,
    pub(crate) records: Vec<Vec<u8>>,
    pub(crate) slots: Vec<Slot>,
    pub(crate) free_space_end: usize, // grows back toward the header as records land
    pub(crate) next_page_id: i32,     // -1 means no next page
    pub(crate) last_access: u64,      // monotonic LRU stamp
    pub(crate) dirty: bool,
}
