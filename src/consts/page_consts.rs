// page_id + page_size + free_space_end + slot_count + next_page_id (4 bytes each)
// + last access timestamp (8) + dirty flag (1)
pub const PAGE_HEADER_SIZE: usize = 29;

// slot directory entry: offset (4) + length (4)
pub const SLOT_ENTRY_SIZE: usize = 8;
