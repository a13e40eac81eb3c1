//! Browse use cases
//!
//! UI event
//!         ↓
//! BrowseSession (owns cursor, displayed page, selection)
//!         ↓
//! ---------------------------------
//! LoadPage        → one page for the cursor
//! BulkFill        → first N records across pages
//! parse_bulk_count → bulk input validation
//! ---------------------------------

pub mod bulk_count;
pub mod bulk_fill;
pub mod load_page;

pub use bulk_count::parse_bulk_count;
pub use bulk_fill::{BulkFill, BulkFillError, BulkFillOutcome};
pub use load_page::LoadPage;
