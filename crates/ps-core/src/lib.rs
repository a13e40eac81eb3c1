//! # ps-core
//!
//! Core domain models and ports for pagesel.
//!
//! This crate contains the selection and pagination model without any
//! infrastructure dependencies. Fetching records is expressed through
//! [`ports::RecordSourcePort`]; everything else is synchronous in-memory state.

pub mod config;
pub mod cursor;
pub mod events;
pub mod ids;
pub mod page;
pub mod ports;
pub mod record;
pub mod selection;

// Re-export commonly used types at the crate root
pub use config::BrowseConfig;
pub use cursor::CursorState;
pub use events::SessionEvent;
pub use ids::{RecordId, SessionId};
pub use page::{Page, PageRequest, PageRequestError};
pub use record::Record;
pub use selection::{toggle_select_all_on_page, FillCompletion, SelectAllToggle, SelectionStore};
