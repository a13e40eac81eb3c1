//! pagesel Application Orchestration Layer
//!
//! This crate contains the browse use cases and the [`BrowseSession`] that
//! routes UI events to them.

pub mod error;
pub mod session;
pub mod usecases;

pub use error::{SessionError, ValidationError};
pub use session::{BrowseSession, RowView};
pub use usecases::{BulkFill, BulkFillOutcome, LoadPage};
