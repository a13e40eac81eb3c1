//! Record source adapters.

pub mod http;
pub mod in_memory;

pub use http::HttpRecordSource;
pub use in_memory::{demo_artworks, InMemoryRecordSource};
