pub mod config;
pub mod events;
pub mod source;

pub use config::load_or_default;
pub use events::{ChannelSessionEvents, FanOutSessionEvents, TracingSessionEvents};
pub use source::{HttpRecordSource, InMemoryRecordSource};
