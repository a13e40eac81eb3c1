pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::resolve_config;
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{wire_session, WiredSession};
