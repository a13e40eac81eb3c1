//! ID type wrappers for type safety.

mod id_macro;
pub mod record_id;
pub mod session_id;

pub use record_id::RecordId;
pub use session_id::SessionId;
