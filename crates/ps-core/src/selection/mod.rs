//! Page-independent selection state.

mod fill;
mod select_all;
mod store;

pub use fill::FillCompletion;
pub use select_all::{toggle_select_all_on_page, SelectAllToggle};
pub use store::SelectionStore;
