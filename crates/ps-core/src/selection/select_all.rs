use crate::record::Record;

use super::store::SelectionStore;

/// Add or remove a whole page of records in one action.
///
/// `flag == false` adds every record of the page and returns `true`;
/// `flag == true` removes them and returns `false`. The flag is never checked
/// against the actual selection, so it can drift after individual row toggles.
pub fn toggle_select_all_on_page(
    store: &mut SelectionStore,
    current_page_records: &[Record],
    flag: bool,
) -> bool {
    if flag {
        store.remove_all(current_page_records);
    } else {
        store.add_all(current_page_records);
    }
    !flag
}

/// Session-wide page-select-all flag.
///
/// One flag per session, not per page: it records whether the last
/// select-all action added or removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectAllToggle {
    active: bool,
}

impl SelectAllToggle {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn apply(&mut self, store: &mut SelectionStore, current_page_records: &[Record]) -> bool {
        self.active = toggle_select_all_on_page(store, current_page_records, self.active);
        self.active
    }
}
