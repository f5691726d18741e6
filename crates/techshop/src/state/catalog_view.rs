//! Catalog screen state

use super::{next_index, previous_index};

/// Selection in the product list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogViewState {
    pub selected: usize,
}

impl CatalogViewState {
    pub fn select_next(&mut self, len: usize) {
        self.selected = next_index(self.selected, len);
    }

    pub fn select_previous(&mut self, len: usize) {
        self.selected = previous_index(self.selected, len);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }
}
