//! Cart screen state

use super::{next_index, previous_index};

/// Selection in the cart line list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartViewState {
    pub selected: usize,
}

impl CartViewState {
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

    /// Keep the selection on a valid line after lines were removed
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_after_removal() {
        let mut state = CartViewState { selected: 3 };
        state.clamp(2);
        assert_eq!(state.selected, 1);

        state.clamp(0);
        assert_eq!(state.selected, 0);
    }
}
