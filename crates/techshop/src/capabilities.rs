//! View capability system
//!
//! Views declare capabilities so the keyboard middleware can decide which
//! commands make sense without knowing the concrete view type.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// View has a list that can move its selection up and down
        const ITEM_NAVIGATION = 1 << 0;

        /// View can change the quantity of the selected cart line
        const QUANTITY_CONTROLS = 1 << 1;

        /// View is a modal overlay that blocks everything below it
        const MODAL = 1 << 2;
    }
}

impl PanelCapabilities {
    /// Check if the view supports next/previous item navigation
    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }

    /// Check if the view exposes +/-/remove on the selected line
    pub fn supports_quantity_controls(self) -> bool {
        self.contains(Self::QUANTITY_CONTROLS)
    }

    pub fn is_modal(self) -> bool {
        self.contains(Self::MODAL)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let caps = PanelCapabilities::default();
        assert!(!caps.supports_item_navigation());
        assert!(!caps.supports_quantity_controls());
        assert!(!caps.is_modal());
    }

    #[test]
    fn test_flags_are_independent() {
        let caps = PanelCapabilities::ITEM_NAVIGATION | PanelCapabilities::QUANTITY_CONTROLS;
        assert!(caps.supports_item_navigation());
        assert!(caps.supports_quantity_controls());
        assert!(!caps.is_modal());
    }
}
