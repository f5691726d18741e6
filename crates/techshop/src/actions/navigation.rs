//! Navigation actions - shared by every list screen

/// Generic list navigation (vim-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Next item (j, down arrow)
    Next,
    /// Previous item (k, up arrow)
    Previous,
    /// First item (gg)
    ToTop,
    /// Last item (G)
    ToBottom,
}
