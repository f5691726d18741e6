#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Flip between light and dark mode
    Toggle,
}
