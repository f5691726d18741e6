//! Catalog screen actions

/// Selection movement in the product list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogAction {
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
}
