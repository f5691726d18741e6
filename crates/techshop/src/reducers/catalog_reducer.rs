//! Catalog Reducer

use crate::actions::CatalogAction;
use crate::state::CatalogViewState;

/// Move the product list selection
pub fn reduce_catalog(
    mut state: CatalogViewState,
    action: &CatalogAction,
    product_count: usize,
) -> CatalogViewState {
    match action {
        CatalogAction::NavigateNext => state.select_next(product_count),
        CatalogAction::NavigatePrevious => state.select_previous(product_count),
        CatalogAction::NavigateToTop => state.select_first(),
        CatalogAction::NavigateToBottom => state.select_last(product_count),
    }
    state
}
