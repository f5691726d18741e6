pub mod app_reducer;
pub mod cart_reducer;
pub mod catalog_reducer;
pub mod confirmation_popup_reducer;
pub mod status_bar_reducer;
pub mod theme_reducer;
