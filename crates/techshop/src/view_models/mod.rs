pub mod cart_view_model;
pub mod catalog_view_model;
pub mod checkout_view_model;
pub mod confirmation_popup_view_model;
pub mod status_bar;

pub use cart_view_model::CartViewModel;
pub use catalog_view_model::CatalogViewModel;
pub use checkout_view_model::CheckoutViewModel;
pub use confirmation_popup_view_model::ConfirmationPopupViewModel;
pub use status_bar::StatusBarViewModel;
