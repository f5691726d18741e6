//! Confirmation Popup State
//!
//! A modal message with a single OK button.

use techshop_core::Money;

/// What the popup confirms - determines text and follow-up actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationIntent {
    /// An order was placed; OK clears the cart and returns to the catalog
    OrderPlaced { items: u32, total: Money },
}

impl ConfirmationIntent {
    pub fn title(&self) -> &'static str {
        match self {
            Self::OrderPlaced { .. } => "Checkout Successful",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::OrderPlaced { .. } => "Thank you for your purchase!",
        }
    }

    /// Secondary line with the order details
    pub fn detail(&self) -> String {
        match self {
            Self::OrderPlaced { items, total } => {
                let noun = if *items == 1 { "item" } else { "items" };
                format!("{} {} - {} charged", items, noun, total)
            }
        }
    }
}

/// State for the confirmation popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPopupState {
    pub intent: ConfirmationIntent,
}

impl ConfirmationPopupState {
    pub fn new(intent: ConfirmationIntent) -> Self {
        Self { intent }
    }
}
