//! Field-level errors raised while editing or saving an order form.

use crate::model::ProductId;
use thiserror::Error;

/// Errors surfaced to the user at the field level.
///
/// None of these are fatal: a rejected mutation leaves the form unchanged,
/// and save-time errors block the save until the field is corrected.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    /// The referenced line does not exist.
    #[error("no line item at position {index}")]
    NoSuchLine { index: usize },

    /// Quantity must be a positive integer.
    #[error("quantity on line {index} must be at least 1, got {got}")]
    InvalidQuantity { index: usize, got: i64 },

    /// The product is already selected on a sibling line of the same order.
    #[error("{product_id} is already selected on line {existing}")]
    DuplicateProduct {
        product_id: ProductId,
        existing: usize,
    },

    /// No customer selected at save time.
    #[error("a customer must be selected")]
    MissingCustomer,

    /// No payment method selected at save time.
    #[error("a payment method must be selected")]
    MissingPaymentMethod,

    /// A line has no product selected at save time.
    #[error("line {index} has no product selected")]
    MissingProduct { index: usize },
}
