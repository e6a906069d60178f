//! # Order Form
//!
//! The order-editing core. An [`OrderForm`] models one editing session for
//! one order: a list of [`LineItem`]s plus the header fields (customer,
//! payment, currency, shipping). Every field-change handler recomputes the
//! derived amounts before returning, so the form is never observably
//! inconsistent:
//!
//! - a line's `total_amount` is always `unit_amount * quantity`;
//! - the form's `grand_total` is always the sum of all line totals.
//!
//! Product prices come from a [`ProductLookup`] collaborator; a selection
//! whose product no longer exists resolves to a price of zero rather than
//! an error, leaving the user free to correct it. Picking a product already
//! chosen on a sibling line is rejected at selection time.
//!
//! The form is pure and synchronous. Persistence happens only when the
//! session is explicitly saved via
//! [`OrderClient::save_order`](crate::clients::OrderClient::save_order),
//! which runs the save-time validation in [`OrderForm::validate`].

pub mod error;
pub mod form;
pub mod lookup;

pub use error::FormError;
pub use form::{LineItem, OrderForm};
pub use lookup::{ProductCatalog, ProductLookup};
