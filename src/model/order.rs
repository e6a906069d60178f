use crate::model::{ProductId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Stripe,
    CashOnDelivery,
}

/// Settlement state of the payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

/// Fulfilment state of the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    New,
    Processing,
    Canceled,
    Shipped,
    Delivered,
}

/// Currency the order is priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    #[default]
    Eur,
    Inr,
    Gbp,
}

impl Currency {
    /// ISO code used when formatting amounts for display.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Inr => "INR",
            Currency::Gbp => "GBP",
        }
    }
}

/// Carrier used for shipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShippingMethod {
    #[default]
    Fedex,
    Ups,
    Dhl,
    Usps,
}

/// One persisted product/quantity/price entry within an order.
///
/// `unit_amount` is the product price captured at selection time;
/// `total_amount` is always `unit_amount * quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub unit_amount: Decimal,
    pub quantity: u32,
    pub total_amount: Decimal,
}

/// A customer order with its line items and denormalized grand total.
///
/// `grand_total` is derived from the items and never edited directly;
/// [`Order::new`] recomputes it so a stale value can't be persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub grand_total: Decimal,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub status: OrderStatus,
    pub currency: Currency,
    pub shipping_method: ShippingMethod,
    pub notes: Option<String>,
}

impl Order {
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        let grand_total = params.items.iter().map(|i| i.total_amount).sum();
        Self {
            id,
            user_id: params.user_id,
            items: params.items,
            grand_total,
            payment_method: params.payment_method,
            payment_status: params.payment_status,
            status: params.status,
            currency: params.currency,
            shipping_method: params.shipping_method,
            notes: params.notes,
        }
    }
}

/// Payload for persisting a new order, produced by a validated
/// [`OrderForm`](crate::order_form::OrderForm).
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub status: OrderStatus,
    pub currency: Currency,
    pub shipping_method: ShippingMethod,
    pub notes: Option<String>,
}

/// Payload for updating an order after placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub notes: Option<String>,
}
