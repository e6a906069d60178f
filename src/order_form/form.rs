//! The [`OrderForm`] state machine and its [`LineItem`]s.

use crate::model::{
    Currency, Order, OrderCreate, OrderItem, OrderStatus, PaymentMethod, PaymentStatus, ProductId,
    ShippingMethod, UserId,
};
use crate::order_form::{FormError, ProductLookup};
use rust_decimal::Decimal;
use tracing::debug;

/// One editable product/quantity/price row.
///
/// Fields are private: `unit_amount` is set only through product selection
/// and `total_amount` only by recomputation, so the
/// `total_amount == unit_amount * quantity` invariant cannot be broken from
/// outside.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    product_id: Option<ProductId>,
    unit_amount: Decimal,
    quantity: u32,
    total_amount: Decimal,
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            product_id: None,
            unit_amount: Decimal::ZERO,
            quantity: 1,
            total_amount: Decimal::ZERO,
        }
    }
}

impl LineItem {
    pub fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }

    pub fn unit_amount(&self) -> Decimal {
        self.unit_amount
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    fn recompute_total(&mut self) {
        self.total_amount = self.unit_amount * Decimal::from(self.quantity);
    }
}

/// In-memory state of one order editing session.
///
/// All mutating handlers are synchronous and total: they either reject the
/// input with a [`FormError`] and leave the form untouched, or apply it and
/// recompute every derived amount before returning.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    customer: Option<UserId>,
    payment_method: Option<PaymentMethod>,
    payment_status: PaymentStatus,
    status: OrderStatus,
    currency: Currency,
    shipping_method: ShippingMethod,
    notes: Option<String>,
    lines: Vec<LineItem>,
    grand_total: Decimal,
}

impl OrderForm {
    /// An empty form with the defaults a new order starts from.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload a persisted order for editing.
    ///
    /// Derived amounts are recomputed from the stored factors rather than
    /// trusted, so a form loaded from storage satisfies the same invariants
    /// as one built interactively.
    pub fn from_order(order: &Order) -> Self {
        let mut form = Self {
            customer: Some(order.user_id),
            payment_method: Some(order.payment_method),
            payment_status: order.payment_status,
            status: order.status,
            currency: order.currency,
            shipping_method: order.shipping_method,
            notes: order.notes.clone(),
            lines: order
                .items
                .iter()
                .map(|item| {
                    let mut line = LineItem {
                        product_id: Some(item.product_id),
                        unit_amount: item.unit_amount,
                        quantity: item.quantity.max(1),
                        total_amount: Decimal::ZERO,
                    };
                    line.recompute_total();
                    line
                })
                .collect(),
            grand_total: Decimal::ZERO,
        };
        form.recompute_grand_total();
        form
    }

    // --- Header fields ---

    pub fn set_customer(&mut self, customer: Option<UserId>) {
        self.customer = customer;
    }

    pub fn customer(&self) -> Option<UserId> {
        self.customer
    }

    pub fn set_payment_method(&mut self, method: Option<PaymentMethod>) {
        self.payment_method = method;
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn set_payment_status(&mut self, status: PaymentStatus) {
        self.payment_status = status;
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn set_shipping_method(&mut self, method: ShippingMethod) {
        self.shipping_method = method;
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
    }

    // --- Line items ---

    /// The current lines, in display order.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Insert an empty line at `index` (`index == len` appends).
    pub fn add_line(&mut self, index: usize) -> Result<usize, FormError> {
        if index > self.lines.len() {
            return Err(FormError::NoSuchLine { index });
        }
        self.lines.insert(index, LineItem::default());
        self.recompute_grand_total();
        debug!(index, lines = self.lines.len(), "line added");
        Ok(index)
    }

    /// Append an empty line and return its index.
    pub fn push_line(&mut self) -> usize {
        let index = self.lines.len();
        self.lines.insert(index, LineItem::default());
        self.recompute_grand_total();
        debug!(index, lines = self.lines.len(), "line added");
        index
    }

    /// Remove the line at `index`; later lines shift down, leaving no gap.
    pub fn remove_line(&mut self, index: usize) -> Result<LineItem, FormError> {
        if index >= self.lines.len() {
            return Err(FormError::NoSuchLine { index });
        }
        let removed = self.lines.remove(index);
        self.recompute_grand_total();
        debug!(index, lines = self.lines.len(), "line removed");
        Ok(removed)
    }

    /// Select (or clear) the product on a line.
    ///
    /// A product already selected on a sibling line is rejected and the form
    /// left unchanged. Otherwise `unit_amount` becomes the looked-up price,
    /// or zero when the lookup misses, and both the line total and the grand
    /// total are recomputed. Quantity is untouched.
    pub fn select_product(
        &mut self,
        index: usize,
        product_id: Option<ProductId>,
        lookup: &impl ProductLookup,
    ) -> Result<(), FormError> {
        if index >= self.lines.len() {
            return Err(FormError::NoSuchLine { index });
        }
        if let Some(id) = product_id {
            if let Some(existing) = self
                .lines
                .iter()
                .position(|l| l.product_id == Some(id))
                .filter(|&pos| pos != index)
            {
                return Err(FormError::DuplicateProduct {
                    product_id: id,
                    existing,
                });
            }
        }

        let unit_amount = product_id
            .and_then(|id| lookup.price_of(id))
            .unwrap_or(Decimal::ZERO);
        let line = &mut self.lines[index];
        line.product_id = product_id;
        line.unit_amount = unit_amount;
        line.recompute_total();
        self.recompute_grand_total();
        debug!(index, ?product_id, %unit_amount, "product selected");
        Ok(())
    }

    /// Change the quantity on a line.
    ///
    /// Anything below 1 (or beyond `u32`) is rejected with the form left
    /// unchanged; valid input recomputes the line total and the grand total.
    pub fn set_quantity(&mut self, index: usize, quantity: i64) -> Result<(), FormError> {
        if index >= self.lines.len() {
            return Err(FormError::NoSuchLine { index });
        }
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|&q| q >= 1)
            .ok_or(FormError::InvalidQuantity {
                index,
                got: quantity,
            })?;
        let line = &mut self.lines[index];
        line.quantity = quantity;
        line.recompute_total();
        self.recompute_grand_total();
        debug!(index, quantity, "quantity changed");
        Ok(())
    }

    // --- Derived totals ---

    /// Reset `grand_total` to the sum of all line totals. Never fails; an
    /// empty form totals zero.
    pub fn recompute_grand_total(&mut self) {
        self.grand_total = self.lines.iter().map(|l| l.total_amount).sum();
    }

    pub fn grand_total(&self) -> Decimal {
        self.grand_total
    }

    /// The grand total formatted for display, labeled with the *selected*
    /// currency.
    pub fn display_total(&self) -> String {
        format!("{:.2} {}", self.grand_total, self.currency.code())
    }

    // --- Saving ---

    /// All outstanding save blockers, in field order. An empty result means
    /// the form may be persisted.
    pub fn validate(&self) -> Vec<FormError> {
        let mut errors = Vec::new();
        if self.customer.is_none() {
            errors.push(FormError::MissingCustomer);
        }
        if self.payment_method.is_none() {
            errors.push(FormError::MissingPaymentMethod);
        }
        for (index, line) in self.lines.iter().enumerate() {
            if line.product_id.is_none() {
                errors.push(FormError::MissingProduct { index });
            }
        }
        errors
    }

    /// Convert the form into a persistable [`OrderCreate`], or the first
    /// validation error blocking the save.
    pub fn into_create(self) -> Result<OrderCreate, FormError> {
        let user_id = self.customer.ok_or(FormError::MissingCustomer)?;
        let payment_method = self
            .payment_method
            .ok_or(FormError::MissingPaymentMethod)?;
        let mut items = Vec::with_capacity(self.lines.len());
        for (index, line) in self.lines.into_iter().enumerate() {
            let product_id = line.product_id.ok_or(FormError::MissingProduct { index })?;
            items.push(OrderItem {
                product_id,
                unit_amount: line.unit_amount,
                quantity: line.quantity,
                total_amount: line.total_amount,
            });
        }
        Ok(OrderCreate {
            user_id,
            items,
            payment_method,
            payment_status: self.payment_status,
            status: self.status,
            currency: self.currency,
            shipping_method: self.shipping_method,
            notes: self.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderId;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn catalog() -> HashMap<ProductId, Decimal> {
        HashMap::from([
            (ProductId(1), dec!(10.00)),
            (ProductId(2), dec!(5.50)),
            (ProductId(3), dec!(99.99)),
        ])
    }

    #[test]
    fn empty_form_totals_zero() {
        let form = OrderForm::new();
        assert_eq!(form.grand_total(), Decimal::ZERO);
        assert!(form.lines().is_empty());
    }

    #[test]
    fn selecting_a_product_copies_its_price() {
        let mut form = OrderForm::new();
        let line = form.push_line();
        form.select_product(line, Some(ProductId(1)), &catalog())
            .unwrap();

        assert_eq!(form.lines()[line].unit_amount(), dec!(10.00));
        assert_eq!(form.lines()[line].quantity(), 1);
        assert_eq!(form.lines()[line].total_amount(), dec!(10.00));
        assert_eq!(form.grand_total(), dec!(10.00));
    }

    #[test]
    fn lookup_miss_prices_the_line_at_zero() {
        let mut form = OrderForm::new();
        let line = form.push_line();
        form.select_product(line, Some(ProductId(42)), &catalog())
            .unwrap();

        assert_eq!(form.lines()[line].product_id(), Some(ProductId(42)));
        assert_eq!(form.lines()[line].unit_amount(), Decimal::ZERO);
        assert_eq!(form.grand_total(), Decimal::ZERO);
    }

    #[test]
    fn clearing_a_selection_zeroes_the_price() {
        let mut form = OrderForm::new();
        let line = form.push_line();
        form.select_product(line, Some(ProductId(1)), &catalog())
            .unwrap();
        form.select_product(line, None, &catalog()).unwrap();

        assert_eq!(form.lines()[line].product_id(), None);
        assert_eq!(form.lines()[line].unit_amount(), Decimal::ZERO);
        assert_eq!(form.grand_total(), Decimal::ZERO);
    }

    #[test]
    fn quantity_change_recomputes_line_and_grand_totals() {
        let mut form = OrderForm::new();
        let line = form.push_line();
        form.select_product(line, Some(ProductId(1)), &catalog())
            .unwrap();
        form.set_quantity(line, 3).unwrap();

        assert_eq!(form.lines()[line].total_amount(), dec!(30.00));
        assert_eq!(form.grand_total(), dec!(30.00));
    }

    #[test]
    fn zero_and_negative_quantities_are_rejected_unchanged() {
        let mut form = OrderForm::new();
        let line = form.push_line();
        form.select_product(line, Some(ProductId(1)), &catalog())
            .unwrap();
        form.set_quantity(line, 3).unwrap();

        for bad in [0, -1, -100] {
            let err = form.set_quantity(line, bad).unwrap_err();
            assert_eq!(
                err,
                FormError::InvalidQuantity {
                    index: line,
                    got: bad
                }
            );
            assert_eq!(form.lines()[line].quantity(), 3, "state must not change");
            assert_eq!(form.grand_total(), dec!(30.00));
        }
    }

    #[test]
    fn duplicate_product_on_sibling_line_is_rejected_at_selection() {
        let mut form = OrderForm::new();
        let first = form.push_line();
        let second = form.push_line();
        form.select_product(first, Some(ProductId(1)), &catalog())
            .unwrap();

        let err = form
            .select_product(second, Some(ProductId(1)), &catalog())
            .unwrap_err();
        assert_eq!(
            err,
            FormError::DuplicateProduct {
                product_id: ProductId(1),
                existing: first
            }
        );
        assert_eq!(form.lines()[second].product_id(), None);

        // Re-selecting the same product on its own line is not a conflict.
        form.select_product(first, Some(ProductId(1)), &catalog())
            .unwrap();
    }

    #[test]
    fn add_and_remove_lines_keep_the_grand_total_consistent() {
        // Product A at 10.00 x3 = 30.00, product B at 5.50 x2 = 11.00.
        let mut form = OrderForm::new();
        let a = form.push_line();
        form.select_product(a, Some(ProductId(1)), &catalog())
            .unwrap();
        form.set_quantity(a, 3).unwrap();
        assert_eq!(form.grand_total(), dec!(30.00));

        let b = form.push_line();
        form.select_product(b, Some(ProductId(2)), &catalog())
            .unwrap();
        form.set_quantity(b, 2).unwrap();
        assert_eq!(form.lines()[b].total_amount(), dec!(11.00));
        assert_eq!(form.grand_total(), dec!(41.00));

        let removed = form.remove_line(b).unwrap();
        assert_eq!(removed.total_amount(), dec!(11.00));
        assert_eq!(form.lines().len(), 1);
        assert_eq!(form.grand_total(), dec!(30.00));
    }

    #[test]
    fn removing_a_line_shifts_later_lines_down() {
        let mut form = OrderForm::new();
        for id in [1, 2, 3] {
            let line = form.push_line();
            form.select_product(line, Some(ProductId(id)), &catalog())
                .unwrap();
        }
        form.remove_line(0).unwrap();

        assert_eq!(form.lines().len(), 2);
        assert_eq!(form.lines()[0].product_id(), Some(ProductId(2)));
        assert_eq!(form.lines()[1].product_id(), Some(ProductId(3)));
    }

    #[test]
    fn inserting_at_a_position_and_out_of_range_indices() {
        let mut form = OrderForm::new();
        form.push_line();
        form.add_line(0).unwrap();
        assert_eq!(form.lines().len(), 2);

        assert_eq!(
            form.add_line(5).unwrap_err(),
            FormError::NoSuchLine { index: 5 }
        );
        assert_eq!(
            form.remove_line(2).unwrap_err(),
            FormError::NoSuchLine { index: 2 }
        );
        assert_eq!(
            form.set_quantity(2, 1).unwrap_err(),
            FormError::NoSuchLine { index: 2 }
        );
        assert_eq!(
            form.select_product(2, Some(ProductId(1)), &catalog())
                .unwrap_err(),
            FormError::NoSuchLine { index: 2 }
        );
    }

    #[test]
    fn display_total_uses_the_selected_currency() {
        let mut form = OrderForm::new();
        assert_eq!(form.display_total(), "0.00 EUR");

        let line = form.push_line();
        form.select_product(line, Some(ProductId(2)), &catalog())
            .unwrap();
        form.set_quantity(line, 2).unwrap();
        form.set_currency(Currency::Inr);
        assert_eq!(form.display_total(), "11.00 INR");
    }

    #[test]
    fn save_requires_customer_payment_method_and_products() {
        let mut form = OrderForm::new();
        form.push_line();

        let errors = form.validate();
        assert_eq!(
            errors,
            vec![
                FormError::MissingCustomer,
                FormError::MissingPaymentMethod,
                FormError::MissingProduct { index: 0 },
            ]
        );
        assert_eq!(form.into_create().unwrap_err(), FormError::MissingCustomer);
    }

    #[test]
    fn a_valid_form_converts_into_a_create_payload() {
        let mut form = OrderForm::new();
        form.set_customer(Some(UserId(7)));
        form.set_payment_method(Some(PaymentMethod::Stripe));
        let line = form.push_line();
        form.select_product(line, Some(ProductId(1)), &catalog())
            .unwrap();
        form.set_quantity(line, 3).unwrap();

        let create = form.into_create().unwrap();
        assert_eq!(create.user_id, UserId(7));
        assert_eq!(create.items.len(), 1);
        assert_eq!(create.items[0].product_id, ProductId(1));
        assert_eq!(create.items[0].unit_amount, dec!(10.00));
        assert_eq!(create.items[0].quantity, 3);
        assert_eq!(create.items[0].total_amount, dec!(30.00));
    }

    #[test]
    fn from_order_recomputes_derived_amounts() {
        let order = Order::new(
            OrderId(1),
            OrderCreate {
                user_id: UserId(7),
                items: vec![OrderItem {
                    product_id: ProductId(1),
                    unit_amount: dec!(10.00),
                    quantity: 3,
                    total_amount: dec!(30.00),
                }],
                payment_method: PaymentMethod::CashOnDelivery,
                payment_status: PaymentStatus::Pending,
                status: OrderStatus::New,
                currency: Currency::Usd,
                shipping_method: ShippingMethod::Dhl,
                notes: None,
            },
        );

        let form = OrderForm::from_order(&order);
        assert_eq!(form.customer(), Some(UserId(7)));
        assert_eq!(form.currency(), Currency::Usd);
        assert_eq!(form.lines().len(), 1);
        assert_eq!(form.lines()[0].total_amount(), dec!(30.00));
        assert_eq!(form.grand_total(), dec!(30.00));
    }
}
