//! Order line items and delivery address.

use common::{AddressId, Money, OrderId, OrderItemId, ProductId};
use serde::{Deserialize, Serialize};

/// A line in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Position within the order, assigned when the order is initiated.
    id: Option<OrderItemId>,

    /// Owning order, bound once the order has a persistence identity.
    order_id: Option<OrderId>,

    /// The product ordered.
    pub product_id: ProductId,

    /// Quantity ordered.
    pub quantity: u32,

    /// Price per unit.
    pub price: Money,

    /// Declared line total (price * quantity).
    pub sub_total: Money,
}

impl OrderItem {
    /// Creates a new, unbound order item.
    pub fn new(product_id: ProductId, quantity: u32, price: Money, sub_total: Money) -> Self {
        Self {
            id: None,
            order_id: None,
            product_id,
            quantity,
            price,
            sub_total,
        }
    }

    pub fn id(&self) -> Option<OrderItemId> {
        self.id
    }

    pub fn order_id(&self) -> Option<OrderId> {
        self.order_id
    }

    /// Returns true if quantity and unit price are positive and the subtotal
    /// equals price * quantity exactly. An overflowing product is invalid.
    pub fn is_price_valid(&self) -> bool {
        self.quantity > 0
            && self.price.is_greater_than_zero()
            && self.price.multiply(self.quantity) == Some(self.sub_total)
    }

    pub(crate) fn initialize(&mut self, id: OrderItemId, order_id: Option<OrderId>) {
        self.id = Some(id);
        self.order_id = order_id;
    }

    pub(crate) fn bind_order(&mut self, order_id: OrderId) {
        self.order_id = Some(order_id);
    }
}

/// Delivery address of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAddress {
    pub id: AddressId,
    pub street: String,
    pub postal_code: String,
    pub city: String,
}

impl OrderAddress {
    /// Creates an address with a fresh random id.
    pub fn new(
        street: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id: AddressId::new(),
            street: street.into(),
            postal_code: postal_code.into(),
            city: city.into(),
        }
    }
}
