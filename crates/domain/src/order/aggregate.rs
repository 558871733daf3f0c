//! Order aggregate implementation.

use common::{CustomerId, Money, OrderId, OrderItemId, OrderStatus, RestaurantId, TrackingId};
use serde::{Deserialize, Serialize};

use crate::error::OrderDomainError;

use super::{OrderAddress, OrderItem};

/// Order aggregate root.
///
/// Built by a caller from a creation request, then moved through its
/// lifecycle exclusively by [`OrderDomainService`](super::OrderDomainService).
/// Status, tracking id and failure messages have no public setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Persistence identity, absent until the order is saved.
    id: Option<OrderId>,

    customer_id: CustomerId,

    restaurant_id: RestaurantId,

    delivery_address: OrderAddress,

    /// Declared total price.
    price: Money,

    /// Items in the order, in the order they were requested.
    items: Vec<OrderItem>,

    /// Assigned once, when the order is initiated.
    tracking_id: Option<TrackingId>,

    /// `None` until the order is initiated.
    status: Option<OrderStatus>,

    #[serde(default)]
    failure_messages: Vec<String>,
}

// Query methods
impl Order {
    /// Creates an order from a creation request. It has no identity and no status.
    pub fn new(
        customer_id: CustomerId,
        restaurant_id: RestaurantId,
        delivery_address: OrderAddress,
        price: Money,
        items: Vec<OrderItem>,
    ) -> Self {
        Self {
            id: None,
            customer_id,
            restaurant_id,
            delivery_address,
            price,
            items,
            tracking_id: None,
            status: None,
            failure_messages: Vec::new(),
        }
    }

    pub fn id(&self) -> Option<OrderId> {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    pub fn delivery_address(&self) -> &OrderAddress {
        &self.delivery_address
    }

    /// Returns the declared total price.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn tracking_id(&self) -> Option<TrackingId> {
        self.tracking_id
    }

    pub fn status(&self) -> Option<OrderStatus> {
        self.status
    }

    pub fn failure_messages(&self) -> &[String] {
        &self.failure_messages
    }

    /// Returns the sum of all item subtotals, or `None` if it overflows.
    pub fn items_total(&self) -> Option<Money> {
        Money::checked_sum(self.items.iter().map(|item| &item.sub_total))
    }

    /// Returns true if the order is in a terminal status.
    pub fn is_terminal(&self) -> bool {
        self.status.is_some_and(|s| s.is_terminal())
    }

    /// Sets the persistence identity and binds every item to it.
    ///
    /// Called by repositories when the order is first saved.
    pub fn assign_id(&mut self, id: OrderId) {
        self.id = Some(id);
        for item in &mut self.items {
            item.bind_order(id);
        }
    }
}

// Validation
impl Order {
    pub(crate) fn validate_initial_order(&self) -> Result<(), OrderDomainError> {
        if self.id.is_some() || self.status.is_some() {
            return Err(OrderDomainError::AlreadyInitialized);
        }
        Ok(())
    }

    pub(crate) fn validate_total_price(&self) -> Result<(), OrderDomainError> {
        let computed = self.items_total();
        if computed != Some(self.price) {
            return Err(OrderDomainError::TotalPriceMismatch {
                declared: self.price,
                computed,
            });
        }
        Ok(())
    }

    pub(crate) fn validate_items_price(&self) -> Result<(), OrderDomainError> {
        match self.items.iter().find(|item| !item.is_price_valid()) {
            Some(item) => Err(OrderDomainError::InvalidItemPrice {
                price: item.price,
                product_id: item.product_id,
            }),
            None => Ok(()),
        }
    }

    fn require_status(
        &self,
        action: &'static str,
        allowed: impl Fn(OrderStatus) -> bool,
        expected: &'static str,
    ) -> Result<(), OrderDomainError> {
        match self.status {
            Some(status) if allowed(status) => Ok(()),
            current => Err(OrderDomainError::UnexpectedState {
                action,
                current,
                expected,
            }),
        }
    }
}

// Transitions. Each checks its precondition before touching any field.
impl Order {
    pub(crate) fn initialize(&mut self) {
        self.tracking_id = Some(TrackingId::new());
        self.status = Some(OrderStatus::Pending);
        let order_id = self.id;
        for (position, item) in (1u64..).zip(self.items.iter_mut()) {
            item.initialize(OrderItemId::new(position), order_id);
        }
    }

    pub(crate) fn pay(&mut self) -> Result<(), OrderDomainError> {
        self.require_status("pay", |s| s.can_pay(), "PENDING")?;
        self.status = Some(OrderStatus::Paid);
        Ok(())
    }

    pub(crate) fn approve(&mut self) -> Result<(), OrderDomainError> {
        self.require_status("approve", |s| s.can_approve(), "PAID")?;
        self.status = Some(OrderStatus::Approved);
        Ok(())
    }

    pub(crate) fn init_cancel(&mut self, failure_messages: &[String]) -> Result<(), OrderDomainError> {
        self.require_status("cancel payment", |s| s.can_init_cancel(), "PAID or CANCELLING")?;
        self.status = Some(OrderStatus::Cancelling);
        self.failure_messages.extend_from_slice(failure_messages);
        Ok(())
    }

    pub(crate) fn cancel(
        &mut self,
        failure_messages: &[String],
        allow_from_pending: bool,
    ) -> Result<(), OrderDomainError> {
        let expected = if allow_from_pending {
            "CANCELLING or PENDING"
        } else {
            "CANCELLING"
        };
        self.require_status(
            "cancel",
            |s| match s {
                OrderStatus::Cancelling => true,
                OrderStatus::Pending => allow_from_pending,
                _ => false,
            },
            expected,
        )?;
        self.status = Some(OrderStatus::Cancelled);
        self.failure_messages.extend_from_slice(failure_messages);
        Ok(())
    }
}
