//! Order domain events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::DomainEvent;

use super::Order;

/// An order passed validation and is now pending payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreatedEvent {
    /// The order after initiation.
    pub order: Order,

    pub created_at: DateTime<Utc>,
}

/// An order was paid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPaidEvent {
    pub order: Order,
    pub created_at: DateTime<Utc>,
}

/// Cancellation of a paid order started; the payment must be rolled back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCancelledEvent {
    pub order: Order,

    /// Every failure message recorded on the order so far.
    pub failure_messages: Vec<String>,

    pub created_at: DateTime<Utc>,
}

impl OrderCreatedEvent {
    pub fn new(order: Order, created_at: DateTime<Utc>) -> Self {
        Self { order, created_at }
    }
}

impl OrderPaidEvent {
    pub fn new(order: Order, created_at: DateTime<Utc>) -> Self {
        Self { order, created_at }
    }
}

impl OrderCancelledEvent {
    /// Creates the event, copying the order's failure messages.
    pub fn new(order: Order, created_at: DateTime<Utc>) -> Self {
        let failure_messages = order.failure_messages().to_vec();
        Self {
            order,
            failure_messages,
            created_at,
        }
    }
}

impl DomainEvent for OrderCreatedEvent {
    fn event_type(&self) -> &'static str {
        "OrderCreated"
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl DomainEvent for OrderPaidEvent {
    fn event_type(&self) -> &'static str {
        "OrderPaid"
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl DomainEvent for OrderCancelledEvent {
    fn event_type(&self) -> &'static str {
        "OrderCancelled"
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{OrderAddress, OrderItem};
    use common::{CustomerId, Money, ProductId, RestaurantId};
    use rust_decimal_macros::dec;

    fn sample_order() -> Order {
        Order::new(
            CustomerId::new(),
            RestaurantId::new(),
            OrderAddress::new("street_1", "1000AB", "Paris"),
            Money::new(dec!(25.00)),
            vec![OrderItem::new(
                ProductId::new(),
                1,
                Money::new(dec!(25.00)),
                Money::new(dec!(25.00)),
            )],
        )
    }

    #[test]
    fn test_event_type() {
        let now = Utc::now();
        assert_eq!(
            OrderCreatedEvent::new(sample_order(), now).event_type(),
            "OrderCreated"
        );
        assert_eq!(
            OrderPaidEvent::new(sample_order(), now).event_type(),
            "OrderPaid"
        );
        assert_eq!(
            OrderCancelledEvent::new(sample_order(), now).event_type(),
            "OrderCancelled"
        );
    }

    #[test]
    fn test_event_serialization() {
        let order = sample_order();
        let event = OrderCreatedEvent::new(order.clone(), Utc::now());

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: OrderCreatedEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.order, order);
        assert_eq!(deserialized.created_at, event.created_at);
    }
}
