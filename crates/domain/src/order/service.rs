//! Order validation and lifecycle transitions.

use chrono::Utc;

use crate::error::OrderDomainError;
use crate::event::{DomainEvent, DomainEventPublisher};
use crate::restaurant::Restaurant;

use super::{Order, OrderCancelledEvent, OrderCreatedEvent, OrderPaidEvent};

/// Which source statuses an outright cancellation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancellationPolicy {
    /// Whether a `Pending` order may be cancelled without passing through
    /// `Cancelling` first.
    pub allow_cancel_from_pending: bool,
}

impl Default for CancellationPolicy {
    fn default() -> Self {
        Self {
            allow_cancel_from_pending: true,
        }
    }
}

/// Stateless service owning every legal transition of an [`Order`].
///
/// Each operation validates completely before mutating; on error the order
/// is left exactly as it was passed in.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderDomainService {
    policy: CancellationPolicy,
}

impl OrderDomainService {
    /// Creates a service with the default cancellation policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: CancellationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CancellationPolicy {
        self.policy
    }

    /// Validates a freshly built order against a restaurant snapshot and
    /// initiates it.
    ///
    /// Checks run in this order and the first failure wins: the order is
    /// fresh, the restaurant is active, the declared price matches the item
    /// subtotals, every item is internally consistent, and every item price
    /// matches the restaurant's current product price.
    pub fn validate_and_initiate_order(
        &self,
        order: &mut Order,
        restaurant: &Restaurant,
        publisher: &dyn DomainEventPublisher<OrderCreatedEvent>,
    ) -> Result<OrderCreatedEvent, OrderDomainError> {
        order.validate_initial_order()?;
        validate_restaurant(restaurant)?;
        order.validate_total_price()?;
        order.validate_items_price()?;
        validate_product_prices(order, restaurant)?;

        order.initialize();

        let event = OrderCreatedEvent::new(order.clone(), Utc::now());
        event.fire(publisher);
        Ok(event)
    }

    /// Marks a pending order as paid.
    pub fn pay_order(
        &self,
        order: &mut Order,
        publisher: &dyn DomainEventPublisher<OrderPaidEvent>,
    ) -> Result<OrderPaidEvent, OrderDomainError> {
        order.pay()?;

        let event = OrderPaidEvent::new(order.clone(), Utc::now());
        event.fire(publisher);
        Ok(event)
    }

    /// Marks a paid order as approved. No event is emitted.
    pub fn approve_order(&self, order: &mut Order) -> Result<(), OrderDomainError> {
        order.approve()
    }

    /// Starts rolling back the payment of a paid order.
    ///
    /// May be repeated while the order is already `Cancelling`; each call
    /// appends its messages.
    pub fn cancel_order_payment(
        &self,
        order: &mut Order,
        failure_messages: &[String],
        publisher: &dyn DomainEventPublisher<OrderCancelledEvent>,
    ) -> Result<OrderCancelledEvent, OrderDomainError> {
        order.init_cancel(failure_messages)?;

        let event = OrderCancelledEvent::new(order.clone(), Utc::now());
        event.fire(publisher);
        Ok(event)
    }

    /// Cancels an order whose payment was rolled back, or a pending order
    /// when the policy allows it.
    pub fn cancel_order(
        &self,
        order: &mut Order,
        failure_messages: &[String],
    ) -> Result<(), OrderDomainError> {
        order.cancel(failure_messages, self.policy.allow_cancel_from_pending)
    }
}

fn validate_restaurant(restaurant: &Restaurant) -> Result<(), OrderDomainError> {
    if !restaurant.is_active() {
        return Err(OrderDomainError::RestaurantNotActive {
            restaurant_id: restaurant.id(),
        });
    }
    Ok(())
}

fn validate_product_prices(order: &Order, restaurant: &Restaurant) -> Result<(), OrderDomainError> {
    for item in order.items() {
        let matches = restaurant
            .find_product(&item.product_id)
            .is_some_and(|product| product.price == item.price);
        if !matches {
            return Err(OrderDomainError::InvalidItemPrice {
                price: item.price,
                product_id: item.product_id,
            });
        }
    }
    Ok(())
}
