//! Sagas reacting to payment and restaurant approval responses.
//!
//! Each saga step loads the order, runs one domain transition, and stores
//! the result. A failing step leaves the stored order unchanged.

use common::{OrderId, OrderStatus};
use domain::{
    DomainEvent, DomainEventPublisher, NoopPublisher, Order, OrderCancelledEvent,
    OrderDomainService, OrderPaidEvent,
};

use crate::error::ApplicationError;
use crate::ports::OrderRepository;

async fn find_order<O: OrderRepository>(
    orders: &O,
    order_id: OrderId,
) -> Result<Order, ApplicationError> {
    orders
        .find_by_id(order_id)
        .await?
        .ok_or(ApplicationError::OrderNotFound(order_id))
}

fn record_transition(status: OrderStatus) {
    metrics::counter!("order_transitions_total", "status" => status.as_str()).increment(1);
}

/// Handles payment responses.
///
/// A completed payment marks the order paid and publishes the event that asks
/// the restaurant for approval; a failed payment cancels the order.
pub struct OrderPaymentSaga<O, P>
where
    O: OrderRepository,
    P: DomainEventPublisher<OrderPaidEvent>,
{
    domain: OrderDomainService,
    orders: O,
    publisher: P,
}

impl<O, P> OrderPaymentSaga<O, P>
where
    O: OrderRepository,
    P: DomainEventPublisher<OrderPaidEvent>,
{
    pub fn new(domain: OrderDomainService, orders: O, publisher: P) -> Self {
        Self {
            domain,
            orders,
            publisher,
        }
    }

    /// Marks the order as paid.
    #[tracing::instrument(skip(self))]
    pub async fn process(&self, order_id: OrderId) -> Result<OrderPaidEvent, ApplicationError> {
        let mut order = find_order(&self.orders, order_id).await?;
        let event = self.domain.pay_order(&mut order, &NoopPublisher)?;

        self.orders.save(order).await?;
        event.fire(&self.publisher);

        record_transition(OrderStatus::Paid);
        tracing::info!(%order_id, "order paid");
        Ok(event)
    }

    /// Cancels the order after a failed payment.
    #[tracing::instrument(skip(self, failure_messages))]
    pub async fn rollback(
        &self,
        order_id: OrderId,
        failure_messages: &[String],
    ) -> Result<(), ApplicationError> {
        let mut order = find_order(&self.orders, order_id).await?;
        self.domain.cancel_order(&mut order, failure_messages)?;

        self.orders.save(order).await?;

        record_transition(OrderStatus::Cancelled);
        tracing::info!(%order_id, ?failure_messages, "order cancelled");
        Ok(())
    }
}

/// Handles restaurant approval responses.
///
/// An approval completes the order; a rejection starts the payment rollback
/// and publishes the event that asks for a refund.
pub struct OrderApprovalSaga<O, P>
where
    O: OrderRepository,
    P: DomainEventPublisher<OrderCancelledEvent>,
{
    domain: OrderDomainService,
    orders: O,
    publisher: P,
}

impl<O, P> OrderApprovalSaga<O, P>
where
    O: OrderRepository,
    P: DomainEventPublisher<OrderCancelledEvent>,
{
    pub fn new(domain: OrderDomainService, orders: O, publisher: P) -> Self {
        Self {
            domain,
            orders,
            publisher,
        }
    }

    /// Marks the order as approved.
    #[tracing::instrument(skip(self))]
    pub async fn process(&self, order_id: OrderId) -> Result<(), ApplicationError> {
        let mut order = find_order(&self.orders, order_id).await?;
        self.domain.approve_order(&mut order)?;

        self.orders.save(order).await?;

        record_transition(OrderStatus::Approved);
        tracing::info!(%order_id, "order approved");
        Ok(())
    }

    /// Starts cancelling a paid order the restaurant rejected.
    #[tracing::instrument(skip(self, failure_messages))]
    pub async fn rollback(
        &self,
        order_id: OrderId,
        failure_messages: &[String],
    ) -> Result<OrderCancelledEvent, ApplicationError> {
        let mut order = find_order(&self.orders, order_id).await?;
        let event = self
            .domain
            .cancel_order_payment(&mut order, failure_messages, &NoopPublisher)?;

        self.orders.save(order).await?;
        event.fire(&self.publisher);

        record_transition(OrderStatus::Cancelling);
        tracing::info!(%order_id, ?failure_messages, "order payment cancelling");
        Ok(event)
    }
}
