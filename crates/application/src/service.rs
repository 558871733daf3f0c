//! Order application service: create and track orders.

use common::{CustomerId, TrackingId};
use domain::{
    DomainEvent, DomainEventPublisher, NoopPublisher, OrderCreatedEvent, OrderDomainService,
    Restaurant,
};

use crate::dto::{CreateOrderCommand, CreateOrderResponse, TrackOrderResponse};
use crate::error::ApplicationError;
use crate::mapper::OrderDataMapper;
use crate::ports::{CustomerRepository, OrderRepository, RestaurantRepository};

/// Message returned to the caller after a successful creation.
pub const ORDER_CREATED_MESSAGE: &str = "Order Created Successfully";

/// Service handling order creation and tracking requests.
///
/// Loads the data the domain core needs, runs it, stores the result and
/// publishes the created event once the order is stored.
pub struct OrderApplicationService<O, C, R, P>
where
    O: OrderRepository,
    C: CustomerRepository,
    R: RestaurantRepository,
    P: DomainEventPublisher<OrderCreatedEvent>,
{
    domain: OrderDomainService,
    orders: O,
    customers: C,
    restaurants: R,
    publisher: P,
}

impl<O, C, R, P> OrderApplicationService<O, C, R, P>
where
    O: OrderRepository,
    C: CustomerRepository,
    R: RestaurantRepository,
    P: DomainEventPublisher<OrderCreatedEvent>,
{
    pub fn new(
        domain: OrderDomainService,
        orders: O,
        customers: C,
        restaurants: R,
        publisher: P,
    ) -> Self {
        Self {
            domain,
            orders,
            customers,
            restaurants,
            publisher,
        }
    }

    /// Validates, initiates and stores a new order.
    #[tracing::instrument(
        skip(self, command),
        fields(customer_id = %command.customer_id, restaurant_id = %command.restaurant_id)
    )]
    pub async fn create_order(
        &self,
        command: CreateOrderCommand,
    ) -> Result<CreateOrderResponse, ApplicationError> {
        self.check_customer(command.customer_id).await?;
        let restaurant = self.check_restaurant(&command).await?;

        let mut order = OrderDataMapper::create_order_command_to_order(&command);
        let event = self
            .domain
            .validate_and_initiate_order(&mut order, &restaurant, &NoopPublisher)
            .inspect_err(|e| {
                metrics::counter!("orders_rejected_total").increment(1);
                tracing::warn!(error = %e, "order rejected");
            })?;

        let saved = self.orders.save(order).await?;
        OrderCreatedEvent::new(saved.clone(), event.created_at).fire(&self.publisher);

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(
            order_id = ?saved.id(),
            tracking_id = ?saved.tracking_id(),
            "order created"
        );

        OrderDataMapper::order_to_create_order_response(&saved, ORDER_CREATED_MESSAGE)
    }

    /// Returns the current status of an order.
    #[tracing::instrument(skip(self))]
    pub async fn track_order(
        &self,
        tracking_id: TrackingId,
    ) -> Result<TrackOrderResponse, ApplicationError> {
        let order = self
            .orders
            .find_by_tracking_id(tracking_id)
            .await?
            .ok_or(ApplicationError::TrackingIdNotFound(tracking_id))?;

        OrderDataMapper::order_to_track_order_response(&order)
    }

    async fn check_customer(&self, customer_id: CustomerId) -> Result<(), ApplicationError> {
        match self.customers.find_customer(customer_id).await? {
            Some(_) => Ok(()),
            None => {
                tracing::warn!(%customer_id, "customer not found");
                Err(ApplicationError::CustomerNotFound(customer_id))
            }
        }
    }

    async fn check_restaurant(
        &self,
        command: &CreateOrderCommand,
    ) -> Result<Restaurant, ApplicationError> {
        let query = OrderDataMapper::create_order_command_to_restaurant(command);
        self.restaurants
            .find_restaurant_information(&query)
            .await?
            .ok_or_else(|| {
                tracing::warn!(restaurant_id = %command.restaurant_id, "restaurant not found");
                ApplicationError::RestaurantNotFound(command.restaurant_id)
            })
    }
}
