//! Repository ports implemented by persistence adapters.

use async_trait::async_trait;
use common::{CustomerId, OrderId, TrackingId};
use domain::{Order, Restaurant};

use crate::dto::RestaurantQuery;
use crate::error::ApplicationError;

/// A customer known to the order service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
}

/// Storage for orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Stores an order, assigning its identity on first save, and returns the stored copy.
    async fn save(&self, order: Order) -> Result<Order, ApplicationError>;

    async fn find_by_id(&self, order_id: OrderId) -> Result<Option<Order>, ApplicationError>;

    async fn find_by_tracking_id(
        &self,
        tracking_id: TrackingId,
    ) -> Result<Option<Order>, ApplicationError>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Option<Customer>, ApplicationError>;
}

/// Source of restaurant snapshots.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Returns the restaurant's activity flag and the requested products with
    /// their current prices, or `None` if the restaurant is unknown.
    async fn find_restaurant_information(
        &self,
        query: &RestaurantQuery,
    ) -> Result<Option<Restaurant>, ApplicationError>;
}
