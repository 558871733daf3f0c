//! In-memory port implementations for testing.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use common::{CustomerId, OrderId, RestaurantId, TrackingId};
use domain::{DomainEvent, DomainEventPublisher, Order, Product, Restaurant};
use tokio::sync::RwLock;

use crate::dto::RestaurantQuery;
use crate::error::ApplicationError;
use crate::ports::{Customer, CustomerRepository, OrderRepository, RestaurantRepository};

/// In-memory order repository.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored orders.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, mut order: Order) -> Result<Order, ApplicationError> {
        let order_id = match order.id() {
            Some(id) => id,
            None => {
                let id = OrderId::new();
                order.assign_id(id);
                id
            }
        };
        self.orders.write().await.insert(order_id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, order_id: OrderId) -> Result<Option<Order>, ApplicationError> {
        Ok(self.orders.read().await.get(&order_id).cloned())
    }

    async fn find_by_tracking_id(
        &self,
        tracking_id: TrackingId,
    ) -> Result<Option<Order>, ApplicationError> {
        Ok(self
            .orders
            .read()
            .await
            .values()
            .find(|order| order.tracking_id() == Some(tracking_id))
            .cloned())
    }
}

/// In-memory customer repository.
#[derive(Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashSet<CustomerId>>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_customer(&self, customer_id: CustomerId) {
        self.customers.write().await.insert(customer_id);
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Option<Customer>, ApplicationError> {
        let known = self.customers.read().await.contains(&customer_id);
        Ok(known.then_some(Customer { id: customer_id }))
    }
}

/// In-memory restaurant repository holding full menus.
///
/// Lookups return a snapshot containing only the requested products.
#[derive(Clone, Default)]
pub struct InMemoryRestaurantRepository {
    restaurants: Arc<RwLock<HashMap<RestaurantId, Restaurant>>>,
}

impl InMemoryRestaurantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a restaurant.
    pub async fn put_restaurant(&self, restaurant: Restaurant) {
        self.restaurants
            .write()
            .await
            .insert(restaurant.id(), restaurant);
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurantRepository {
    async fn find_restaurant_information(
        &self,
        query: &RestaurantQuery,
    ) -> Result<Option<Restaurant>, ApplicationError> {
        let restaurants = self.restaurants.read().await;
        let Some(restaurant) = restaurants.get(&query.restaurant_id) else {
            return Ok(None);
        };

        let products: Vec<Product> = restaurant
            .products()
            .iter()
            .filter(|product| query.product_ids.contains(&product.id))
            .cloned()
            .collect();

        Ok(Some(Restaurant::new(
            restaurant.id(),
            restaurant.is_active(),
            products,
        )))
    }
}

/// Publisher that keeps every event it receives, standing in for an outbox.
#[derive(Debug)]
pub struct InMemoryEventPublisher<E> {
    events: Mutex<Vec<E>>,
}

impl<E> Default for InMemoryEventPublisher<E> {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl<E: DomainEvent> InMemoryEventPublisher<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every published event, oldest first.
    pub fn events(&self) -> Vec<E> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn event_count(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<E: DomainEvent> DomainEventPublisher<E> for InMemoryEventPublisher<E> {
    fn publish(&self, event: &E) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
