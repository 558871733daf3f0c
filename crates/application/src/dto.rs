//! Request and response types exchanged with callers of the application layer.

use common::{CustomerId, OrderStatus, ProductId, RestaurantId, TrackingId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request to place a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderCommand {
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,

    /// Declared total price.
    pub price: Decimal,

    pub items: Vec<OrderItemRequest>,
    pub address: OrderAddressRequest,
}

/// A requested order line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: Decimal,
    pub sub_total: Decimal,
}

/// Delivery address as sent by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderAddressRequest {
    pub street: String,
    pub postal_code: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub order_tracking_id: TrackingId,
    pub order_status: OrderStatus,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackOrderResponse {
    pub order_tracking_id: TrackingId,
    pub order_status: OrderStatus,
    pub failure_messages: Vec<String>,
}

/// Restaurant lookup restricted to the products an order refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantQuery {
    pub restaurant_id: RestaurantId,
    pub product_ids: Vec<ProductId>,
}
