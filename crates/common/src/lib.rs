//! Shared value types for the food ordering system.

mod money;
mod status;
mod types;

pub use money::Money;
pub use status::OrderStatus;
pub use types::{
    AddressId, CustomerId, OrderId, OrderItemId, ProductId, RestaurantId, TrackingId,
};
