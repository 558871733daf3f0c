//! Order aggregate and related types.

mod aggregate;
mod events;
mod item;
mod service;

pub use aggregate::Order;
pub use events::{OrderCancelledEvent, OrderCreatedEvent, OrderPaidEvent};
pub use item::{OrderAddress, OrderItem};
pub use service::{CancellationPolicy, OrderDomainService};
