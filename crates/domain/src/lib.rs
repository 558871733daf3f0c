//! Domain layer for the food ordering system.
//!
//! This crate provides the order core:
//! - Order aggregate with its line items and delivery address
//! - Restaurant snapshots used to check prices and availability
//! - OrderDomainService, the only way to move an order through its lifecycle
//! - Domain events and the publisher abstraction they are handed to

pub mod error;
pub mod event;
pub mod order;
pub mod restaurant;

pub use common::{Money, OrderStatus};
pub use error::OrderDomainError;
pub use event::{DomainEvent, DomainEventPublisher, NoopPublisher};
pub use order::{
    CancellationPolicy, Order, OrderAddress, OrderCancelledEvent, OrderCreatedEvent,
    OrderDomainService, OrderItem, OrderPaidEvent,
};
pub use restaurant::{Product, Restaurant};
