//! Application layer for the food ordering system.
//!
//! This crate wires the order core to its collaborators:
//! - Create/track commands and their mapping onto the order aggregate
//! - Repository ports with in-memory implementations
//! - Payment and approval sagas driving the remaining transitions
//! - Configuration and tracing setup

pub mod config;
pub mod dto;
pub mod error;
pub mod mapper;
pub mod memory;
pub mod ports;
pub mod saga;
pub mod service;
pub mod telemetry;

pub use config::{LogFormat, OrderServiceConfig};
pub use dto::{
    CreateOrderCommand, CreateOrderResponse, OrderAddressRequest, OrderItemRequest,
    RestaurantQuery, TrackOrderResponse,
};
pub use error::ApplicationError;
pub use mapper::OrderDataMapper;
pub use memory::{
    InMemoryCustomerRepository, InMemoryEventPublisher, InMemoryOrderRepository,
    InMemoryRestaurantRepository,
};
pub use ports::{Customer, CustomerRepository, OrderRepository, RestaurantRepository};
pub use saga::{OrderApprovalSaga, OrderPaymentSaga};
pub use service::{ORDER_CREATED_MESSAGE, OrderApplicationService};
pub use telemetry::init_tracing;
