//! Application error types.

use common::{CustomerId, OrderId, RestaurantId, TrackingId};
use domain::OrderDomainError;
use thiserror::Error;

/// Errors that can occur while handling order commands and queries.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The order failed validation or a transition was not allowed.
    #[error(transparent)]
    Domain(#[from] OrderDomainError),

    #[error("Could not find customer with customer id: {0}")]
    CustomerNotFound(CustomerId),

    #[error("Could not find restaurant with restaurant id: {0}")]
    RestaurantNotFound(RestaurantId),

    #[error("Order with id: {0} could not be found!")]
    OrderNotFound(OrderId),

    #[error("Could not find order with tracking id: {0}")]
    TrackingIdNotFound(TrackingId),

    /// A stored order is missing its tracking id or status.
    #[error("Order has not been initiated")]
    OrderNotInitiated,
}

impl ApplicationError {
    /// Returns the domain error, if this is one.
    pub fn as_domain(&self) -> Option<&OrderDomainError> {
        match self {
            ApplicationError::Domain(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_message_is_passed_through() {
        let err = ApplicationError::from(OrderDomainError::AlreadyInitialized);
        assert_eq!(
            err.to_string(),
            "Order is not in correct state for initialization!"
        );
        assert_eq!(err.as_domain(), Some(&OrderDomainError::AlreadyInitialized));
    }

    #[test]
    fn test_not_found_messages() {
        let id = CustomerId::new();
        assert_eq!(
            ApplicationError::CustomerNotFound(id).to_string(),
            format!("Could not find customer with customer id: {id}")
        );
        assert!(ApplicationError::RestaurantNotFound(RestaurantId::new())
            .as_domain()
            .is_none());
    }
}
