//! Domain error types.

use common::{Money, OrderStatus, ProductId, RestaurantId};
use thiserror::Error;

/// Errors raised when an order fails validation or a lifecycle transition is
/// not allowed.
///
/// Every variant is deterministic: retrying the same call with the same
/// inputs fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderDomainError {
    /// The order already carries an identity or status and cannot be initiated again.
    #[error("Order is not in correct state for initialization!")]
    AlreadyInitialized,

    /// The restaurant is not accepting orders.
    #[error("Restaurant with id {restaurant_id} is currently not active!")]
    RestaurantNotActive { restaurant_id: RestaurantId },

    /// The declared order price differs from the sum of item subtotals.
    ///
    /// `computed` is `None` when the subtotals overflow.
    #[error(
        "Total price: {declared} is not equal to Order items total: {}!",
        total_label(.computed)
    )]
    TotalPriceMismatch {
        declared: Money,
        computed: Option<Money>,
    },

    /// An item price is not positive, inconsistent with its subtotal, or
    /// differs from the restaurant's current product price.
    #[error("Order item price: {price} is not valid for product {product_id}")]
    InvalidItemPrice { price: Money, product_id: ProductId },

    /// The order is not in a status that allows the requested operation.
    #[error(
        "Order is not in correct state for {action} operation! Current state: {}, expected: {expected}",
        status_label(.current)
    )]
    UnexpectedState {
        action: &'static str,
        current: Option<OrderStatus>,
        expected: &'static str,
    },
}

impl OrderDomainError {
    /// Returns true for malformed-order failures the caller must fix before resubmitting.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            OrderDomainError::RestaurantNotActive { .. }
                | OrderDomainError::TotalPriceMismatch { .. }
                | OrderDomainError::InvalidItemPrice { .. }
        )
    }

    /// Returns true when an operation was invoked on an order in an ineligible status.
    pub fn is_state_conflict(&self) -> bool {
        matches!(self, OrderDomainError::UnexpectedState { .. })
    }
}

fn total_label(total: &Option<Money>) -> String {
    total.map_or_else(|| "OVERFLOW".to_string(), |m| m.to_string())
}

fn status_label(status: &Option<OrderStatus>) -> &'static str {
    status.as_ref().map_or("NONE", OrderStatus::as_str)
}
