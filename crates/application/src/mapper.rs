//! Conversions between request/response types and domain objects.

use common::Money;
use domain::{Order, OrderAddress, OrderItem};

use crate::dto::{CreateOrderCommand, CreateOrderResponse, RestaurantQuery, TrackOrderResponse};
use crate::error::ApplicationError;

/// Maps between the application's request/response types and the order aggregate.
pub struct OrderDataMapper;

impl OrderDataMapper {
    /// Builds the restaurant lookup for the products referenced by a command.
    ///
    /// Product ids are listed once each, in first-seen order.
    pub fn create_order_command_to_restaurant(command: &CreateOrderCommand) -> RestaurantQuery {
        let mut product_ids = Vec::with_capacity(command.items.len());
        for item in &command.items {
            if !product_ids.contains(&item.product_id) {
                product_ids.push(item.product_id);
            }
        }
        RestaurantQuery {
            restaurant_id: command.restaurant_id,
            product_ids,
        }
    }

    /// Builds an uninitiated order from a command.
    pub fn create_order_command_to_order(command: &CreateOrderCommand) -> Order {
        let items = command
            .items
            .iter()
            .map(|item| {
                OrderItem::new(
                    item.product_id,
                    item.quantity,
                    Money::new(item.price),
                    Money::new(item.sub_total),
                )
            })
            .collect();

        Order::new(
            command.customer_id,
            command.restaurant_id,
            OrderAddress::new(
                command.address.street.clone(),
                command.address.postal_code.clone(),
                command.address.city.clone(),
            ),
            Money::new(command.price),
            items,
        )
    }

    pub fn order_to_create_order_response(
        order: &Order,
        message: impl Into<String>,
    ) -> Result<CreateOrderResponse, ApplicationError> {
        Ok(CreateOrderResponse {
            order_tracking_id: order
                .tracking_id()
                .ok_or(ApplicationError::OrderNotInitiated)?,
            order_status: order.status().ok_or(ApplicationError::OrderNotInitiated)?,
            message: message.into(),
        })
    }

    pub fn order_to_track_order_response(
        order: &Order,
    ) -> Result<TrackOrderResponse, ApplicationError> {
        Ok(TrackOrderResponse {
            order_tracking_id: order
                .tracking_id()
                .ok_or(ApplicationError::OrderNotInitiated)?,
            order_status: order.status().ok_or(ApplicationError::OrderNotInitiated)?,
            failure_messages: order.failure_messages().to_vec(),
        })
    }
}
