//! Integration tests for order validation and the order lifecycle.
//!
//! These tests drive orders through OrderDomainService the way the
//! application layer does, checking the resulting state, the published
//! events, and the exact failure messages.

use std::sync::Mutex;

use common::{CustomerId, Money, OrderStatus, ProductId, RestaurantId};
use domain::{
    DomainEvent, DomainEventPublisher, NoopPublisher, Order, OrderAddress, OrderCancelledEvent,
    OrderCreatedEvent, OrderDomainError, OrderDomainService, OrderItem, OrderPaidEvent, Product,
    Restaurant,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

const RESTAURANT_ID: &str = "30f28f4c-9153-464e-b0a7-bfff19a9cc2a";
const PRODUCT_ID: &str = "9140fcad-4514-4661-8540-4d0aae854df0";

/// Publisher that records every event it receives.
struct RecordingPublisher<E> {
    events: Mutex<Vec<E>>,
}

impl<E> RecordingPublisher<E> {
    fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl<E: DomainEvent> RecordingPublisher<E> {
    fn last(&self) -> Option<E> {
        self.events.lock().unwrap().last().cloned()
    }
}

impl<E: DomainEvent> DomainEventPublisher<E> for RecordingPublisher<E> {
    fn publish(&self, event: &E) {
        self.events.lock().unwrap().push(event.clone());
    }
}

fn restaurant_id() -> RestaurantId {
    RestaurantId::from_uuid(Uuid::parse_str(RESTAURANT_ID).unwrap())
}

fn product_id() -> ProductId {
    ProductId::from_uuid(Uuid::parse_str(PRODUCT_ID).unwrap())
}

fn money(amount: Decimal) -> Money {
    Money::new(amount)
}

fn item(quantity: u32, price: Decimal, sub_total: Decimal) -> OrderItem {
    OrderItem::new(product_id(), quantity, money(price), money(sub_total))
}

fn order_with(declared: Decimal, items: Vec<OrderItem>) -> Order {
    Order::new(
        CustomerId::new(),
        restaurant_id(),
        OrderAddress::new("street_1", "1000AB", "Paris"),
        money(declared),
        items,
    )
}

/// Two items of the same product summing to 200.00.
fn valid_order() -> Order {
    order_with(
        dec!(200.00),
        vec![
            item(1, dec!(50.00), dec!(50.00)),
            item(3, dec!(50.00), dec!(150.00)),
        ],
    )
}

fn restaurant(active: bool) -> Restaurant {
    Restaurant::new(
        restaurant_id(),
        active,
        vec![
            Product::new(product_id(), "product-1", money(dec!(50.00))),
            Product::new(product_id(), "product-2", money(dec!(50.00))),
        ],
    )
}

fn initiated_order(service: &OrderDomainService) -> Order {
    let mut order = valid_order();
    service
        .validate_and_initiate_order(&mut order, &restaurant(true), &NoopPublisher)
        .unwrap();
    order
}

fn paid_order(service: &OrderDomainService) -> Order {
    let mut order = initiated_order(service);
    service.pay_order(&mut order, &NoopPublisher).unwrap();
    order
}

fn messages(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

mod initiation {
    use super::*;

    #[test]
    fn valid_order_becomes_pending_and_publishes() {
        let service = OrderDomainService::new();
        let publisher = RecordingPublisher::<OrderCreatedEvent>::new();
        let mut order = valid_order();

        let event = service
            .validate_and_initiate_order(&mut order, &restaurant(true), &publisher)
            .unwrap();

        assert_eq!(order.status(), Some(OrderStatus::Pending));
        assert!(order.tracking_id().is_some());
        assert!(order.failure_messages().is_empty());
        assert_eq!(event.order.tracking_id(), order.tracking_id());
        assert_eq!(publisher.count(), 1);
        assert_eq!(publisher.last().unwrap().event_type(), "OrderCreated");
    }

    #[test]
    fn tracking_ids_are_unique_per_call() {
        let service = OrderDomainService::new();
        let a = initiated_order(&service);
        let b = initiated_order(&service);
        assert_ne!(a.tracking_id(), b.tracking_id());
    }

    #[test]
    fn items_keep_request_order_and_are_numbered() {
        let service = OrderDomainService::new();
        let order = initiated_order(&service);

        let quantities: Vec<u32> = order.items().iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![1, 3]);

        let ids: Vec<u64> = order
            .items()
            .iter()
            .map(|i| i.id().unwrap().value())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn wrong_total_price_reports_both_values() {
        let service = OrderDomainService::new();
        let publisher = RecordingPublisher::<OrderCreatedEvent>::new();
        let mut order = order_with(
            dec!(250.00),
            vec![
                item(1, dec!(50.00), dec!(50.00)),
                item(3, dec!(50.00), dec!(150.00)),
            ],
        );
        let before = order.clone();

        let err = service
            .validate_and_initiate_order(&mut order, &restaurant(true), &publisher)
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Total price: 250.00 is not equal to Order items total: 200.00!"
        );
        assert!(err.is_validation());
        assert_eq!(order, before);
        assert_eq!(publisher.count(), 0);
    }

    #[test]
    fn total_price_comparison_is_exact() {
        let service = OrderDomainService::new();
        let mut order = order_with(dec!(50.01), vec![item(1, dec!(50.00), dec!(50.00))]);

        let err = service
            .validate_and_initiate_order(&mut order, &restaurant(true), &NoopPublisher)
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Total price: 50.01 is not equal to Order items total: 50.00!"
        );
    }

    #[test]
    fn wrong_product_price_names_product() {
        let service = OrderDomainService::new();
        let mut order = order_with(
            dec!(210.00),
            vec![
                item(1, dec!(60.00), dec!(60.00)),
                item(3, dec!(50.00), dec!(150.00)),
            ],
        );

        let err = service
            .validate_and_initiate_order(&mut order, &restaurant(true), &NoopPublisher)
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("Order item price: 60.00 is not valid for product {PRODUCT_ID}")
        );
        assert_eq!(order.status(), None);
    }

    #[test]
    fn inconsistent_item_subtotal_is_invalid_item_price() {
        let service = OrderDomainService::new();
        let mut order = order_with(dec!(140.00), vec![item(3, dec!(50.00), dec!(140.00))]);

        let err = service
            .validate_and_initiate_order(&mut order, &restaurant(true), &NoopPublisher)
            .unwrap_err();

        assert_eq!(
            err,
            OrderDomainError::InvalidItemPrice {
                price: money(dec!(50.00)),
                product_id: product_id(),
            }
        );
    }

    #[test]
    fn overflowing_subtotal_sum_is_total_mismatch() {
        let service = OrderDomainService::new();
        let publisher = RecordingPublisher::<OrderCreatedEvent>::new();
        let mut order = order_with(
            Decimal::MAX,
            vec![
                item(1, Decimal::MAX, Decimal::MAX),
                item(1, Decimal::MAX, Decimal::MAX),
            ],
        );
        let before = order.clone();

        let err = service
            .validate_and_initiate_order(&mut order, &restaurant(true), &publisher)
            .unwrap_err();

        assert_eq!(
            err,
            OrderDomainError::TotalPriceMismatch {
                declared: money(Decimal::MAX),
                computed: None,
            }
        );
        assert!(err.to_string().ends_with("Order items total: OVERFLOW!"));
        assert_eq!(order, before);
        assert_eq!(publisher.count(), 0);
    }

    #[test]
    fn overflowing_item_subtotal_is_invalid_item_price() {
        let service = OrderDomainService::new();
        let mut order = order_with(Decimal::MAX, vec![item(2, Decimal::MAX, Decimal::MAX)]);

        let err = service
            .validate_and_initiate_order(&mut order, &restaurant(true), &NoopPublisher)
            .unwrap_err();

        assert_eq!(
            err,
            OrderDomainError::InvalidItemPrice {
                price: money(Decimal::MAX),
                product_id: product_id(),
            }
        );
        assert_eq!(order.status(), None);
    }

    #[test]
    fn zero_quantity_item_is_invalid_item_price() {
        let service = OrderDomainService::new();
        let mut order = order_with(
            dec!(50.00),
            vec![
                item(1, dec!(50.00), dec!(50.00)),
                item(0, dec!(50.00), dec!(0)),
            ],
        );

        let err = service
            .validate_and_initiate_order(&mut order, &restaurant(true), &NoopPublisher)
            .unwrap_err();

        assert!(matches!(err, OrderDomainError::InvalidItemPrice { .. }));
        assert!(err.is_validation());
    }

    #[test]
    fn passive_restaurant_is_rejected() {
        let service = OrderDomainService::new();
        let mut order = valid_order();

        let err = service
            .validate_and_initiate_order(&mut order, &restaurant(false), &NoopPublisher)
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("Restaurant with id {RESTAURANT_ID} is currently not active!")
        );
    }

    #[test]
    fn initiating_twice_is_rejected() {
        let service = OrderDomainService::new();
        let mut order = initiated_order(&service);
        let tracking_id = order.tracking_id();

        let err = service
            .validate_and_initiate_order(&mut order, &restaurant(true), &NoopPublisher)
            .unwrap_err();

        assert_eq!(err, OrderDomainError::AlreadyInitialized);
        assert_eq!(order.tracking_id(), tracking_id);
    }

    #[test]
    fn order_with_identity_is_rejected() {
        let service = OrderDomainService::new();
        let mut order = valid_order();
        order.assign_id(common::OrderId::new());

        let err = service
            .validate_and_initiate_order(&mut order, &restaurant(true), &NoopPublisher)
            .unwrap_err();

        assert_eq!(err, OrderDomainError::AlreadyInitialized);
        assert_eq!(order.status(), None);
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn pay_then_approve_keeps_tracking_id() {
        let service = OrderDomainService::new();
        let paid_events = RecordingPublisher::<OrderPaidEvent>::new();
        let mut order = initiated_order(&service);
        let tracking_id = order.tracking_id();

        let event = service.pay_order(&mut order, &paid_events).unwrap();
        assert_eq!(event.order.status(), Some(OrderStatus::Paid));
        assert_eq!(paid_events.count(), 1);

        service.approve_order(&mut order).unwrap();

        assert_eq!(order.status(), Some(OrderStatus::Approved));
        assert_eq!(order.tracking_id(), tracking_id);
        assert!(order.failure_messages().is_empty());
        assert!(order.is_terminal());
    }

    #[test]
    fn paying_twice_is_a_state_conflict() {
        let service = OrderDomainService::new();
        let mut order = paid_order(&service);

        let err = service.pay_order(&mut order, &NoopPublisher).unwrap_err();

        assert!(err.is_state_conflict());
        assert_eq!(
            err.to_string(),
            "Order is not in correct state for pay operation! Current state: PAID, expected: PENDING"
        );
    }

    #[test]
    fn approve_requires_paid() {
        let service = OrderDomainService::new();

        let mut pending = initiated_order(&service);
        assert!(service.approve_order(&mut pending).is_err());
        assert_eq!(pending.status(), Some(OrderStatus::Pending));

        let mut approved = paid_order(&service);
        service.approve_order(&mut approved).unwrap();
        assert!(service.approve_order(&mut approved).is_err());

        let mut fresh = valid_order();
        assert!(service.approve_order(&mut fresh).is_err());
    }

    #[test]
    fn cancel_payment_appends_messages_on_reentry() {
        let service = OrderDomainService::new();
        let publisher = RecordingPublisher::<OrderCancelledEvent>::new();
        let mut order = paid_order(&service);

        service
            .cancel_order_payment(&mut order, &messages(&["restaurant closed"]), &publisher)
            .unwrap();
        let event = service
            .cancel_order_payment(
                &mut order,
                &messages(&["product unavailable", "restaurant closed"]),
                &publisher,
            )
            .unwrap();

        assert_eq!(order.status(), Some(OrderStatus::Cancelling));
        assert_eq!(
            order.failure_messages(),
            messages(&["restaurant closed", "product unavailable", "restaurant closed"])
        );
        assert_eq!(event.failure_messages, order.failure_messages());
        assert_eq!(publisher.count(), 2);
    }

    #[test]
    fn cancel_payment_rejected_from_pending_and_approved() {
        let service = OrderDomainService::new();

        let mut pending = initiated_order(&service);
        let err = service
            .cancel_order_payment(&mut pending, &messages(&["x"]), &NoopPublisher)
            .unwrap_err();
        assert!(err.is_state_conflict());
        assert_eq!(
            err.to_string(),
            "Order is not in correct state for cancel payment operation! \
             Current state: PENDING, expected: PAID or CANCELLING"
        );
        assert!(pending.failure_messages().is_empty());

        let mut approved = paid_order(&service);
        service.approve_order(&mut approved).unwrap();
        assert!(
            service
                .cancel_order_payment(&mut approved, &messages(&["x"]), &NoopPublisher)
                .is_err()
        );
    }

    #[test]
    fn cancel_after_payment_rollback() {
        let service = OrderDomainService::new();
        let mut order = paid_order(&service);
        service
            .cancel_order_payment(&mut order, &messages(&["declined"]), &NoopPublisher)
            .unwrap();

        service
            .cancel_order(&mut order, &messages(&["refunded"]))
            .unwrap();

        assert_eq!(order.status(), Some(OrderStatus::Cancelled));
        assert_eq!(order.failure_messages(), messages(&["declined", "refunded"]));
    }

    #[test]
    fn cancel_pending_order_outright() {
        let service = OrderDomainService::new();
        let mut order = initiated_order(&service);

        service
            .cancel_order(&mut order, &messages(&["payment failed"]))
            .unwrap();

        assert_eq!(order.status(), Some(OrderStatus::Cancelled));
    }

    #[test]
    fn cancel_rejected_from_paid_and_approved() {
        let service = OrderDomainService::new();

        let mut paid = paid_order(&service);
        assert!(service.cancel_order(&mut paid, &[]).is_err());
        assert_eq!(paid.status(), Some(OrderStatus::Paid));

        let mut approved = paid_order(&service);
        service.approve_order(&mut approved).unwrap();
        let err = service
            .cancel_order(&mut approved, &messages(&["late"]))
            .unwrap_err();
        assert!(err.is_state_conflict());
        assert!(approved.failure_messages().is_empty());
    }

    #[test]
    fn empty_failure_messages_are_kept() {
        let service = OrderDomainService::new();
        let mut order = paid_order(&service);

        service
            .cancel_order_payment(&mut order, &messages(&["", ""]), &NoopPublisher)
            .unwrap();

        assert_eq!(order.failure_messages().len(), 2);
    }
}
