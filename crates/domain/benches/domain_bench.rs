use common::{CustomerId, Money, ProductId, RestaurantId};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    NoopPublisher, Order, OrderAddress, OrderDomainService, OrderItem, Product, Restaurant,
};
use rust_decimal::Decimal;

fn make_fixture(item_count: u32) -> (Order, Restaurant) {
    let restaurant_id = RestaurantId::new();
    let mut items = Vec::new();
    let mut products = Vec::new();
    let mut total = Money::zero();

    for i in 1..=item_count {
        let product_id = ProductId::new();
        let price = Money::new(Decimal::new(i64::from(i) * 125, 2));
        let sub_total = price.multiply(2).unwrap();
        total = total.add(sub_total).unwrap();
        items.push(OrderItem::new(product_id, 2, price, sub_total));
        products.push(Product::new(product_id, format!("product-{i}"), price));
    }

    let order = Order::new(
        CustomerId::new(),
        restaurant_id,
        OrderAddress::new("street_1", "1000AB", "Paris"),
        total,
        items,
    );
    (order, Restaurant::new(restaurant_id, true, products))
}

fn bench_initiate_order(c: &mut Criterion) {
    let service = OrderDomainService::new();
    let (order, restaurant) = make_fixture(5);

    c.bench_function("domain/initiate_order_5_items", |b| {
        b.iter(|| {
            let mut order = order.clone();
            service
                .validate_and_initiate_order(&mut order, &restaurant, &NoopPublisher)
                .unwrap();
        });
    });
}

fn bench_initiate_large_order(c: &mut Criterion) {
    let service = OrderDomainService::new();
    let (order, restaurant) = make_fixture(100);

    c.bench_function("domain/initiate_order_100_items", |b| {
        b.iter(|| {
            let mut order = order.clone();
            service
                .validate_and_initiate_order(&mut order, &restaurant, &NoopPublisher)
                .unwrap();
        });
    });
}

fn bench_full_lifecycle(c: &mut Criterion) {
    let service = OrderDomainService::new();
    let (order, restaurant) = make_fixture(5);

    c.bench_function("domain/initiate_pay_approve", |b| {
        b.iter(|| {
            let mut order = order.clone();
            service
                .validate_and_initiate_order(&mut order, &restaurant, &NoopPublisher)
                .unwrap();
            service.pay_order(&mut order, &NoopPublisher).unwrap();
            service.approve_order(&mut order).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_initiate_order,
    bench_initiate_large_order,
    bench_full_lifecycle
);
criterion_main!(benches);
