//! Read-only restaurant snapshots used to validate new orders.

use common::{Money, ProductId, RestaurantId};
use serde::{Deserialize, Serialize};

/// A product on a restaurant menu, with its current price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Point-in-time view of a restaurant and the products an order refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    id: RestaurantId,
    active: bool,
    products: Vec<Product>,
}

impl Restaurant {
    pub fn new(id: RestaurantId, active: bool, products: Vec<Product>) -> Self {
        Self {
            id,
            active,
            products,
        }
    }

    pub fn id(&self) -> RestaurantId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the first product with the given id.
    pub fn find_product(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == product_id)
    }
}
