//! The in-memory product catalog.
//!
//! A catalog only lives for a single request. Every request starts from
//! [Catalog::seed], so products added by a submission are gone once the
//! response has been sent.

use crate::product::domain::{NewProduct, Product, ProductId};

/// An ordered list of products, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create the catalog every request starts with.
    pub fn seed() -> Self {
        Self {
            products: vec![
                Product {
                    id: 1,
                    name: "Wireless Mouse".to_owned(),
                    description: "Ergonomic wireless mouse".to_owned(),
                    price: 29.99,
                    category: "Electronics".to_owned(),
                },
                Product {
                    id: 2,
                    name: "Desk Lamp".to_owned(),
                    description: "LED desk lamp with adjustable brightness".to_owned(),
                    price: 24.95,
                    category: "Home".to_owned(),
                },
            ],
        }
    }

    /// The ID the next added product will get: one more than the largest
    /// ID in the catalog, or 1 if the catalog is empty.
    pub fn next_id(&self) -> ProductId {
        self.products
            .iter()
            .map(|product| product.id)
            .max()
            .map_or(1, |max_id| max_id + 1)
    }

    /// Append `new_product` with the next available ID and return a copy of it.
    pub fn add(&mut self, new_product: NewProduct) -> Product {
        let product = new_product.with_id(self.next_id());
        self.products.push(product.clone());

        product
    }

    /// The products in the order they were added.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }
}
