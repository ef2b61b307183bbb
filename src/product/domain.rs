//! Core product domain types.

/// Identifier for a product in the catalog.
pub type ProductId = i64;

/// The categories offered in the product form.
///
/// Submitted categories are not checked against this list.
pub const SUGGESTED_CATEGORIES: [&str; 4] = ["Electronics", "Home", "Clothing", "Books"];

/// A product listed in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique within a catalog.
    pub id: ProductId,
    /// Non-empty display name.
    pub name: String,
    /// Non-empty description, only shown in the form.
    pub description: String,
    /// The price in dollars, never negative.
    pub price: f64,
    /// Usually one of [SUGGESTED_CATEGORIES].
    pub category: String,
}

/// A validated product that has not been assigned an ID yet.
///
/// Use [crate::product::validate] to create one from form data.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub(super) name: String,
    pub(super) description: String,
    pub(super) price: f64,
    pub(super) category: String,
}

impl NewProduct {
    /// The product's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The product's price in dollars.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Attach `id` to the product.
    pub(super) fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
        }
    }
}
