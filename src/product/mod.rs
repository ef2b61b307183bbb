//! Products: the catalog, the form for adding a product and the page that shows both.

mod catalog;
mod domain;
mod form;
mod page;

pub use catalog::Catalog;
pub use domain::{NewProduct, Product, ProductId, SUGGESTED_CATEGORIES};
pub use form::{Field, FieldError, FieldErrors, ProductForm, is_plain_decimal, validate};
pub use page::{ProductPage, create_product_endpoint, get_products_page};
