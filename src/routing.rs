//! Application router configuration.

use axum::{Router, routing::get};

use crate::{
    endpoints,
    not_found::get_404_not_found,
    product::{create_product_endpoint, get_products_page},
};

/// Return a router with all the app's routes.
///
/// The router holds no state: every request builds its own catalog.
pub fn build_router() -> Router {
    Router::new()
        .route(
            endpoints::ROOT,
            get(get_products_page).post(create_product_endpoint),
        )
        .fallback(get_404_not_found)
}
