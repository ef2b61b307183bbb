//! The URIs the app serves.

/// The product page, which also receives the product form.
pub const ROOT: &str = "/";
