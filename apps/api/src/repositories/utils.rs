//! Shared names used across stores

/// Collection holding category documents
pub const CATEGORIES_COLLECTION: &str = "categories";

/// Collection holding product documents
pub const PRODUCTS_COLLECTION: &str = "products";
