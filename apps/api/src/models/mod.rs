//! Store models for the catalog
//!
//! This module contains the documents kept in the `categories` and
//! `products` collections, plus the typed filters and updates every store
//! understands.

pub mod category;
pub mod filter;
pub mod id;
pub mod outcome;
pub mod product;

pub use category::{Category, NewCategory};
pub use filter::{ProductFilter, ProductUpdate};
pub use id::{parse_object_id, parse_optional_object_id};
pub use outcome::WriteOutcome;
pub use product::{NewProduct, Product};
