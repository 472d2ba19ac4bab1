//! GraphQL type definitions for the catalog
//!
//! This module contains the object, input and result types exposed through
//! the API. Type names match the wire names existing clients query with
//! (`CategoryType`, `ProductType`, `MongoResultType`, `ProductInputType`).

mod category;
mod inputs;
mod outcome;
mod product;

pub use category::Category;
pub use inputs::{filter_or_all, ProductFilterInput, ProductInput};
pub use outcome::MongoResult;
pub use product::Product;
