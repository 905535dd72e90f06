//! Catalog services built on the platform client.
//!
//! # Services
//!
//! - `hierarchy` - Category tree materialization
//! - `categories` - Category creates and lookups
//! - `product_types` - Apparel attribute schema
//! - `products` - Sample products and catalog seeding

pub mod categories;
pub mod hierarchy;
pub mod product_types;
pub mod products;

pub use categories::CategoryService;
pub use hierarchy::{CategoryCreator, MaterializeError, materialize};
pub use product_types::{MaterialTypes, ProductTypeService};
pub use products::{ProductService, ProductTemplate, SeedReport};
