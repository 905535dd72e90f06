//! OCM Catalog Core - Shared types library.
//!
//! This crate provides the payload and value types used across all OCM
//! Catalog components:
//! - `admin` - Platform API client, category materializer, catalog services
//! - `storefront` - Read-only catalog HTTP API
//! - `cli` - Command-line tools for seeding and inspecting the catalog
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every type
//! serializes to the exact JSON shape the platform API expects.
//!
//! # Modules
//!
//! - [`types`] - IDs, locale maps, money, references
//! - [`category`] - Category tree input, drafts, created results
//! - [`product`] - Product drafts and projections
//! - [`product_type`] - Product types and attribute schemas
//! - [`query`] - Paged query envelopes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod category;
pub mod product;
pub mod product_type;
pub mod query;
pub mod types;

pub use category::{Category, CategoryDraft, CategoryNode, CreatedCategory, forest_node_count};
pub use product::{
    Attribute, Image, ImageDimensions, PriceDraft, Product, ProductDraft, ProductProjection,
    ProductVariant, ProductVariantDraft,
};
pub use product_type::{
    AttributeConstraint, AttributeDefinitionDraft, AttributeType, EnumValue, LocalizedEnumValue,
    ProductType, ProductTypeDraft,
};
pub use query::PagedQueryResponse;
pub use types::*;
