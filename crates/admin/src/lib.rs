//! OCM Catalog Admin library.
//!
//! Everything that writes to, or reads from, the commerce platform:
//!
//! - [`config`] - Platform credentials and endpoints from the environment
//! - [`commercetools`] - HTTP client with token caching and typed endpoints
//! - [`services`] - Category materializer, product types, product seeding
//!
//! # Security
//!
//! The API client credentials usually carry `manage_project` scope. Keep
//! them out of logs; [`config::CommercetoolsConfig`] redacts the secret in
//! its `Debug` output.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod commercetools;
pub mod config;
pub mod services;

pub use commercetools::{CommerceError, CommercetoolsClient, ErrorKind};
pub use config::{CommercetoolsConfig, ConfigError};
pub use services::{CategoryService, MaterializeError, ProductService, ProductTypeService, materialize};
