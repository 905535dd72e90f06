//! Core value types.
//!
//! This module provides type-safe wrappers for identifiers, locale maps,
//! money amounts, and resource references.

pub mod id;
pub mod localized;
pub mod price;
pub mod reference;

pub use id::*;
pub use localized::{DEFAULT_LOCALE, LocalizedString};
pub use price::{CurrencyCode, Money};
pub use reference::{Reference, ReferenceTypeId};
