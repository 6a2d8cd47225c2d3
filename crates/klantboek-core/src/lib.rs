//! Core domain models, validation, and storage for the customer directory.
//!
//! Provides the strongly-typed customer record, its field constraints, the
//! error taxonomy, and the repository layer over PostgreSQL. The API crate
//! depends on these foundations and owns nothing but HTTP concerns.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod storage;
pub mod validate;

pub use error::{CoreError, Result};
pub use models::{Customer, CustomerId, CustomerUpdate, NewCustomer};
pub use storage::Storage;
pub use validate::{validate_fields, ALLOWED_CITIES};
