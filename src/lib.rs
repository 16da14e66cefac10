//! # addressinput-rs
//!
//! Data layer for international address entry.
//!
//! This library holds a postal address while it is being entered, before it
//! is handed to country-specific formatting and validation rules. It defines
//! the contracts those rules, metadata parsers and autocomplete providers
//! share, and leaves the rules themselves to the caller.
//!
//! ## Features
//!
//! - **Immutable Addresses**: [`AddressData`] values with structural equality and hashing
//! - **Normalizing Builder**: [`AddressBuilder`] trims fields and splits multi-line input
//! - **Problem Registry**: [`AddressProblems`] collects one validation problem per field
//! - **Metadata Keys**: [`AddressDataKey`] resolves format-data key names case-insensitively
//! - **Autocomplete Contract**: [`AutocompletePrediction`] and [`AddressAutocompleteApi`]
//!
//! ## Quick Start
//!
//! ```rust
//! use addressinput_rs::{AddressBuilder, AddressField, AddressProblemType, AddressProblems};
//!
//! let address = AddressBuilder::new()
//!     .set_country("US")?
//!     .set_admin_area("CA")
//!     .set_locality("Mountain View")
//!     .add_address_line("1600 Amphitheatre Pkwy")
//!     .build();
//!
//! // A validator reads fields by key and records what it finds.
//! let mut problems = AddressProblems::new();
//! if address.field_value(AddressField::PostalCode)?.is_none() {
//!     problems.add(AddressField::PostalCode, AddressProblemType::MissingRequiredField)?;
//! }
//!
//! assert_eq!(
//!     problems.problem_type(AddressField::PostalCode),
//!     Some(AddressProblemType::MissingRequiredField)
//! );
//! # Ok::<(), addressinput_rs::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod address;
pub mod autocomplete;
pub mod data_key;
pub mod error;
pub mod normalizer;
pub mod problems;
pub mod types;

// Re-export main API
pub use address::{AddressBuilder, AddressData};
pub use autocomplete::{AddressAutocompleteApi, AutocompletePrediction, collect_predictions};
pub use data_key::AddressDataKey;
pub use error::{Error, Result};
pub use problems::AddressProblems;
pub use types::*;
