//! Error types and handling for addressinput-rs.
//!
//! Every variant here is a precondition violation: the caller handed the
//! crate something it must never receive. Data-quality findings about an
//! address are not errors; they are recorded in
//! [`AddressProblems`](crate::AddressProblems).

use crate::types::{AddressField, AddressProblemType};

/// Result type alias for addressinput operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for addressinput operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The country was set to an empty value
    #[error("country cannot be empty")]
    MissingCountry,

    /// A multi-value field was looked up by key
    #[error("multi value fields not supported: {field}")]
    MultiValueField {
        /// The field that was requested
        field: AddressField,
    },

    /// A metadata key name did not match any known key
    #[error("unknown metadata key: {key}")]
    UnknownMetadataKey {
        /// The name as supplied by the metadata source
        key: String,
    },

    /// An address field name did not match any known field
    #[error("unknown address field: {name}")]
    UnknownField {
        /// The name as supplied by the caller
        name: String,
    },

    /// A second problem was recorded for a field that already has one
    #[error("field {field} already has a recorded problem: {existing}")]
    DuplicateProblem {
        /// The field the problem was recorded against
        field: AddressField,
        /// The problem already on record
        existing: AddressProblemType,
    },
}

impl Error {
    /// Create a new multi-value field error
    pub fn multi_value_field(field: AddressField) -> Self {
        Self::MultiValueField { field }
    }

    /// Create a new unknown metadata key error
    pub fn unknown_metadata_key(key: impl Into<String>) -> Self {
        Self::UnknownMetadataKey { key: key.into() }
    }

    /// Create a new unknown field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Create a new duplicate problem error
    pub fn duplicate_problem(field: AddressField, existing: AddressProblemType) -> Self {
        Self::DuplicateProblem { field, existing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::MissingCountry.to_string(), "country cannot be empty");
        assert_eq!(
            Error::multi_value_field(AddressField::StreetAddress).to_string(),
            "multi value fields not supported: street_address"
        );
        assert_eq!(
            Error::unknown_metadata_key("bogus").to_string(),
            "unknown metadata key: bogus"
        );
        assert_eq!(
            Error::duplicate_problem(
                AddressField::Locality,
                AddressProblemType::MissingRequiredField
            )
            .to_string(),
            "field locality already has a recorded problem: missing_required_field"
        );
    }
}
