//! Field identifiers and problem categories shared by every component.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Identifiers for the parts of a postal address.
///
/// Every variant except [`AddressField::StreetAddress`] holds at most one
/// string. The street address is a sequence of lines and is read through
/// [`AddressData::address_lines`](crate::AddressData::address_lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AddressField {
    /// CLDR region code of the country
    Country,
    /// Street-level lines of the address
    StreetAddress,
    /// Top-level administrative subdivision (state, province, prefecture)
    AdminArea,
    /// City or town
    Locality,
    /// Neighbourhood, suburb or district within a locality
    DependentLocality,
    /// Postal code
    PostalCode,
    /// Person the mail is addressed to
    Recipient,
    /// Firm or organization
    Organization,
    /// Sorting code, used by a handful of countries
    SortingCode,
}

impl AddressField {
    /// Every field, in declaration order.
    pub const ALL: [AddressField; 9] = [
        AddressField::Country,
        AddressField::StreetAddress,
        AddressField::AdminArea,
        AddressField::Locality,
        AddressField::DependentLocality,
        AddressField::PostalCode,
        AddressField::Recipient,
        AddressField::Organization,
        AddressField::SortingCode,
    ];

    /// The fields that hold at most one value.
    pub const SINGLE_VALUE: [AddressField; 8] = [
        AddressField::AdminArea,
        AddressField::Country,
        AddressField::DependentLocality,
        AddressField::Locality,
        AddressField::Organization,
        AddressField::PostalCode,
        AddressField::Recipient,
        AddressField::SortingCode,
    ];

    /// Whether this field holds a single string rather than a line list.
    pub fn is_single_value(self) -> bool {
        !matches!(self, AddressField::StreetAddress)
    }

    /// The snake_case name of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            AddressField::Country => "country",
            AddressField::StreetAddress => "street_address",
            AddressField::AdminArea => "admin_area",
            AddressField::Locality => "locality",
            AddressField::DependentLocality => "dependent_locality",
            AddressField::PostalCode => "postal_code",
            AddressField::Recipient => "recipient",
            AddressField::Organization => "organization",
            AddressField::SortingCode => "sorting_code",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressField {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        AddressField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::unknown_field(name))
    }
}

/// Categories of problems a validator can record against a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AddressProblemType {
    /// The field is set but the country does not use it
    UnexpectedField,
    /// The country requires the field and it is absent
    MissingRequiredField,
    /// The value is not one of the known values for the field
    UnknownValue,
    /// The value does not match the expected format
    InvalidFormat,
    /// The value is well formed but contradicts another field
    MismatchingValue,
}

impl AddressProblemType {
    /// Every problem type, in declaration order.
    pub const ALL: [AddressProblemType; 5] = [
        AddressProblemType::UnexpectedField,
        AddressProblemType::MissingRequiredField,
        AddressProblemType::UnknownValue,
        AddressProblemType::InvalidFormat,
        AddressProblemType::MismatchingValue,
    ];

    /// The snake_case name of this problem type.
    pub fn as_str(self) -> &'static str {
        match self {
            AddressProblemType::UnexpectedField => "unexpected_field",
            AddressProblemType::MissingRequiredField => "missing_required_field",
            AddressProblemType::UnknownValue => "unknown_value",
            AddressProblemType::InvalidFormat => "invalid_format",
            AddressProblemType::MismatchingValue => "mismatching_value",
        }
    }
}

impl fmt::Display for AddressProblemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_single_value_fields() {
        assert_eq!(AddressField::SINGLE_VALUE.len(), 8);
        assert!(!AddressField::StreetAddress.is_single_value());
        for field in AddressField::SINGLE_VALUE {
            assert!(field.is_single_value());
        }
    }

    #[test]
    fn test_field_conversion() {
        assert_eq!(AddressField::AdminArea.to_string(), "admin_area");
        assert_eq!(
            "ADMIN_AREA".parse::<AddressField>(),
            Ok(AddressField::AdminArea)
        );
        for field in AddressField::ALL {
            assert_eq!(field.as_str().parse::<AddressField>(), Ok(field));
        }
        assert_matches!(
            "street".parse::<AddressField>(),
            Err(Error::UnknownField { name }) if name == "street"
        );
    }

    #[test]
    fn test_problem_type_names() {
        assert_eq!(
            AddressProblemType::MissingRequiredField.to_string(),
            "missing_required_field"
        );
        assert_eq!(AddressProblemType::ALL.len(), 5);
    }
}
