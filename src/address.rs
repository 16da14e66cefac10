//! Immutable postal address values and the builder that produces them.

use std::fmt;

use crate::error::{Error, Result};
use crate::normalizer::{normalize_address_lines, trim_to_none};
use crate::types::AddressField;

/// One optional slot per single-value field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
struct FieldValues {
    country: Option<String>,
    admin_area: Option<String>,
    locality: Option<String>,
    dependent_locality: Option<String>,
    postal_code: Option<String>,
    sorting_code: Option<String>,
    organization: Option<String>,
    recipient: Option<String>,
}

impl FieldValues {
    fn get(&self, field: AddressField) -> Result<Option<&str>> {
        let value = match field {
            AddressField::Country => &self.country,
            AddressField::AdminArea => &self.admin_area,
            AddressField::Locality => &self.locality,
            AddressField::DependentLocality => &self.dependent_locality,
            AddressField::PostalCode => &self.postal_code,
            AddressField::SortingCode => &self.sorting_code,
            AddressField::Organization => &self.organization,
            AddressField::Recipient => &self.recipient,
            AddressField::StreetAddress => {
                tracing::debug!(%field, "multi value field requested by key");
                return Err(Error::multi_value_field(field));
            }
        };
        Ok(value.as_deref())
    }

    fn slot_mut(&mut self, field: AddressField) -> Option<&mut Option<String>> {
        match field {
            AddressField::Country => Some(&mut self.country),
            AddressField::AdminArea => Some(&mut self.admin_area),
            AddressField::Locality => Some(&mut self.locality),
            AddressField::DependentLocality => Some(&mut self.dependent_locality),
            AddressField::PostalCode => Some(&mut self.postal_code),
            AddressField::SortingCode => Some(&mut self.sorting_code),
            AddressField::Organization => Some(&mut self.organization),
            AddressField::Recipient => Some(&mut self.recipient),
            AddressField::StreetAddress => None,
        }
    }
}

/// An immutable postal address.
///
/// Values are created with [`AddressBuilder`]. Single-value fields are either
/// absent or hold a trimmed, non-empty string; address lines are trimmed,
/// non-empty and kept in the order they were given.
///
/// Two addresses are equal when every field, the language code and the full
/// ordered list of address lines are equal. `Hash` is computed from the same
/// parts.
///
/// # Examples
///
/// ```rust
/// use addressinput_rs::{AddressBuilder, AddressField};
///
/// let address = AddressBuilder::new()
///     .set_country("CH")?
///     .set_locality("  Zürich ")
///     .set_postal_code("8002")
///     .add_address_line("Brandschenkestrasse 110")
///     .build();
///
/// assert_eq!(address.locality(), Some("Zürich"));
/// assert_eq!(address.field_value(AddressField::PostalCode)?, Some("8002"));
/// assert_eq!(address.address_lines(), ["Brandschenkestrasse 110"]);
/// # Ok::<(), addressinput_rs::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressData {
    fields: FieldValues,
    address_lines: Vec<String>,
    language_code: Option<String>,
}

impl AddressData {
    /// Create a builder seeded with this address.
    pub fn to_builder(&self) -> AddressBuilder {
        AddressBuilder::new().set_address_data(self)
    }

    /// CLDR region code of the country.
    pub fn postal_country(&self) -> Option<&str> {
        self.fields.country.as_deref()
    }

    /// Street-level lines, in the order they were entered.
    pub fn address_lines(&self) -> &[String] {
        &self.address_lines
    }

    /// Top-level administrative subdivision of the country.
    pub fn administrative_area(&self) -> Option<&str> {
        self.fields.admin_area.as_deref()
    }

    /// City or town.
    pub fn locality(&self) -> Option<&str> {
        self.fields.locality.as_deref()
    }

    /// Neighbourhood or suburb within the locality.
    pub fn dependent_locality(&self) -> Option<&str> {
        self.fields.dependent_locality.as_deref()
    }

    /// Postal code.
    pub fn postal_code(&self) -> Option<&str> {
        self.fields.postal_code.as_deref()
    }

    /// Sorting code. Only a few countries use one.
    pub fn sorting_code(&self) -> Option<&str> {
        self.fields.sorting_code.as_deref()
    }

    /// Firm or organization.
    pub fn organization(&self) -> Option<&str> {
        self.fields.organization.as_deref()
    }

    /// Recipient.
    pub fn recipient(&self) -> Option<&str> {
        self.fields.recipient.as_deref()
    }

    /// BCP-47 language code of the address.
    pub fn language_code(&self) -> Option<&str> {
        self.language_code.as_deref()
    }

    /// Look up a single-value field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MultiValueField`] for [`AddressField::StreetAddress`];
    /// read it with [`address_lines`](Self::address_lines) instead.
    pub fn field_value(&self, field: AddressField) -> Result<Option<&str>> {
        self.fields.get(field)
    }

    /// Whether no field, line or language code is set.
    pub fn is_empty(&self) -> bool {
        self.fields == FieldValues::default()
            && self.address_lines.is_empty()
            && self.language_code.is_none()
    }
}

impl fmt::Display for AddressData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |value: Option<&str>| value.unwrap_or_default().to_string();

        write!(f, "(AddressData: country={}; ", show(self.postal_country()))?;
        write!(f, "language={}; ", show(self.language_code()))?;
        for line in &self.address_lines {
            write!(f, "{line}; ")?;
        }
        write!(f, "admin_area={}; ", show(self.administrative_area()))?;
        write!(f, "locality={}; ", show(self.locality()))?;
        write!(f, "dependent_locality={}; ", show(self.dependent_locality()))?;
        write!(f, "postal_code={}; ", show(self.postal_code()))?;
        write!(f, "sorting_code={}; ", show(self.sorting_code()))?;
        write!(f, "organization={}; ", show(self.organization()))?;
        write!(f, "recipient={})", show(self.recipient()))
    }
}

/// Builder for [`AddressData`].
///
/// Every single-value setter trims its input. A value that is empty after
/// trimming clears the field instead of storing an empty string. Address
/// lines are kept raw until [`set_address`](Self::set_address) or
/// [`build`](Self::build) normalizes them.
#[derive(Debug, Clone, Default)]
pub struct AddressBuilder {
    fields: FieldValues,
    address_lines: Vec<String>,
    language_code: Option<String>,
}

impl AddressBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all pending state with the contents of `address`.
    pub fn set_address_data(mut self, address: &AddressData) -> Self {
        self.fields = FieldValues::default();
        for field in AddressField::SINGLE_VALUE {
            let value = address.field_value(field).ok().flatten();
            self = self.assign(field, value);
        }

        self.address_lines.clear();
        self.address_lines
            .extend(address.address_lines().iter().cloned());

        self.set_language_code(address.language_code())
    }

    /// Set the BCP-47 language code. `None` clears it.
    ///
    /// The code is stored as given.
    pub fn set_language_code<'a>(mut self, language_code: impl Into<Option<&'a str>>) -> Self {
        self.language_code = language_code.into().map(str::to_string);
        self
    }

    /// Set the CLDR region code of the country.
    ///
    /// Every downstream rule set keys off the country, so it cannot be set
    /// to an empty string. A whitespace-only value still clears the field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCountry`] if `country` is empty.
    pub fn set_country(self, country: &str) -> Result<Self> {
        if country.is_empty() {
            tracing::debug!("rejecting empty country");
            return Err(Error::MissingCountry);
        }
        Ok(self.assign(AddressField::Country, Some(country)))
    }

    /// Set the administrative area. `None` or empty clears it.
    pub fn set_admin_area<'a>(self, admin_area: impl Into<Option<&'a str>>) -> Self {
        self.assign(AddressField::AdminArea, admin_area.into())
    }

    /// Set the locality. `None` or empty clears it.
    pub fn set_locality<'a>(self, locality: impl Into<Option<&'a str>>) -> Self {
        self.assign(AddressField::Locality, locality.into())
    }

    /// Set the dependent locality. `None` or empty clears it.
    pub fn set_dependent_locality<'a>(
        self,
        dependent_locality: impl Into<Option<&'a str>>,
    ) -> Self {
        self.assign(AddressField::DependentLocality, dependent_locality.into())
    }

    /// Set the postal code. `None` or empty clears it.
    pub fn set_postal_code<'a>(self, postal_code: impl Into<Option<&'a str>>) -> Self {
        self.assign(AddressField::PostalCode, postal_code.into())
    }

    /// Set the sorting code. `None` or empty clears it.
    pub fn set_sorting_code<'a>(self, sorting_code: impl Into<Option<&'a str>>) -> Self {
        self.assign(AddressField::SortingCode, sorting_code.into())
    }

    /// Set the organization. `None` or empty clears it.
    pub fn set_organization<'a>(self, organization: impl Into<Option<&'a str>>) -> Self {
        self.assign(AddressField::Organization, organization.into())
    }

    /// Set the recipient. `None` or empty clears it.
    pub fn set_recipient<'a>(self, recipient: impl Into<Option<&'a str>>) -> Self {
        self.assign(AddressField::Recipient, recipient.into())
    }

    /// Replace the pending address lines. Lines are stored as given.
    pub fn set_address_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.address_lines.clear();
        self.address_lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Append one raw address line.
    pub fn add_address_line(mut self, value: impl Into<String>) -> Self {
        self.address_lines.push(value.into());
        self
    }

    /// Normalize the pending address lines.
    ///
    /// Lines containing `'\n'` are split, every fragment is trimmed and empty
    /// fragments are dropped, keeping the original order.
    ///
    /// `_value` is ignored: the call re-normalizes the lines already pending
    /// rather than splitting the text it is given. Existing callers depend on
    /// that behavior, so it is kept as is.
    pub fn set_address(mut self, _value: &str) -> Self {
        let before = self.address_lines.len();
        self.address_lines = normalize_address_lines(&self.address_lines);
        tracing::debug!(
            before,
            after = self.address_lines.len(),
            "re-normalized pending address lines"
        );
        self
    }

    /// Look up a pending single-value field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MultiValueField`] for [`AddressField::StreetAddress`].
    pub fn field_value(&self, field: AddressField) -> Result<Option<&str>> {
        self.fields.get(field)
    }

    /// The pending address lines, as stored.
    pub fn address_lines(&self) -> &[String] {
        &self.address_lines
    }

    /// The pending language code.
    pub fn language_code(&self) -> Option<&str> {
        self.language_code.as_deref()
    }

    /// Produce an [`AddressData`] from the pending state.
    ///
    /// The builder is left untouched and can be built again. Pending lines
    /// are copied through the same normalization as
    /// [`set_address`](Self::set_address). Required fields are not checked
    /// here; that is up to the country rules.
    pub fn build(&self) -> AddressData {
        AddressData {
            fields: self.fields.clone(),
            address_lines: normalize_address_lines(&self.address_lines),
            language_code: self.language_code.clone(),
        }
    }

    fn assign(mut self, field: AddressField, value: Option<&str>) -> Self {
        if let Some(slot) = self.fields.slot_mut(field) {
            *slot = trim_to_none(value);
            if slot.is_none() {
                tracing::trace!(%field, "field cleared");
            }
        }
        self
    }
}

impl From<&AddressData> for AddressBuilder {
    fn from(address: &AddressData) -> Self {
        address.to_builder()
    }
}
