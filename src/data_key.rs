//! Keys of the hierarchical address-format metadata.
//!
//! Metadata sources deliver records whose keys are plain strings. They are
//! resolved against [`AddressDataKey`] before any parsing happens, so an
//! unknown key is rejected at the boundary.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Names of the slots in address-format metadata records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AddressDataKey {
    /// List of supported countries
    Countries,
    /// Address format string
    Fmt,
    /// Identifier of the record
    Id,
    /// ISO 3166-2 identifier of a subdivision
    IsoId,
    /// Key of the record within its parent
    Key,
    /// Language of the record
    Lang,
    /// Languages used in the country
    Languages,
    /// Latin-script address format string
    LFmt,
    /// Label used for the locality field
    LocalityNameType,
    /// Fields the country requires
    Require,
    /// Label used for the administrative area field
    StateNameType,
    /// Label used for the dependent locality field
    SubLocalityNameType,
    /// Keys of the child records
    SubKeys,
    /// Latin-script names of the child records
    SubLNames,
    /// Which child records have children of their own
    SubMores,
    /// Names of the child records
    SubNames,
    /// Field width overrides for input forms
    WidthOverrides,
    /// Postal code pattern
    XZip,
    /// Label used for the postal code field
    ZipNameType,
}

/// Lower-cased key name to key. Built on first access and never written
/// afterwards.
static KEYS_BY_NAME: LazyLock<HashMap<&'static str, AddressDataKey>> = LazyLock::new(|| {
    AddressDataKey::ALL
        .into_iter()
        .map(|key| (key.as_str(), key))
        .collect()
});

impl AddressDataKey {
    /// Every key, in declaration order.
    pub const ALL: [AddressDataKey; 19] = [
        AddressDataKey::Countries,
        AddressDataKey::Fmt,
        AddressDataKey::Id,
        AddressDataKey::IsoId,
        AddressDataKey::Key,
        AddressDataKey::Lang,
        AddressDataKey::Languages,
        AddressDataKey::LFmt,
        AddressDataKey::LocalityNameType,
        AddressDataKey::Require,
        AddressDataKey::StateNameType,
        AddressDataKey::SubLocalityNameType,
        AddressDataKey::SubKeys,
        AddressDataKey::SubLNames,
        AddressDataKey::SubMores,
        AddressDataKey::SubNames,
        AddressDataKey::WidthOverrides,
        AddressDataKey::XZip,
        AddressDataKey::ZipNameType,
    ];

    /// The lower-case name this key is looked up by.
    pub fn as_str(self) -> &'static str {
        match self {
            AddressDataKey::Countries => "countries",
            AddressDataKey::Fmt => "fmt",
            AddressDataKey::Id => "id",
            AddressDataKey::IsoId => "isoid",
            AddressDataKey::Key => "key",
            AddressDataKey::Lang => "lang",
            AddressDataKey::Languages => "languages",
            AddressDataKey::LFmt => "lfmt",
            AddressDataKey::LocalityNameType => "localitynametype",
            AddressDataKey::Require => "require",
            AddressDataKey::StateNameType => "statenametype",
            AddressDataKey::SubLocalityNameType => "sublocalitynametype",
            AddressDataKey::SubKeys => "subkeys",
            AddressDataKey::SubLNames => "sublnames",
            AddressDataKey::SubMores => "submores",
            AddressDataKey::SubNames => "subnames",
            AddressDataKey::WidthOverrides => "widthoverrides",
            AddressDataKey::XZip => "xzip",
            AddressDataKey::ZipNameType => "zipnametype",
        }
    }

    /// Resolve a key name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMetadataKey`] if `name` is not a known key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use addressinput_rs::AddressDataKey;
    ///
    /// assert_eq!(AddressDataKey::resolve("COUNTRIES")?, AddressDataKey::Countries);
    /// assert_eq!(AddressDataKey::resolve("lfmt")?, AddressDataKey::LFmt);
    /// assert!(AddressDataKey::resolve("bogus").is_err());
    /// # Ok::<(), addressinput_rs::Error>(())
    /// ```
    pub fn resolve(name: &str) -> Result<Self> {
        let lower = name.to_lowercase();
        KEYS_BY_NAME.get(lower.as_str()).copied().ok_or_else(|| {
            tracing::debug!(key = %name, "rejecting unknown metadata key");
            Error::unknown_metadata_key(name)
        })
    }
}

impl fmt::Display for AddressDataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressDataKey {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::resolve(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(
            AddressDataKey::resolve("COUNTRIES"),
            AddressDataKey::resolve("countries")
        );
        assert_eq!(
            AddressDataKey::resolve("Countries"),
            Ok(AddressDataKey::Countries)
        );
        assert_eq!(
            AddressDataKey::resolve("SubLocalityNameType"),
            Ok(AddressDataKey::SubLocalityNameType)
        );
    }

    #[test]
    fn test_resolve_unknown_key() {
        assert_matches!(
            AddressDataKey::resolve("bogus"),
            Err(Error::UnknownMetadataKey { key }) if key == "bogus"
        );
        assert!(AddressDataKey::resolve("").is_err());
        assert!(AddressDataKey::resolve(" fmt").is_err());
    }

    #[test]
    fn test_every_key_resolves_to_itself() {
        for key in AddressDataKey::ALL {
            assert_eq!(AddressDataKey::resolve(key.as_str()), Ok(key));
            assert_eq!(key.to_string().to_uppercase().parse::<AddressDataKey>(), Ok(key));
        }
        assert_eq!(KEYS_BY_NAME.len(), AddressDataKey::ALL.len());
    }

    #[test]
    fn test_concurrent_lookups() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| AddressDataKey::resolve("XZIP")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().ok(), Some(Ok(AddressDataKey::XZip)));
        }
    }
}
