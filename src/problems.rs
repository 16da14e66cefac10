//! Registry of validation problems, keyed by address field.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::types::{AddressField, AddressProblemType};

/// Problems recorded against the fields of one address.
///
/// A validator creates one registry per validation pass, records at most one
/// problem per field and hands it back to the caller. The registry can be
/// [cleared](Self::clear) and reused for the next pass.
///
/// # Examples
///
/// ```rust
/// use addressinput_rs::{AddressField, AddressProblemType, AddressProblems};
///
/// let mut problems = AddressProblems::new();
/// problems.add(AddressField::PostalCode, AddressProblemType::InvalidFormat)?;
///
/// assert_eq!(
///     problems.problem_type(AddressField::PostalCode),
///     Some(AddressProblemType::InvalidFormat)
/// );
/// assert_eq!(problems.problem_type(AddressField::Locality), None);
/// # Ok::<(), addressinput_rs::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressProblems {
    problems: BTreeMap<AddressField, AddressProblemType>,
}

impl AddressProblems {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a problem for a field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateProblem`] if the field already has a
    /// problem; the existing entry is left untouched.
    pub fn add(&mut self, field: AddressField, problem: AddressProblemType) -> Result<()> {
        if let Some(&existing) = self.problems.get(&field) {
            tracing::debug!(%field, %existing, %problem, "rejecting duplicate problem");
            return Err(Error::duplicate_problem(field, existing));
        }
        self.problems.insert(field, problem);
        Ok(())
    }

    /// The problem recorded for a field, if any.
    pub fn problem_type(&self, field: AddressField) -> Option<AddressProblemType> {
        self.problems.get(&field).copied()
    }

    /// Whether no problem has been recorded.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Number of fields with a recorded problem.
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// Remove every recorded problem.
    pub fn clear(&mut self) {
        self.problems.clear();
    }

    /// Iterate over the recorded problems in field order.
    pub fn iter(&self) -> impl Iterator<Item = (AddressField, AddressProblemType)> + '_ {
        self.problems.iter().map(|(&field, &problem)| (field, problem))
    }
}

impl fmt::Display for AddressProblems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (field, problem)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {problem}")?;
        }
        f.write_str("}")
    }
}
