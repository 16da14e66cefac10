//! Normalization of field values and address lines.
//!
//! Builders run every incoming value through these functions so that the
//! values they produce never carry surrounding whitespace or empty strings.

/// Trim a value, mapping empty and whitespace-only input to `None`.
///
/// # Examples
///
/// ```rust
/// use addressinput_rs::normalizer::trim_to_none;
///
/// assert_eq!(trim_to_none(Some("  Zurich ")), Some("Zurich".to_string()));
/// assert_eq!(trim_to_none(Some(" \t ")), None);
/// assert_eq!(trim_to_none(None), None);
/// ```
pub fn trim_to_none(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split, trim and filter a list of raw address lines.
///
/// Each line is split on `'\n'`, every fragment is trimmed and fragments
/// that end up empty are dropped. Ordering is preserved.
///
/// # Examples
///
/// ```rust
/// use addressinput_rs::normalizer::normalize_address_lines;
///
/// let lines = normalize_address_lines(["a\nb\n\nc", "  ", " d "]);
/// assert_eq!(lines, vec!["a", "b", "c", "d"]);
/// ```
pub fn normalize_address_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .flat_map(|line| {
            line.as_ref()
                .split('\n')
                .filter_map(|fragment| trim_to_none(Some(fragment)))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_to_none() {
        assert_eq!(trim_to_none(Some("x")), Some("x".to_string()));
        assert_eq!(trim_to_none(Some("  x  ")), Some("x".to_string()));
        assert_eq!(trim_to_none(Some("")), None);
        assert_eq!(trim_to_none(Some("\n\t ")), None);
        assert_eq!(trim_to_none(None), None);
    }

    #[test]
    fn test_normalize_address_lines() {
        assert_eq!(
            normalize_address_lines(["a\nb\n\nc"]),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_normalize_keeps_order_and_drops_blanks() {
        let lines = vec![
            "".to_string(),
            " 1600 Amphitheatre Pkwy ".to_string(),
            "Building 40\r\n  Floor 2".to_string(),
        ];
        assert_eq!(
            normalize_address_lines(&lines),
            vec!["1600 Amphitheatre Pkwy", "Building 40", "Floor 2"]
        );
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize_address_lines(Vec::<String>::new()).is_empty());
    }
}
