//! Autocomplete predictions and the capability providers implement.
//!
//! The crate does not ship a provider. A provider wraps some place-search
//! service, reports whether it is usable and streams predictions for a
//! free-text query through a callback.

use std::future::Future;
use std::hash::{Hash, Hasher};

/// One autocomplete suggestion.
///
/// # Equality
///
/// Two predictions are equal only when `self` has all three components and
/// each one equals the corresponding component of `other`. A prediction with
/// a missing component compares unequal to everything, itself included, so
/// placeholder rows are never merged together. Because the relation is not
/// reflexive this type implements [`PartialEq`] but not [`Eq`].
///
/// # Examples
///
/// ```rust
/// use addressinput_rs::AutocompletePrediction;
///
/// let a = AutocompletePrediction::new("place-1", "1600 Amphitheatre Pkwy", "Mountain View, CA");
/// let b = AutocompletePrediction::new("place-1", "1600 Amphitheatre Pkwy", "Mountain View, CA");
/// assert_eq!(a, b);
///
/// let partial = AutocompletePrediction::new("place-2", "Main St", None);
/// assert_ne!(partial, partial.clone());
/// ```
#[derive(Debug, Clone)]
pub struct AutocompletePrediction {
    place_id: Option<String>,
    primary_text: Option<String>,
    secondary_text: Option<String>,
}

impl AutocompletePrediction {
    /// Create a prediction from its place identifier and display texts.
    pub fn new<'a>(
        place_id: impl Into<Option<&'a str>>,
        primary_text: impl Into<Option<&'a str>>,
        secondary_text: impl Into<Option<&'a str>>,
    ) -> Self {
        Self {
            place_id: place_id.into().map(str::to_string),
            primary_text: primary_text.into().map(str::to_string),
            secondary_text: secondary_text.into().map(str::to_string),
        }
    }

    /// Opaque identifier of the predicted place.
    pub fn place_id(&self) -> Option<&str> {
        self.place_id.as_deref()
    }

    /// Main text of the suggestion, usually the street part.
    pub fn primary_text(&self) -> Option<&str> {
        self.primary_text.as_deref()
    }

    /// Secondary text of the suggestion, usually locality and region.
    pub fn secondary_text(&self) -> Option<&str> {
        self.secondary_text.as_deref()
    }
}

impl PartialEq for AutocompletePrediction {
    fn eq(&self, other: &Self) -> bool {
        fn present_and_equal(ours: &Option<String>, theirs: &Option<String>) -> bool {
            ours.is_some() && ours == theirs
        }

        present_and_equal(&self.place_id, &other.place_id)
            && present_and_equal(&self.primary_text, &other.primary_text)
            && present_and_equal(&self.secondary_text, &other.secondary_text)
    }
}

impl Hash for AutocompletePrediction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.place_id.hash(state);
        self.primary_text.hash(state);
        self.secondary_text.hash(state);
    }
}

/// A source of address autocomplete predictions.
///
/// # Examples
///
/// ```rust
/// use addressinput_rs::{AddressAutocompleteApi, AutocompletePrediction};
///
/// struct Fixed;
///
/// impl AddressAutocompleteApi for Fixed {
///     fn is_configured_correctly(&self) -> bool {
///         true
///     }
///
///     async fn get_autocomplete_predictions<F>(&self, query: &str, mut callback: F)
///     where
///         F: FnMut(AutocompletePrediction) + Send,
///     {
///         callback(AutocompletePrediction::new("id-1", query, "Somewhere"));
///     }
/// }
///
/// let predictions = tokio_test::block_on(addressinput_rs::collect_predictions(&Fixed, "Main St"));
/// assert_eq!(predictions[0].primary_text(), Some("Main St"));
/// ```
pub trait AddressAutocompleteApi {
    /// Whether the provider is usable, e.g. has credentials.
    fn is_configured_correctly(&self) -> bool;

    /// Request predictions for `query`, calling `callback` once per result.
    fn get_autocomplete_predictions<F>(
        &self,
        query: &str,
        callback: F,
    ) -> impl Future<Output = ()> + Send
    where
        F: FnMut(AutocompletePrediction) + Send;
}

/// Run a prediction request and gather its results.
///
/// Providers that are not configured are not called and yield no
/// predictions.
pub async fn collect_predictions<A>(api: &A, query: &str) -> Vec<AutocompletePrediction>
where
    A: AddressAutocompleteApi,
{
    if !api.is_configured_correctly() {
        tracing::debug!("autocomplete provider is not configured, skipping request");
        return Vec::new();
    }

    let mut predictions = Vec::new();
    api.get_autocomplete_predictions(query, |prediction| predictions.push(prediction))
        .await;
    tracing::trace!(count = predictions.len(), "collected autocomplete predictions");
    predictions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn hash_of(prediction: &AutocompletePrediction) -> u64 {
        let mut hasher = DefaultHasher::new();
        prediction.hash(&mut hasher);
        hasher.finish()
    }

    struct StaticProvider {
        configured: bool,
        calls: AtomicUsize,
        places: Vec<(&'static str, &'static str, &'static str)>,
    }

    impl StaticProvider {
        fn new(configured: bool) -> Self {
            Self {
                configured,
                calls: AtomicUsize::new(0),
                places: vec![
                    ("p1", "1600 Amphitheatre Pkwy", "Mountain View, CA"),
                    ("p2", "1600 Pennsylvania Ave NW", "Washington, DC"),
                ],
            }
        }
    }

    impl AddressAutocompleteApi for StaticProvider {
        fn is_configured_correctly(&self) -> bool {
            self.configured
        }

        async fn get_autocomplete_predictions<F>(&self, query: &str, mut callback: F)
        where
            F: FnMut(AutocompletePrediction) + Send,
        {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            for &(id, primary, secondary) in &self.places {
                if primary.starts_with(query) {
                    callback(AutocompletePrediction::new(id, primary, secondary));
                }
            }
        }
    }

    #[test]
    fn test_equal_predictions_share_hash() {
        let a = AutocompletePrediction::new("p1", "Main St", "Springfield");
        let b = AutocompletePrediction::new("p1", "Main St", "Springfield");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = AutocompletePrediction::new("p2", "Main St", "Springfield");
        assert_ne!(a, c);
    }

    #[test]
    fn test_missing_component_is_never_equal() {
        let partial = AutocompletePrediction::new("p1", None, "Springfield");
        assert_ne!(partial, partial.clone());
        #[allow(clippy::eq_op)]
        let reflexive = partial == partial;
        assert!(!reflexive);

        let empty = AutocompletePrediction::new(None, None, None);
        assert_ne!(empty, AutocompletePrediction::new(None, None, None));

        let complete = AutocompletePrediction::new("p1", "Main St", "Springfield");
        assert_ne!(complete, partial);
        assert_ne!(partial, complete);
    }

    #[test]
    fn test_accessors() {
        let prediction = AutocompletePrediction::new("p1", "Main St", None);
        assert_eq!(prediction.place_id(), Some("p1"));
        assert_eq!(prediction.primary_text(), Some("Main St"));
        assert_eq!(prediction.secondary_text(), None);
    }

    #[tokio::test]
    async fn test_collect_predictions() {
        let provider = StaticProvider::new(true);
        let predictions = collect_predictions(&provider, "1600 A").await;
        assert_eq!(
            predictions,
            vec![AutocompletePrediction::new(
                "p1",
                "1600 Amphitheatre Pkwy",
                "Mountain View, CA"
            )]
        );

        let all = collect_predictions(&provider, "1600").await;
        assert_eq!(all.len(), 2);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unconfigured_provider_is_not_called() {
        let provider = StaticProvider::new(false);
        let predictions = tokio_test::block_on(collect_predictions(&provider, "1600"));
        assert!(predictions.is_empty());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }
}
