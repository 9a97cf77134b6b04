//! Similarity callback abstraction for the setclust core runtime.

/// Caller-supplied measure of how alike two items are.
///
/// Values must be finite and non-negative; higher means more similar. The
/// measure does not have to be symmetric: `similarity(a, b)` and
/// `similarity(b, a)` are evaluated and stored independently.
///
/// Every `Fn(&T, &T) -> f64` implements this trait, so closures can be passed
/// directly.
///
/// # Examples
/// ```
/// use setclust_core::Similarity;
///
/// struct SharedPrefix;
///
/// impl Similarity<&str> for SharedPrefix {
///     fn similarity(&self, left: &&str, right: &&str) -> f64 {
///         let shared = left
///             .chars()
///             .zip(right.chars())
///             .take_while(|(l, r)| l == r)
///             .count();
///         f64::from(u32::try_from(shared).unwrap_or(u32::MAX))
///     }
/// }
///
/// assert_eq!(SharedPrefix.similarity(&"stephen", &"stephanie"), 5.0);
///
/// let closure = |left: &i32, right: &i32| f64::from((left - right).abs());
/// assert_eq!(closure.similarity(&1, &4), 3.0);
/// ```
pub trait Similarity<T: ?Sized> {
    /// Scores `left` against `right`.
    fn similarity(&self, left: &T, right: &T) -> f64;
}

impl<T: ?Sized, F> Similarity<T> for F
where
    F: Fn(&T, &T) -> f64,
{
    fn similarity(&self, left: &T, right: &T) -> f64 {
        self(left, right)
    }
}

/// Returns `true` when `value` is usable as an edge weight.
pub(crate) fn is_valid_similarity(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
