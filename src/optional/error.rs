//! Error returned when a value is forcibly extracted from an empty `Optional`.

/// Represents an attempt to extract the value of an empty [`Optional`].
///
/// Returned by [`Optional::get`] and [`Optional::get_ref`] when called on
/// [`Optional::None`]. It is never produced by any other operation.
///
/// [`Optional`]: crate::Optional
/// [`Optional::get`]: crate::Optional::get
/// [`Optional::get_ref`]: crate::Optional::get_ref
/// [`Optional::None`]: crate::Optional::None
///
/// # Examples
///
/// ```rust
/// use optional::{none, EmptyOptionalError};
///
/// let error = none::<i32>().get().unwrap_err();
/// assert_eq!(error, EmptyOptionalError { method_name: "get" });
/// assert_eq!(
///     format!("{}", error),
///     "none.get(): no value present in an empty Optional"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyOptionalError {
    /// The name of the extraction method that was called on `None`.
    pub method_name: &'static str,
}

impl EmptyOptionalError {
    pub(crate) const fn new(method_name: &'static str) -> Self {
        Self { method_name }
    }
}

impl std::fmt::Display for EmptyOptionalError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "none.{}(): no value present in an empty Optional",
            self.method_name
        )
    }
}

impl std::error::Error for EmptyOptionalError {}
