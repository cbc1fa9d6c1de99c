//! Optional type - a value that may or may not be present.
//!
//! This module provides the `Optional<T>` type, which represents either a
//! present value `Some(T)` or the absence of a value `None`, together with a
//! closed set of combinators for querying, transforming and extracting the
//! value without null checks.
//!
//! # Examples
//!
//! ```rust
//! use optional::{none, some, Optional};
//!
//! // Construction
//! let present: Optional<&str> = some("thing");
//! let absent: Optional<&str> = none();
//!
//! // Transformation
//! let greeting = present.map(|s| format!("some{s}"));
//! assert_eq!(greeting, some("something".to_string()));
//!
//! // Extraction with a default
//! assert_eq!(absent.get_or_else("otherwise"), "otherwise");
//!
//! // Using fold to handle both cases
//! let description = present.fold(|| "nothing".to_string(), |s| s.to_uppercase());
//! assert_eq!(description, "THING");
//! ```

mod error;
mod iter;

use std::fmt;

pub use error::EmptyOptionalError;
pub use iter::{IntoIter, Iter};

/// A value that is either present (`Some`) or absent (`None`).
///
/// `Optional<T>` is immutable: no method takes `&mut self`. Every combinator
/// either borrows the receiver and answers a question about it, or consumes it
/// and returns a new value.
///
/// Variants are ordered so that `None` compares less than any `Some`.
///
/// # Type Parameters
///
/// * `T` - The type of the wrapped value
///
/// # Examples
///
/// ```rust
/// use optional::Optional;
///
/// let present: Optional<i32> = Optional::Some(42);
/// let absent: Optional<i32> = Optional::None;
///
/// assert_eq!(present.map(|x| x * 2), Optional::Some(84));
/// assert_eq!(absent.map(|x| x * 2), Optional::None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// The absent variant, carrying no payload.
    None,
    /// The present variant, wrapping exactly one value.
    Some(T),
}

/// Wraps `value` in the present variant.
///
/// # Examples
///
/// ```rust
/// use optional::{some, Optional};
///
/// assert_eq!(some(42), Optional::Some(42));
/// ```
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// Returns the absent variant for any `T`.
///
/// # Examples
///
/// ```rust
/// use optional::{none, Optional};
///
/// let absent: Optional<String> = none();
/// assert_eq!(absent, Optional::None);
/// ```
#[inline]
pub const fn none<T>() -> Optional<T> {
    Optional::None
}

impl<T> Optional<T> {
    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert!(none::<i32>().is_empty());
    /// assert!(!some(42).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this is not `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert!(some("thing").non_empty());
    /// assert!(!none::<&str>().non_empty());
    /// ```
    #[inline]
    pub const fn non_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert!(some("something").is_defined());
    /// assert!(!none::<&str>().is_defined());
    /// ```
    #[inline]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `Some(x)` and `x == value`.
    ///
    /// `None` never contains anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert!(some("something").contains(&"something"));
    /// assert!(!some("something").contains(&"something else"));
    /// assert!(!none::<&str>().contains(&"something"));
    /// ```
    #[inline]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Self::Some(wrapped) => wrapped == value,
            Self::None => false,
        }
    }

    /// Returns `true` if this is `Some(x)` and `predicate(x)` holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert!(some("something").exists(|s| !s.is_empty()));
    /// assert!(!some(42).exists(|&n| n < 42));
    /// assert!(!none::<i32>().exists(|_| true));
    /// ```
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns `true` if this is `None`, otherwise the result of `predicate(x)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert!(none::<i32>().for_all(|&n| n > 0));
    /// assert!(some(42).for_all(|&n| n > 0));
    /// assert!(!some(42).for_all(|&n| n > 42));
    /// ```
    #[inline]
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => true,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the wrapped value, consuming the optional.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyOptionalError`] if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert_eq!(some("Hello, World!").get(), Ok("Hello, World!"));
    /// assert!(none::<&str>().get().is_err());
    /// ```
    #[inline]
    pub fn get(self) -> Result<T, EmptyOptionalError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(EmptyOptionalError::new("get")),
        }
    }

    /// Returns a reference to the wrapped value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyOptionalError`] if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::some;
    ///
    /// let optional = some(String::from("hello"));
    /// assert_eq!(optional.get_ref().map(String::len), Ok(5));
    /// ```
    #[inline]
    pub const fn get_ref(&self) -> Result<&T, EmptyOptionalError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(EmptyOptionalError::new("get_ref")),
        }
    }

    /// Returns the wrapped value, or `default` if this is `None`.
    ///
    /// `default` is evaluated eagerly; use [`get_or_else_with`] to defer it.
    ///
    /// [`get_or_else_with`]: Optional::get_or_else_with
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert_eq!(some("something").get_or_else("otherwise"), "something");
    /// assert_eq!(none().get_or_else("otherwise"), "otherwise");
    /// ```
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the wrapped value, or the result of `default` if this is `None`.
    ///
    /// `default` is only invoked on the empty path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert_eq!(none().get_or_else_with(|| "otherwise"), "otherwise");
    /// assert_eq!(
    ///     some("something").get_or_else_with(|| unreachable!()),
    ///     "something"
    /// );
    /// ```
    #[inline]
    pub fn get_or_else_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    /// Converts into a standard [`Option`], whose `None` stands in for null.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert_eq!(some("thing").or_null(), Some("thing"));
    /// assert_eq!(none::<&str>().or_null(), None);
    /// ```
    #[inline]
    pub fn or_null(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Borrows the wrapped value.
    ///
    /// Useful for running consuming combinators without giving up the receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::some;
    ///
    /// let optional = some(String::from("thing"));
    /// assert_eq!(optional.as_ref().map(|s| s.len()), some(5));
    /// assert!(optional.is_defined());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Returns an iterator over the wrapped value.
    ///
    /// The iterator yields one item for `Some` and none for `None`. Each call
    /// starts a fresh iteration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert_eq!(some(42).iter().collect::<Vec<_>>(), vec![&42]);
    /// assert_eq!(none::<i32>().iter().count(), 0);
    /// ```
    #[inline]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies a function to the wrapped value.
    ///
    /// If this is `Some(x)`, returns `Some(function(x))`. If this is `None`,
    /// `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some, Optional};
    ///
    /// assert_eq!(some("thing").map(|s| format!("some{s}")), some("something".to_string()));
    ///
    /// let absent: Optional<&str> = none();
    /// assert_eq!(absent.map(|s| s.len()), none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Chains a computation that itself returns an `Optional`.
    ///
    /// If this is `Some(x)`, returns `function(x)` as is. If this is `None`,
    /// returns `None` without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some, Optional};
    ///
    /// let lookup = |s: &str| if s == "thing" { some("something") } else { none() };
    ///
    /// assert_eq!(some("thing").flat_map(lookup), some("something"));
    /// assert_eq!(some("other").flat_map(lookup), none());
    /// assert_eq!(none().flat_map(lookup), none());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Optional::None,
        }
    }

    /// Eliminates the optional by applying one of two functions.
    ///
    /// Exactly one of `if_empty` and `function` is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert_eq!(some("thing").fold(|| "nothing".to_string(), |s| format!("some{s}")), "something");
    /// assert_eq!(none::<&str>().fold(|| "nothing".to_string(), |s| format!("some{s}")), "nothing");
    /// ```
    #[inline]
    pub fn fold<U, E, F>(self, if_empty: E, function: F) -> U
    where
        E: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => if_empty(),
        }
    }

    /// Keeps the optional if its value satisfies `predicate`, otherwise returns `None`.
    ///
    /// The receiver itself is returned when kept; the value is not rebuilt.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert_eq!(some(42).filter(|&n| n == 42), some(42));
    /// assert_eq!(some(42).filter(|&n| n == 13), none());
    /// assert_eq!(none::<i32>().filter(|_| true), none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if self.exists(predicate) {
            self
        } else {
            Self::None
        }
    }

    /// Keeps the optional if its value does not satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert_eq!(some(42).filter_not(|&n| n == 13), some(42));
    /// assert_eq!(some(42).filter_not(|&n| n == 42), none());
    /// assert_eq!(none::<i32>().filter_not(|&n| n == 42), none());
    /// ```
    #[inline]
    pub fn filter_not<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    /// Returns the optional if it is `Some`, otherwise `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert_eq!(some("something").or_else(none()), some("something"));
    /// assert_eq!(none().or_else(some("something")), some("something"));
    /// ```
    #[inline]
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => alternative,
        }
    }

    /// Returns the optional if it is `Some`, otherwise the result of `alternative`.
    ///
    /// `alternative` is only invoked on the empty path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert_eq!(none().or_else_with(|| some(1)), some(1));
    /// assert_eq!(some(2).or_else_with(|| unreachable!()), some(2));
    /// ```
    #[inline]
    pub fn or_else_with<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => alternative(),
        }
    }

    /// Invokes `procedure` with the wrapped value, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// let mut seen = Vec::new();
    /// some(42).for_each(|n| seen.push(n));
    /// none().for_each(|n| seen.push(n));
    /// assert_eq!(seen, vec![42]);
    /// ```
    #[inline]
    pub fn for_each<F>(self, procedure: F)
    where
        F: FnOnce(T),
    {
        if let Self::Some(value) = self {
            procedure(value);
        }
    }

    /// Pairs the values of two optionals when both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert_eq!(some(1).zip(some("a")), some((1, "a")));
    /// assert_eq!(some(1).zip(none::<&str>()), none());
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Self::Some(left), Optional::Some(right)) => Optional::Some((left, right)),
            _ => Optional::None,
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default> Optional<T> {
    /// Returns the wrapped value, or `T::default()` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// assert_eq!(some(42).get_or_default(), 42);
    /// assert_eq!(none::<i32>().get_or_default(), 0);
    /// ```
    #[inline]
    pub fn get_or_default(self) -> T {
        self.get_or_else_with(T::default)
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some, Optional};
    ///
    /// assert_eq!(some(some(1)).flatten(), some(1));
    /// assert_eq!(some(none::<i32>()).flatten(), none());
    /// assert_eq!(none::<Optional<i32>>().flatten(), none());
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T> Default for Optional<T> {
    /// Returns `None`.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// Converts a standard `Option`, preserving the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some, Optional};
    ///
    /// assert_eq!(Optional::from(Some(1)), some(1));
    /// assert_eq!(Optional::<i32>::from(None), none());
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.or_null()
    }
}

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Optional<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);
