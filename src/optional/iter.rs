//! Iterators over the zero or one element of an `Optional`.

use std::iter::FusedIterator;

use super::Optional;

/// A borrowing iterator over the value of an [`Optional`].
///
/// Created by [`Optional::iter`]. Yields a reference to the wrapped value
/// once for `Some`, and nothing for `None`.
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(super) const fn new(optional: &'a Optional<T>) -> Self {
        match optional {
            Optional::Some(value) => Self { inner: Some(value) },
            Optional::None => Self { inner: None },
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.inner.is_some());
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the value of an [`Optional`].
///
/// Created by the [`IntoIterator`] implementation of [`Optional`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.inner.is_some());
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the `Optional`, yielding its value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optional::{none, some};
    ///
    /// let values: Vec<&str> = some("thing").into_iter().collect();
    /// assert_eq!(values, vec!["thing"]);
    ///
    /// let values: Vec<&str> = none().into_iter().collect();
    /// assert!(values.is_empty());
    /// ```
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.or_null(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects an iterator of `Optional`s, short-circuiting on the first `None`.
///
/// # Examples
///
/// ```rust
/// use optional::{none, some, Optional};
///
/// let all: Optional<Vec<i32>> = vec![some(1), some(2)].into_iter().collect();
/// assert_eq!(all, some(vec![1, 2]));
///
/// let missing: Optional<Vec<i32>> = vec![some(1), none()].into_iter().collect();
/// assert_eq!(missing, none());
/// ```
impl<T, V> FromIterator<Optional<T>> for Optional<V>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Optional<T>>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .map(Optional::or_null)
            .collect::<Option<V>>()
            .into()
    }
}
