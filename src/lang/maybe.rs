//! The `Maybe` container.

use std::option;

/// Immutable container for a value which may or may not be present.
///
/// `Absent` carries no data, so every absent instance of a given type is equal
/// to every other one. Equality is structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// A present value.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> Maybe<T> {
    /// Create a present instance holding `value`.
    pub fn present(value: T) -> Self {
        Maybe::Present(value)
    }

    /// Create an empty instance.
    pub fn empty() -> Self {
        Maybe::Absent
    }

    /// Convert a nullable-style `Option` into a `Maybe`.
    pub fn option(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }

    /// Handle both states and produce a single result.
    ///
    /// This is the primitive every other combinator is built on. Exactly one of
    /// the two functions is invoked.
    pub fn fold<R>(self, on_absent: impl FnOnce() -> R, on_present: impl FnOnce(T) -> R) -> R {
        match self {
            Maybe::Present(value) => on_present(value),
            Maybe::Absent => on_absent(),
        }
    }

    /// Transform the contained value. `mapper` is not invoked on an empty instance.
    ///
    /// If `mapper` can itself produce no value, use [`Maybe::flat_map`].
    pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> Maybe<U> {
        self.flat_map(|value| Maybe::Present(mapper(value)))
    }

    /// Chain a computation which may itself produce no value.
    ///
    /// An empty instance short-circuits without invoking `mapper`.
    pub fn flat_map<U>(self, mapper: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        self.fold(Maybe::empty, mapper)
    }

    /// Keep the value only if `predicate` holds for it.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        self.flat_map(|value| {
            if predicate(&value) {
                Maybe::Present(value)
            } else {
                Maybe::Absent
            }
        })
    }

    /// Pass the contained value to `action` if present.
    ///
    /// The action only sees a shared reference, so it cannot replace the value.
    /// Returns the original instance for chaining.
    pub fn when_present(self, action: impl FnOnce(&T)) -> Self {
        self.apply(|| {}, action)
    }

    /// Run `action` if this instance is empty. Returns the original instance.
    pub fn when_empty(self, action: impl FnOnce()) -> Self {
        self.apply(action, |_| {})
    }

    /// Run `on_absent` or `on_present` depending on the state.
    pub fn apply(self, on_absent: impl FnOnce(), on_present: impl FnOnce(&T)) -> Self {
        self.as_ref().fold(on_absent, on_present);
        self
    }

    /// Return the contained value, or `replacement` if empty.
    pub fn or(self, replacement: T) -> T {
        self.fold(|| replacement, |value| value)
    }

    /// Return the contained value, or the result of `supplier` if empty.
    ///
    /// `supplier` is only invoked for an empty instance.
    pub fn or_else(self, supplier: impl FnOnce() -> T) -> T {
        self.fold(supplier, |value| value)
    }

    pub fn is_present(&self) -> bool {
        self.as_ref().fold(|| false, |_| true)
    }

    pub fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Borrow the contained value.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Bridge from "may be absent" to "may fail".
    ///
    /// A present instance becomes `Ok`, an empty one becomes `Err(cause)`.
    pub fn to_result<C>(self, cause: C) -> Result<T, C> {
        self.fold(|| Err(cause), Ok)
    }

    /// Like [`Maybe::to_result`], but the failure is only built when needed.
    pub fn to_result_with<C>(self, cause: impl FnOnce() -> C) -> Result<T, C> {
        self.fold(|| Err(cause()), Ok)
    }

    /// Convert into a std `Option`.
    pub fn to_option(self) -> Option<T> {
        self.fold(|| None, Some)
    }

    /// Iterate over the contained value: zero or one element.
    pub fn iter(&self) -> option::IntoIter<&T> {
        self.as_ref().to_option().into_iter()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::option(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.to_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Return the first present instance among `ops`, or an empty one.
///
/// All inputs are already evaluated; see [`any_lazy`] for deferred alternatives.
pub fn any<T>(ops: impl IntoIterator<Item = Maybe<T>>) -> Maybe<T> {
    ops.into_iter()
        .find(Maybe::is_present)
        .unwrap_or(Maybe::Absent)
}

/// Return the first present instance, evaluating alternatives lazily.
///
/// `first` is already evaluated. The suppliers run in order and only while every
/// previous instance was empty; none of them runs if `first` is present.
pub fn any_lazy<T, F>(first: Maybe<T>, suppliers: impl IntoIterator<Item = F>) -> Maybe<T>
where
    F: FnOnce() -> Maybe<T>,
{
    first.fold(
        || {
            suppliers
                .into_iter()
                .map(|supplier| supplier())
                .find(Maybe::is_present)
                .unwrap_or(Maybe::Absent)
        },
        Maybe::Present,
    )
}
