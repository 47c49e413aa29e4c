//! An optional value that remembers why it is absent.

use crate::error::ParseError;

/// The outcome of trying one grammar alternative.
///
/// Parsing tries alternatives in turn, e.g. an IPv4 address, then an IPv6 literal,
/// then a registered name. An `AugmentedOptional` either holds the value of the
/// alternative that matched, or the reason why the alternative failed, so that the
/// most specific reason can be reported once every alternative has been tried.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub(crate) struct AugmentedOptional<T> {
    inner: Result<T, ParseError>,
}

impl<T> AugmentedOptional<T> {
    pub(crate) fn of(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    pub(crate) fn empty(reason: ParseError) -> Self {
        Self { inner: Err(reason) }
    }

    pub(crate) fn is_present(&self) -> bool {
        self.inner.is_ok()
    }

    /// Tries another alternative if this one failed.
    ///
    /// When both fail, the reason of the first one is kept.
    pub(crate) fn or(self, alternative: impl FnOnce() -> AugmentedOptional<T>) -> Self {
        match self.inner {
            Ok(_) => self,
            Err(reason) => match alternative().inner {
                Ok(value) => Self::of(value),
                Err(_) => Self::empty(reason),
            },
        }
    }

    pub(crate) fn map<U>(self, f: impl FnOnce(T) -> U) -> AugmentedOptional<U> {
        AugmentedOptional {
            inner: self.inner.map(f),
        }
    }

    pub(crate) fn flat_map<U>(
        self,
        f: impl FnOnce(T) -> AugmentedOptional<U>,
    ) -> AugmentedOptional<U> {
        match self.inner {
            Ok(value) => f(value),
            Err(reason) => AugmentedOptional::empty(reason),
        }
    }

    pub(crate) fn or_else_get(self, f: impl FnOnce() -> T) -> T {
        self.inner.unwrap_or_else(|_| f())
    }

    /// Returns the value, or fails with the reason mapped by `f`.
    pub(crate) fn or_else_throw(
        self,
        f: impl FnOnce(ParseError) -> ParseError,
    ) -> Result<T, ParseError> {
        self.inner.map_err(f)
    }
}

impl<T> From<Result<T, ParseError>> for AugmentedOptional<T> {
    fn from(inner: Result<T, ParseError>) -> Self {
        Self { inner }
    }
}
