//! Error types.

use alloc::string::{String, ToString};

/// Detailed cause of a [`ParseError`].
///
/// Each variant names the smallest grammar production that failed to match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// Invalid percent-encoded octet that is either non-hexadecimal or incomplete.
    ///
    /// The error index points to the percent character "%" of the octet.
    InvalidOctet,
    /// Unexpected character that is not allowed by the component's character set.
    ///
    /// The error index points to the character.
    UnexpectedChar,
    /// Percent-encoded octets that do not decode to valid UTF-8.
    InvalidUtf8,
    /// Invalid scheme name.
    InvalidScheme,
    /// Invalid user information.
    InvalidUserInfo,
    /// Invalid host, including malformed IP literals.
    InvalidHost,
    /// Invalid port.
    InvalidPort,
    /// Invalid decimal octet of an IPv4 address.
    InvalidOctetValue,
    /// Invalid hexadectet of an IPv6 address.
    InvalidHexadectet,
    /// Invalid path segment.
    InvalidSegment,
    /// Invalid query.
    InvalidQuery,
    /// Invalid fragment.
    InvalidFragment,
    /// A decoded value rejected by a scheme-specific [`Transformer`].
    ///
    /// [`Transformer`]: crate::pct_enc::partial::Transformer
    InvalidValue,
    /// Input that is not a URI.
    InvalidUri,
    /// Input that is not a relative reference.
    InvalidRelativeReference,
}

/// An error occurred when parsing a URI, relative reference or one of their components.
///
/// The error echoes the offending input, which is the smallest failing component
/// rather than the whole string when the failure could be narrowed down.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParseError {
    pub(crate) kind: ParseErrorKind,
    pub(crate) index: Option<usize>,
    pub(crate) input: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, input: &str) -> Self {
        Self {
            kind,
            index: None,
            input: input.to_string(),
        }
    }

    pub(crate) fn at(kind: ParseErrorKind, index: usize, input: &str) -> Self {
        Self {
            kind,
            index: Some(index),
            input: input.to_string(),
        }
    }

    /// Creates an error reporting that a decoded value was rejected.
    ///
    /// This is meant for implementors of [`Transformer`].
    ///
    /// [`Transformer`]: crate::pct_enc::partial::Transformer
    #[must_use]
    pub fn invalid_value(input: &str) -> Self {
        Self::new(ParseErrorKind::InvalidValue, input)
    }

    /// Returns the same error with its kind replaced, keeping the input.
    pub(crate) fn with_kind(mut self, kind: ParseErrorKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the byte index within [`input`](Self::input) at which the error occurred,
    /// if the error concerns a single position.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[cfg(feature = "impl-error")]
impl crate::Error for ParseError {}
