//! Composable percent-encodings.
//!
//! A [`PercentEncoding`] converts between a value and its percent-encoded form.
//! The simplest one is a [`PercentEncoder`] itself, which encodes a `String`.
//! The combinators in this module layer more structure on top of a child encoding:
//!
//! - [`AdditionallyEncoding`] encodes some extra characters.
//! - [`Delimited`] encodes a list of values joined by a delimiter.
//! - [`Substituted`] swaps one character for another, such as a space for `+`.
//! - [`Transformed`] converts to and from a custom type with a [`Transformer`].
//!
//! A [`PercentEncodingPartial`] names such a stack of combinators as a type, so that
//! path segments, queries and fragments can be parameterized by it. Each component
//! supplies its own base encoder, and the partial builds the final encoding on top.
//!
//! # Examples
//!
//! A query made of `&`-separated `key=value` pairs, with spaces written as `+`:
//!
//! ```
//! use urin::pct_enc::{
//!     partial::{Delimited, Substituted},
//!     table, PercentEncoder, PercentEncoding, PercentEncodingPartial,
//! };
//!
//! #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
//! struct FormQuery;
//!
//! impl PercentEncodingPartial for FormQuery {
//!     type Value = Vec<Vec<String>>;
//!     type Encoding = Delimited<Delimited<Substituted<PercentEncoder>>>;
//!
//!     fn apply(base: PercentEncoder) -> Self::Encoding {
//!         Delimited::new('&', Delimited::new('=', Substituted::new(' ', '+', base)))
//!     }
//! }
//!
//! let encoding = FormQuery::apply(PercentEncoder::new(table::QUERY));
//! let value = vec![
//!     vec!["name".to_owned(), "Jo Bloggs".to_owned()],
//!     vec!["math".to_owned(), "1+1=2".to_owned()],
//! ];
//! let encoded = encoding.encode(&value);
//! assert_eq!(encoded, "name=Jo+Bloggs&math=1%2B1%3D2");
//! assert_eq!(encoding.decode(&encoded)?, value);
//! # Ok::<_, urin::ParseError>(())
//! ```

use super::PercentEncoder;
use crate::error::ParseError;
use alloc::{string::String, vec::Vec};
use core::{fmt::Debug, hash::Hash};

/// A bidirectional conversion between values and their percent-encoded form.
pub trait PercentEncoding: Clone + Debug {
    /// The type of values encoded.
    type Value;

    /// Encodes a value.
    fn encode(&self, value: &Self::Value) -> String;

    /// Decodes a value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input is not a valid encoding of a value.
    fn decode(&self, encoded: &str) -> Result<Self::Value, ParseError>;

    /// Returns an encoding that also percent-encodes the given character.
    ///
    /// # Panics
    ///
    /// Panics if the character is not ASCII.
    #[must_use]
    fn additionally_encoding(self, ch: char) -> Self;
}

/// A percent-encoding stack named as a type.
///
/// Implementors are normally zero-sized marker types, and are used as type parameters
/// of [`Segment`], [`Query`], [`Fragment`] and [`Scheme`]. See the [module-level
/// documentation](self) for an example.
///
/// [`Segment`]: crate::path::Segment
/// [`Query`]: crate::component::Query
/// [`Fragment`]: crate::component::Fragment
/// [`Scheme`]: crate::scheme::Scheme
pub trait PercentEncodingPartial:
    Copy + Debug + Default + Eq + Hash + Send + Sync + 'static
{
    /// The type of values encoded.
    type Value: Clone + Debug + Eq + Hash;

    /// The encoding produced on top of a base encoder.
    type Encoding: PercentEncoding<Value = Self::Value>;

    /// Builds the encoding on top of the base encoder of a component.
    fn apply(base: PercentEncoder) -> Self::Encoding;
}

/// The identity partial: values are strings encoded by the base encoder alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NoOp;

impl PercentEncodingPartial for NoOp {
    type Value = String;
    type Encoding = PercentEncoder;

    fn apply(base: PercentEncoder) -> PercentEncoder {
        base
    }
}

/// An encoding that percent-encodes some characters in addition to its child.
#[derive(Clone, Debug)]
pub struct AdditionallyEncoding<E> {
    inner: E,
}

impl<E: PercentEncoding> AdditionallyEncoding<E> {
    /// Creates an encoding that also encodes the given characters.
    ///
    /// The characters are applied to the child in the order given.
    ///
    /// # Panics
    ///
    /// Panics if any of the characters is not ASCII.
    pub fn new(chars: &[char], child: E) -> Self {
        let inner = chars
            .iter()
            .fold(child, |enc, &ch| enc.additionally_encoding(ch));
        Self { inner }
    }
}

impl<E: PercentEncoding> PercentEncoding for AdditionallyEncoding<E> {
    type Value = E::Value;

    fn encode(&self, value: &E::Value) -> String {
        self.inner.encode(value)
    }

    fn decode(&self, encoded: &str) -> Result<E::Value, ParseError> {
        self.inner.decode(encoded)
    }

    fn additionally_encoding(self, ch: char) -> Self {
        Self {
            inner: self.inner.additionally_encoding(ch),
        }
    }
}

/// An encoding of a list of values separated by a delimiter.
///
/// The delimiter is percent-encoded wherever it occurs within a value.
///
/// The empty list and the list of one empty value are both written as the
/// empty string, which decodes as the latter. An empty list therefore does not
/// read back unchanged.
#[derive(Clone, Debug)]
pub struct Delimited<E> {
    delim: char,
    inner: E,
}

impl<E: PercentEncoding> Delimited<E> {
    /// Creates an encoding of values joined by `delim`.
    ///
    /// # Panics
    ///
    /// Panics if the delimiter is not ASCII.
    pub fn new(delim: char, child: E) -> Self {
        Self {
            delim,
            inner: child.additionally_encoding(delim),
        }
    }
}

impl<E: PercentEncoding> PercentEncoding for Delimited<E> {
    type Value = Vec<E::Value>;

    fn encode(&self, values: &Vec<E::Value>) -> String {
        let mut buf = String::new();
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                buf.push(self.delim);
            }
            buf.push_str(&self.inner.encode(value));
        }
        buf
    }

    fn decode(&self, encoded: &str) -> Result<Vec<E::Value>, ParseError> {
        encoded
            .split(self.delim)
            .map(|s| self.inner.decode(s))
            .collect()
    }

    fn additionally_encoding(self, ch: char) -> Self {
        Self {
            delim: self.delim,
            inner: self.inner.additionally_encoding(ch),
        }
    }
}

/// An encoding of strings with one character written as another.
///
/// The replacement character is percent-encoded wherever it occurs in the value.
/// The classic use is writing spaces as `+` in queries.
#[derive(Clone, Debug)]
pub struct Substituted<E> {
    original: char,
    replacement: char,
    inner: E,
}

impl<E: PercentEncoding<Value = String>> Substituted<E> {
    /// Creates an encoding that writes `original` as `replacement`.
    ///
    /// # Panics
    ///
    /// Panics if the replacement character is not ASCII.
    pub fn new(original: char, replacement: char, child: E) -> Self {
        Self {
            original,
            replacement,
            inner: child.additionally_encoding(replacement),
        }
    }
}

impl<E: PercentEncoding<Value = String>> PercentEncoding for Substituted<E> {
    type Value = String;

    fn encode(&self, value: &String) -> String {
        let mut buf = String::new();
        for (i, part) in value.split(self.original).enumerate() {
            if i > 0 {
                buf.push(self.replacement);
            }
            buf.push_str(&self.inner.encode(&String::from(part)));
        }
        buf
    }

    fn decode(&self, encoded: &str) -> Result<String, ParseError> {
        let mut buf = String::new();
        for (i, part) in encoded.split(self.replacement).enumerate() {
            if i > 0 {
                buf.push(self.original);
            }
            buf.push_str(&self.inner.decode(part)?);
        }
        Ok(buf)
    }

    fn additionally_encoding(self, ch: char) -> Self {
        Self {
            original: self.original,
            replacement: self.replacement,
            inner: self.inner.additionally_encoding(ch),
        }
    }
}

/// A conversion between a custom type and a type with an existing encoding.
pub trait Transformer: Clone + Debug {
    /// The custom type.
    type Value;
    /// The type with an existing encoding.
    type Encoded;

    /// Converts a custom value for encoding.
    fn encode(&self, value: &Self::Value) -> Self::Encoded;

    /// Converts a decoded value back to the custom type.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the decoded value does not represent a custom value,
    /// normally built with [`ParseError::invalid_value`].
    fn decode(&self, encoded: Self::Encoded) -> Result<Self::Value, ParseError>;
}

/// An encoding of a custom type through a [`Transformer`].
#[derive(Clone, Debug)]
pub struct Transformed<E, T> {
    inner: E,
    transformer: T,
}

impl<E, T> Transformed<E, T>
where
    E: PercentEncoding,
    T: Transformer<Encoded = E::Value>,
{
    /// Creates an encoding of the transformer's custom type.
    pub fn new(child: E, transformer: T) -> Self {
        Self {
            inner: child,
            transformer,
        }
    }
}

impl<E, T> PercentEncoding for Transformed<E, T>
where
    E: PercentEncoding,
    T: Transformer<Encoded = E::Value>,
{
    type Value = T::Value;

    fn encode(&self, value: &T::Value) -> String {
        self.inner.encode(&self.transformer.encode(value))
    }

    fn decode(&self, encoded: &str) -> Result<T::Value, ParseError> {
        self.transformer.decode(self.inner.decode(encoded)?)
    }

    fn additionally_encoding(self, ch: char) -> Self {
        Self {
            inner: self.inner.additionally_encoding(ch),
            transformer: self.transformer,
        }
    }
}
