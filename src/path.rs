//! Path segments and paths.

use crate::{
    component::invalid_component,
    error::{ParseError, ParseErrorKind},
    pct_enc::{partial::NoOp, table, PercentEncoder, PercentEncoding, PercentEncodingPartial},
};
use alloc::{string::String, vec::Vec};

/// A [segment] of a path.
///
/// The dot-segments `.` and `..` and the empty segment have variants of their own.
/// A [`Value`](Segment::Value) segment whose encoding would read as a dot-segment
/// is written with its dots percent-encoded, i.e. `%2E` and `%2E%2E`.
///
/// The type parameter is the [partial](crate::pct_enc::partial) that encodes a
/// segment's value on top of the base `pchar` encoder.
///
/// [segment]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment<P: PercentEncodingPartial = NoOp> {
    /// The empty segment.
    Empty,
    /// The segment `.`.
    Dot,
    /// The segment `..`.
    DotDot,
    /// A segment with a value.
    Value(P::Value),
}

impl<P: PercentEncodingPartial> Segment<P> {
    /// Creates a segment holding the given value.
    ///
    /// A value that encodes to the empty string gives [`Empty`](Segment::Empty).
    ///
    /// # Examples
    ///
    /// ```
    /// use urin::path::Segment;
    ///
    /// let seg: Segment = Segment::segment("..".to_owned());
    /// assert_eq!(seg.to_string(), "%2E%2E");
    /// let seg: Segment = Segment::segment(String::new());
    /// assert_eq!(seg, Segment::Empty);
    /// ```
    #[must_use]
    pub fn segment(value: P::Value) -> Self {
        if Self::encoding().encode(&value).is_empty() {
            Segment::Empty
        } else {
            Segment::Value(value)
        }
    }

    /// Returns the segment `.`.
    #[must_use]
    pub fn dot() -> Self {
        Segment::Dot
    }

    /// Returns the segment `..`.
    #[must_use]
    pub fn dot_dot() -> Self {
        Segment::DotDot
    }

    /// Returns the empty segment.
    #[must_use]
    pub fn empty() -> Self {
        Segment::Empty
    }

    /// Checks whether the segment holds a value.
    #[must_use]
    pub fn has_value(&self) -> bool {
        matches!(self, Segment::Value(_))
    }

    /// Returns the value of the segment.
    ///
    /// # Panics
    ///
    /// Panics if the segment does not hold a value. For a non-panicking variant,
    /// use [`value_opt`](Self::value_opt).
    #[must_use]
    pub fn value(&self) -> &P::Value {
        match self {
            Segment::Value(value) => value,
            Segment::Empty => panic!("attempt to get value of empty segment"),
            Segment::Dot => panic!("attempt to get value of dot segment"),
            Segment::DotDot => panic!("attempt to get value of dot dot segment"),
        }
    }

    /// Returns the value of the segment, if any.
    #[must_use]
    pub fn value_opt(&self) -> Option<&P::Value> {
        match self {
            Segment::Value(value) => Some(value),
            _ => None,
        }
    }

    fn encoding() -> P::Encoding {
        P::apply(PercentEncoder::new(table::PCHAR))
    }

    // A value written as nothing reads back as the empty segment.
    fn into_canonical(self) -> Self {
        match self {
            Segment::Value(value) => Self::segment(value),
            segment => segment,
        }
    }

    /// Returns the encoded form of the segment.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Segment::Empty => String::new(),
            Segment::Dot => ".".into(),
            Segment::DotDot => "..".into(),
            Segment::Value(value) => {
                let encoded = Self::encoding().encode(value);
                match encoded.as_str() {
                    "." => "%2E".into(),
                    ".." => "%2E%2E".into(),
                    _ => encoded,
                }
            }
        }
    }

    /// Checks whether the encoded form of the segment contains `':'`.
    #[must_use]
    pub fn contains_colon(&self) -> bool {
        match self {
            Segment::Value(value) => Self::encoding().encode(value).contains(':'),
            _ => false,
        }
    }

    /// Parses a segment from its encoded form.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is not a valid encoding of a segment value.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        match s {
            "" => Ok(Segment::Empty),
            "." => Ok(Segment::Dot),
            ".." => Ok(Segment::DotDot),
            _ => Self::encoding()
                .decode(s)
                .map(Segment::Value)
                .map_err(|e| invalid_component(e, ParseErrorKind::InvalidSegment)),
        }
    }
}

/// Whether to write `./` before the first segment of a path.
///
/// A path sometimes needs a leading dot-segment so that it is not misread: an
/// empty first segment would otherwise begin with `//` and read as an authority,
/// and a first segment containing a colon would otherwise read as a scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrefixWithDotSegment {
    /// Never write the prefix.
    Never,
    /// Write the prefix if the path is rootless and its first segment contains `':'`.
    IfFirstContainsColon,
    /// Write the prefix if the first segment is empty.
    IfFirstIsEmpty,
    /// Write the prefix in either case above.
    IfFirstIsEmptyOrContainsColon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Kind {
    Empty,
    Absolute,
    Rootless,
}

/// A [path] component.
///
/// A path is a list of [`Segment`]s, which is normalized by removing dot-segments
/// as in [Section 5.2.4 of RFC 3986][remove] when the path is created, and which is
/// never changed afterwards.
///
/// # Examples
///
/// ```
/// use urin::path::Path;
///
/// let path: Path = Path::parse("a/b/c/./../../g")?;
/// assert_eq!(path.to_string(), "a/g");
///
/// let path: Path = Path::parse("/a/b/../..")?;
/// assert_eq!(path.to_string(), "/");
/// # Ok::<_, urin::ParseError>(())
/// ```
///
/// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
/// [remove]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path<P: PercentEncodingPartial = NoOp> {
    kind: Kind,
    segments: Vec<Segment<P>>,
}

impl<P: PercentEncodingPartial> Default for Path<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P: PercentEncodingPartial> Path<P> {
    /// Returns the empty path.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            kind: Kind::Empty,
            segments: Vec::new(),
        }
    }

    /// Creates a rootless path, i.e. one without a leading `'/'`.
    ///
    /// An empty list of segments gives the empty path.
    #[must_use]
    pub fn rootless(segments: impl IntoIterator<Item = Segment<P>>) -> Self {
        let segments: Vec<_> = segments.into_iter().collect();
        if segments.is_empty() {
            Self::empty()
        } else {
            Self {
                kind: Kind::Rootless,
                segments: normalize(segments),
            }
        }
    }

    /// Creates an absolute path, i.e. one with a leading `'/'`.
    #[must_use]
    pub fn absolute(segments: impl IntoIterator<Item = Segment<P>>) -> Self {
        Self {
            kind: Kind::Absolute,
            segments: normalize_absolute(segments.into_iter().collect()),
        }
    }

    /// Checks whether the path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind == Kind::Empty
    }

    /// Checks whether the path is absolute.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.kind == Kind::Absolute
    }

    /// Checks whether the path is rootless.
    #[must_use]
    pub fn is_rootless(&self) -> bool {
        self.kind == Kind::Rootless
    }

    /// Returns the normalized segments of the path.
    #[must_use]
    pub fn segments(&self) -> &[Segment<P>] {
        &self.segments
    }

    /// Checks whether the path has a first segment and it is empty.
    #[must_use]
    pub fn first_part_is_supplied_but_is_empty(&self) -> bool {
        matches!(self.segments.first(), Some(Segment::Empty))
    }

    /// Checks whether the path has a first segment and it contains `':'`.
    #[must_use]
    pub fn first_part_is_supplied_but_contains_colon(&self) -> bool {
        self.segments.first().map_or(false, Segment::contains_colon)
    }

    /// Returns the encoded form of the path, prefixed by `./` per the given policy.
    ///
    /// The colon check of the policy only applies to rootless paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use urin::path::{Path, PrefixWithDotSegment, Segment};
    ///
    /// let path: Path = Path::rootless([Segment::segment("a:b".to_owned())]);
    /// assert_eq!(path.to_encoded_string(PrefixWithDotSegment::Never), "a:b");
    /// assert_eq!(
    ///     path.to_encoded_string(PrefixWithDotSegment::IfFirstContainsColon),
    ///     "./a:b"
    /// );
    ///
    /// let path: Path = Path::absolute([Segment::Empty, Segment::segment("a".to_owned())]);
    /// assert_eq!(path.to_encoded_string(PrefixWithDotSegment::IfFirstIsEmpty), "/.//a");
    /// ```
    #[must_use]
    pub fn to_encoded_string(&self, prefix: PrefixWithDotSegment) -> String {
        let if_empty = self.first_part_is_supplied_but_is_empty();
        let if_colon =
            self.kind == Kind::Rootless && self.first_part_is_supplied_but_contains_colon();
        let prefixed = match prefix {
            PrefixWithDotSegment::Never => false,
            PrefixWithDotSegment::IfFirstContainsColon => if_colon,
            PrefixWithDotSegment::IfFirstIsEmpty => if_empty,
            PrefixWithDotSegment::IfFirstIsEmptyOrContainsColon => if_empty || if_colon,
        };

        let mut buf = String::new();
        if self.kind == Kind::Absolute {
            buf.push('/');
        }
        if prefixed {
            buf.push_str("./");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                buf.push('/');
            }
            buf.push_str(&segment.encode());
        }
        buf
    }

    /// Resolves this path as a reference against a base path, as in
    /// [Section 5.2 of RFC 3986][resolve].
    ///
    /// An empty path resolves to the base path, and an absolute path resolves to
    /// itself. A rootless path is merged with all but the last segment of the base
    /// path, and takes the kind of the base path.
    ///
    /// [resolve]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2
    #[must_use]
    pub fn resolve_relative_to(&self, base: &Path<P>) -> Path<P> {
        match self.kind {
            Kind::Empty => base.clone(),
            Kind::Absolute => self.clone(),
            Kind::Rootless => {
                let merged = self.merged_with(base);
                match base.kind {
                    Kind::Absolute => Path::absolute(merged),
                    Kind::Empty | Kind::Rootless => Path::rootless(merged),
                }
            }
        }
    }

    /// Merges with a base path that has an authority but no segments, which
    /// always gives an absolute path.
    pub(crate) fn resolve_against_empty_authority_path(&self) -> Path<P> {
        match self.kind {
            Kind::Rootless => Path::absolute(self.segments.iter().cloned()),
            _ => self.clone(),
        }
    }

    fn merged_with(&self, base: &Path<P>) -> Vec<Segment<P>> {
        let keep = base.segments.len().saturating_sub(1);
        base.segments[..keep]
            .iter()
            .chain(&self.segments)
            .cloned()
            .collect()
    }

    /// Parses a path from its encoded form.
    ///
    /// The empty string gives the empty path, a string with a leading `'/'` gives
    /// an absolute path, and any other string gives a rootless path.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a segment fails to parse.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            Ok(Self::empty())
        } else if s.starts_with('/') {
            Self::parse_absolute(s)
        } else {
            Self::parse_rootless(s)
        }
    }

    /// Parses a rootless path from its encoded form.
    ///
    /// The empty string gives the empty path.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a segment fails to parse.
    pub fn parse_rootless(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Ok(Self::empty());
        }
        Ok(Self::rootless(parse_segments(s)?))
    }

    /// Parses an absolute path from its encoded form, including the leading `'/'`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string does not start with `'/'` or if a segment
    /// fails to parse.
    pub fn parse_absolute(s: &str) -> Result<Self, ParseError> {
        match s.strip_prefix('/') {
            Some(rem) => Ok(Self::absolute(parse_segments(rem)?)),
            None => Err(ParseError::at(ParseErrorKind::InvalidSegment, 0, s)),
        }
    }
}

fn parse_segments<P: PercentEncodingPartial>(s: &str) -> Result<Vec<Segment<P>>, ParseError> {
    s.split('/').map(Segment::parse).collect()
}

/// Removes dot-segments from a list of segments.
///
/// Values that encode to the empty string become [`Segment::Empty`] first.
/// Each `..` removes the segment before it unless that is also `..`, and a `.`
/// is dropped unless it is needed to keep the path from being read differently.
/// A path that ends by removing a segment gets a trailing empty segment, so that
/// it still ends with `/`.
fn normalize<P: PercentEncodingPartial>(segments: Vec<Segment<P>>) -> Vec<Segment<P>> {
    let mut out: Vec<Segment<P>> = Vec::with_capacity(segments.len());
    let mut iter = segments.into_iter().peekable();

    while let Some(segment) = iter.next() {
        let is_last = iter.peek().is_none();
        match segment.into_canonical() {
            Segment::Dot => {
                if out.is_empty() {
                    out.push(Segment::Dot);
                } else if is_last {
                    if out.last() == Some(&Segment::Dot) {
                        out.pop();
                    }
                    out.push(Segment::Empty);
                }
            }
            Segment::DotDot if matches!(out.last(), Some(last) if *last != Segment::DotDot) => {
                let removed = out.pop();
                if removed == Some(Segment::Dot) {
                    if matches!(out.last(), Some(last) if *last != Segment::DotDot) {
                        out.pop();
                        if is_last {
                            out.push(Segment::Empty);
                        }
                    } else {
                        out.push(Segment::DotDot);
                    }
                } else if is_last {
                    out.push(Segment::Empty);
                }
            }
            segment => {
                if out.last() == Some(&Segment::Dot) {
                    out.pop();
                }
                out.push(segment);
            }
        }
    }
    out
}

/// Removes dot-segments from the segments of an absolute path.
///
/// The root has no parent, so leading dot-segments are dropped as well.
fn normalize_absolute<P: PercentEncodingPartial>(segments: Vec<Segment<P>>) -> Vec<Segment<P>> {
    let mut out = normalize(segments);
    let leading = out
        .iter()
        .take_while(|s| matches!(s, Segment::Dot | Segment::DotDot))
        .count();
    out.drain(..leading);
    if let [Segment::Empty] = out[..] {
        out.clear();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{borrow::ToOwned, vec};

    type Seg = Segment<NoOp>;

    const DOT: Seg = Segment::Dot;
    const DOT_DOT: Seg = Segment::DotDot;
    const EMPTY: Seg = Segment::Empty;

    fn v(s: &str) -> Seg {
        Segment::Value(s.to_owned())
    }

    #[test]
    fn normalize_rootless() {
        assert_eq!(
            normalize(vec![v("a"), v("b"), v("c"), DOT, DOT_DOT, DOT_DOT, v("g")]),
            [v("a"), v("g")]
        );
        assert_eq!(normalize(vec![v("a"), DOT_DOT]), [EMPTY]);
        assert_eq!(normalize(vec![DOT, DOT_DOT]), [DOT_DOT]);
        assert_eq!(
            normalize(vec![DOT_DOT, DOT_DOT, v("a")]),
            [DOT_DOT, DOT_DOT, v("a")]
        );
        assert_eq!(normalize(vec![DOT, v("a:b")]), [v("a:b")]);
        assert_eq!(normalize(vec![DOT]), [DOT]);
        assert_eq!(normalize(vec![v("a"), DOT]), [v("a"), EMPTY]);
        assert_eq!(normalize(vec![v("a"), DOT, v("b")]), [v("a"), v("b")]);
        assert_eq!(normalize(vec![DOT, DOT]), [EMPTY]);
        assert_eq!(normalize(vec![v(""), v("a")]), [EMPTY, v("a")]);
        assert_eq!(normalize(vec![v("a"), v(""), DOT_DOT]), [v("a"), EMPTY]);
        assert!(normalize::<NoOp>(vec![]).is_empty());
    }

    #[test]
    fn normalize_absolute_drops_leading_dots() {
        assert_eq!(normalize_absolute(vec![DOT_DOT, v("g")]), [v("g")]);
        assert_eq!(normalize_absolute(vec![DOT, v("g")]), [v("g")]);
        assert!(normalize_absolute(vec![v("a"), DOT_DOT]).is_empty());
        assert!(normalize_absolute(vec![EMPTY]).is_empty());
        assert_eq!(normalize_absolute(vec![v("a"), EMPTY]), [v("a"), EMPTY]);
    }

    #[test]
    fn normalization_is_idempotent() {
        for s in ["a/./b/../../..", "./a:b", "../../x/./", "a/..", "/./..//.", "/a/b/", "./."] {
            let once: Path = Path::parse(s).unwrap();
            let twice = Path::parse(&once.to_string()).unwrap();
            assert_eq!(once, twice, "{s}");
        }
    }

    #[test]
    fn empty_values_read_back() {
        let path: Path = Path::rootless([v(""), v("a")]);
        assert!(path.is_rootless());
        assert_eq!(path.segments(), [EMPTY, v("a")]);
        assert_eq!(path.to_string(), ".//a");
        assert_eq!(Path::parse(&path.to_string()).unwrap(), path);

        let path: Path = Path::absolute([v(""), v("a")]);
        assert_eq!(path.to_string(), "/.//a");
        assert_eq!(Path::parse(&path.to_string()).unwrap(), path);
    }

    #[test]
    fn segment_dots_are_encoded() {
        assert_eq!(Seg::segment(".".to_owned()).encode(), "%2E");
        assert_eq!(Seg::parse("%2E").unwrap(), v("."));
        assert_eq!(Seg::parse("..").unwrap(), Segment::DotDot);
        assert_eq!(
            Seg::parse("a/b").unwrap_err().kind(),
            ParseErrorKind::InvalidSegment
        );
    }

    #[test]
    #[should_panic = "attempt to get value of dot dot segment"]
    fn value_of_dot_dot_panics() {
        let _ = Seg::DotDot.value();
    }

    #[test]
    fn resolve_kinds() {
        let base: Path = Path::parse("/a/b").unwrap();
        let empty: Path = Path::empty();
        assert_eq!(empty.resolve_relative_to(&base), base);

        let abs: Path = Path::parse("/x").unwrap();
        assert_eq!(abs.resolve_relative_to(&base), abs);

        let rel: Path = Path::parse("c").unwrap();
        assert_eq!(rel.resolve_relative_to(&base).to_string(), "/a/c");
        assert_eq!(rel.resolve_relative_to(&empty).to_string(), "c");
        let rootless: Path = Path::parse("x/y").unwrap();
        assert_eq!(rel.resolve_relative_to(&rootless).to_string(), "x/c");
        assert_eq!(rel.resolve_against_empty_authority_path().to_string(), "/c");
    }
}
