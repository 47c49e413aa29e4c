use crate::{
    component::{Authority, Fragment, Query, SchemeName},
    error::ParseErrorKind,
    path::Path,
    pct_enc::PercentEncodingPartial,
    reference::{RelativeReference, Urin, UrinReference},
    scheme::Scheme,
};
use tracing::trace;

type Result<T> = core::result::Result<T, crate::error::ParseError>;

/// Returns immediately with an error echoing the input.
macro_rules! err {
    ($kind:ident, $input:expr) => {
        return Err(crate::error::ParseError::new(ParseErrorKind::$kind, $input))
    };
}

/// The components of a URI reference, as matched by the regular expression
/// in [Appendix B of RFC 3986][split]:
///
/// ```text
/// ^(([^:/?#]+):)?(//([^/?#]*))?([^?#]*)(\?([^#]*))?(#(.*))?
/// ```
///
/// Every string matches, so that splitting never fails. The components are
/// validated afterwards by their own parsers.
///
/// [split]: https://datatracker.ietf.org/doc/html/rfc3986#appendix-B
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Split<'a> {
    scheme: Option<&'a str>,
    authority: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> Split<'a> {
    fn new(s: &'a str) -> Self {
        let (rem, fragment) = match s.split_once('#') {
            Some((rem, fragment)) => (rem, Some(fragment)),
            None => (s, None),
        };
        let (rem, query) = match rem.split_once('?') {
            Some((rem, query)) => (rem, Some(query)),
            None => (rem, None),
        };
        let (scheme, rem) = match rem.find([':', '/']) {
            Some(i) if i > 0 && rem.as_bytes()[i] == b':' => (Some(&rem[..i]), &rem[i + 1..]),
            _ => (None, rem),
        };
        let (authority, path) = match rem.strip_prefix("//") {
            Some(rem) => {
                let i = rem.find('/').unwrap_or(rem.len());
                (Some(&rem[..i]), &rem[i..])
            }
            None => (None, rem),
        };
        Split {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }
}

/// The parts shared by URIs and relative references.
struct Parts<S: PercentEncodingPartial, Q: PercentEncodingPartial, F: PercentEncodingPartial> {
    authority: Option<Authority>,
    path: Path<S>,
    query: Option<Query<Q>>,
    fragment: Option<Fragment<F>>,
}

fn parse_parts<S, Q, F>(split: &Split<'_>) -> Result<Parts<S, Q, F>>
where
    S: PercentEncodingPartial,
    Q: PercentEncodingPartial,
    F: PercentEncodingPartial,
{
    let authority = split.authority.map(Authority::parse).transpose()?;
    // After an authority, the path is either empty or starts with '/'.
    Ok(Parts {
        authority,
        path: Path::parse(split.path)?,
        query: split.query.map(Query::parse).transpose()?,
        fragment: split.fragment.map(Fragment::parse).transpose()?,
    })
}

pub(crate) fn parse_urin<S, Q, F>(
    scheme: Option<&Scheme<S, Q, F>>,
    s: &str,
) -> Result<Urin<S, Q, F>>
where
    S: PercentEncodingPartial,
    Q: PercentEncodingPartial,
    F: PercentEncodingPartial,
{
    let split = Split::new(s);
    trace!(?split, "split URI");

    let Some(name) = split.scheme else {
        err!(InvalidUri, s);
    };
    let Some(name) = SchemeName::new(name) else {
        trace!(scheme = name, "rejected scheme name");
        err!(InvalidScheme, name);
    };
    let scheme = match scheme {
        Some(scheme) => scheme.for_name(name),
        None => Scheme::generic(name),
    };

    let parts = parse_parts(&split)?;
    Ok(scheme.make_urin(parts.authority, parts.path, parts.query, parts.fragment))
}

pub(crate) fn parse_relative_reference<S, Q, F>(
    scheme: Option<&Scheme<S, Q, F>>,
    s: &str,
) -> Result<RelativeReference<S, Q, F>>
where
    S: PercentEncodingPartial,
    Q: PercentEncodingPartial,
    F: PercentEncodingPartial,
{
    let split = Split::new(s);
    trace!(?split, "split relative reference");

    if split.scheme.is_some() {
        err!(InvalidRelativeReference, s);
    }

    let Parts {
        authority,
        path,
        query,
        fragment,
    } = parse_parts(&split)?;
    Ok(match scheme {
        Some(scheme) => scheme.make_relative_reference(authority, path, query, fragment),
        None => RelativeReference::from_parts(authority, path, query, fragment),
    })
}

pub(crate) fn parse_urin_reference<S, Q, F>(
    scheme: Option<&Scheme<S, Q, F>>,
    s: &str,
) -> Result<UrinReference<S, Q, F>>
where
    S: PercentEncodingPartial,
    Q: PercentEncodingPartial,
    F: PercentEncodingPartial,
{
    match Split::new(s).scheme {
        // A colon in the first segment rules out a relative reference.
        Some(_) => parse_urin(scheme, s).map(UrinReference::Urin),
        None => parse_relative_reference(scheme, s).map(UrinReference::RelativeReference),
    }
}
