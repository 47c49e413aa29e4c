//! Schemes and the factories of URIs and relative references.

use crate::{
    component::{first_invalid_scheme_char, Authority, Fragment, Port, Query, SchemeName},
    error::ParseError,
    parser,
    path::Path,
    pct_enc::{partial::NoOp, PercentEncodingPartial},
    reference::{RelativeReference, Urin, UrinReference},
};
use alloc::string::String;
use core::marker::PhantomData;

/// A [scheme], the factory of URIs and relative references.
///
/// A scheme has a name and an optional default port, which is elided from the
/// authority of every URI the scheme makes. Its type parameters are the
/// [partials](crate::pct_enc::partial) that encode the values of path segments,
/// queries and fragments respectively.
///
/// # Examples
///
/// ```
/// use urin::{
///     component::{Authority, Port},
///     host::Host,
///     path::Path,
///     Scheme,
/// };
///
/// let http: Scheme = Scheme::with_default_port("HTTP", Port::new(80));
/// let urin = http.urin(
///     Some(Authority::new(Host::registered_name("example.com")).with_port(Port::new(80))),
///     Path::parse("/index.html")?,
///     None,
///     None,
/// );
/// assert_eq!(urin.to_string(), "http://example.com/index.html");
/// assert_eq!(urin, http.parse_urin("http://example.com:80/index.html")?);
/// # Ok::<_, urin::ParseError>(())
/// ```
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Scheme<
    S: PercentEncodingPartial = NoOp,
    Q: PercentEncodingPartial = NoOp,
    F: PercentEncodingPartial = NoOp,
> {
    name: String,
    default_port: Option<Port>,
    marker: PhantomData<(S, Q, F)>,
}

impl<S, Q, F> Scheme<S, Q, F>
where
    S: PercentEncodingPartial,
    Q: PercentEncodingPartial,
    F: PercentEncodingPartial,
{
    /// Creates a scheme with no default port.
    ///
    /// The name is lower-cased.
    ///
    /// # Panics
    ///
    /// Panics if the name is not `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    /// For a non-panicking variant, use [`try_new`](Self::try_new).
    #[must_use]
    pub fn new(name: &str) -> Self {
        match first_invalid_scheme_char(name) {
            None => Self::new_validated(name, None),
            Some(_) if name.is_empty() => panic!("scheme name must not be empty"),
            Some(0) => panic!("character 0 of scheme name {name:?} must be ALPHA"),
            Some(i) => panic!(
                "character {i} of scheme name {name:?} must be \
                 ALPHA / DIGIT / \"+\" / \"-\" / \".\""
            ),
        }
    }

    /// Creates a scheme with no default port, returning `None` if the name is invalid.
    #[must_use]
    pub fn try_new(name: &str) -> Option<Self> {
        SchemeName::new(name).map(|name| Self::new_validated(name.as_str(), None))
    }

    /// Creates a scheme with a default port.
    ///
    /// # Panics
    ///
    /// Panics if the name is invalid, as [`new`](Self::new) does.
    #[must_use]
    pub fn with_default_port(name: &str, default_port: Port) -> Self {
        Self {
            default_port: Some(default_port),
            ..Self::new(name)
        }
    }

    fn new_validated(name: &str, default_port: Option<Port>) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            default_port,
            marker: PhantomData,
        }
    }

    /// Returns the lower-cased name of the scheme.
    #[must_use]
    pub fn name(&self) -> &SchemeName {
        SchemeName::new_validated(&self.name)
    }

    /// Returns the default port, if any.
    #[must_use]
    pub fn default_port_opt(&self) -> Option<&Port> {
        self.default_port.as_ref()
    }

    /// Returns the authority with its port removed if it equals the default port.
    #[must_use]
    pub fn normalise(&self, authority: Authority) -> Authority {
        match &self.default_port {
            Some(port) => authority.remove_port(port),
            None => authority,
        }
    }

    /// Returns the same scheme without a default port.
    #[must_use]
    pub fn remove_default_port(&self) -> Self {
        Self::new_validated(&self.name, None)
    }

    /// Returns this scheme if `name` is its name, or else a scheme of that name
    /// with no default port.
    pub(crate) fn for_name(&self, name: &SchemeName) -> Self {
        if self.name() == name {
            self.clone()
        } else {
            Self::generic(name)
        }
    }

    pub(crate) fn generic(name: &SchemeName) -> Self {
        Self::new_validated(name.as_str(), None)
    }

    /// Creates a URI of this scheme.
    ///
    /// The default port is removed from the authority, and the scheme of the URI
    /// has no default port.
    ///
    /// # Panics
    ///
    /// Panics if an authority is given with a rootless path.
    #[must_use]
    pub fn urin(
        &self,
        authority: Option<Authority>,
        path: Path<S>,
        query: Option<Query<Q>>,
        fragment: Option<Fragment<F>>,
    ) -> Urin<S, Q, F> {
        check_path(authority.as_ref(), &path);
        self.make_urin(authority, path, query, fragment)
    }

    pub(crate) fn make_urin(
        &self,
        authority: Option<Authority>,
        path: Path<S>,
        query: Option<Query<Q>>,
        fragment: Option<Fragment<F>>,
    ) -> Urin<S, Q, F> {
        Urin::from_parts(
            self.remove_default_port(),
            authority.map(|a| self.normalise(a)),
            path,
            query,
            fragment,
        )
    }

    /// Creates a relative reference whose path, query and fragment are encoded as
    /// this scheme encodes them.
    ///
    /// The default port is removed from the authority.
    ///
    /// # Panics
    ///
    /// Panics if an authority is given with a rootless path.
    #[must_use]
    pub fn relative_reference(
        &self,
        authority: Option<Authority>,
        path: Path<S>,
        query: Option<Query<Q>>,
        fragment: Option<Fragment<F>>,
    ) -> RelativeReference<S, Q, F> {
        check_path(authority.as_ref(), &path);
        self.make_relative_reference(authority, path, query, fragment)
    }

    pub(crate) fn make_relative_reference(
        &self,
        authority: Option<Authority>,
        path: Path<S>,
        query: Option<Query<Q>>,
        fragment: Option<Fragment<F>>,
    ) -> RelativeReference<S, Q, F> {
        RelativeReference::from_parts(authority.map(|a| self.normalise(a)), path, query, fragment)
    }

    /// Parses a URI.
    ///
    /// If the scheme name of the URI is the name of this scheme, the default port of
    /// this scheme is removed from the URI. Otherwise a scheme of that name with no
    /// default port is used.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is not a URI or if a component fails to parse.
    pub fn parse_urin(&self, s: &str) -> Result<Urin<S, Q, F>, ParseError> {
        parser::parse_urin(Some(self), s)
    }

    /// Parses a relative reference.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is not a relative reference or if a component
    /// fails to parse.
    pub fn parse_relative_reference(
        &self,
        s: &str,
    ) -> Result<RelativeReference<S, Q, F>, ParseError> {
        parser::parse_relative_reference(Some(self), s)
    }

    /// Parses a URI or a relative reference.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is neither a URI nor a relative reference, or if
    /// a component fails to parse.
    pub fn parse_urin_reference(&self, s: &str) -> Result<UrinReference<S, Q, F>, ParseError> {
        parser::parse_urin_reference(Some(self), s)
    }
}

pub(crate) fn check_path<P: PercentEncodingPartial>(authority: Option<&Authority>, path: &Path<P>) {
    if authority.is_some() && path.is_rootless() {
        panic!("when authority is present, path should either be empty or start with '/'");
    }
}
