//! URIs, relative references and their resolution.

use crate::{
    component::{Authority, Fragment, Query},
    error::ParseError,
    parser,
    path::Path,
    pct_enc::{partial::NoOp, PercentEncodingPartial},
    scheme::{check_path, Scheme},
};
use core::str::FromStr;

/// A [URI], which is named `Urin` to set it apart from other URI types.
///
/// A `Urin` is made by a [`Scheme`] or parsed. When an authority is present,
/// the path is either empty or absolute.
///
/// # Examples
///
/// ```
/// use urin::{Urin, UrinReference};
///
/// let base: Urin = "http://www.example.com/child-1".parse()?;
/// let reference: UrinReference = "../child-2?extra-query".parse()?;
/// assert_eq!(
///     base.resolve(&reference).to_string(),
///     "http://www.example.com/child-2?extra-query"
/// );
/// # Ok::<_, urin::ParseError>(())
/// ```
///
/// [URI]: https://datatracker.ietf.org/doc/html/rfc3986#section-3
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Urin<
    S: PercentEncodingPartial = NoOp,
    Q: PercentEncodingPartial = NoOp,
    F: PercentEncodingPartial = NoOp,
> {
    scheme: Scheme<S, Q, F>,
    authority: Option<Authority>,
    path: Path<S>,
    query: Option<Query<Q>>,
    fragment: Option<Fragment<F>>,
}

/// A [relative reference].
///
/// A relative reference is made by a [`Scheme`] or parsed. When an authority is
/// present, the path is either empty or absolute.
///
/// [relative reference]: https://datatracker.ietf.org/doc/html/rfc3986#section-4.2
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RelativeReference<
    S: PercentEncodingPartial = NoOp,
    Q: PercentEncodingPartial = NoOp,
    F: PercentEncodingPartial = NoOp,
> {
    authority: Option<Authority>,
    path: Path<S>,
    query: Option<Query<Q>>,
    fragment: Option<Fragment<F>>,
}

/// A [URI reference], i.e., either a URI or a relative reference.
///
/// [URI reference]: https://datatracker.ietf.org/doc/html/rfc3986#section-4.1
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum UrinReference<
    S: PercentEncodingPartial = NoOp,
    Q: PercentEncodingPartial = NoOp,
    F: PercentEncodingPartial = NoOp,
> {
    /// A URI.
    Urin(Urin<S, Q, F>),
    /// A relative reference.
    RelativeReference(RelativeReference<S, Q, F>),
}

macro_rules! impl_accessors {
    () => {
        /// Checks whether an authority is present.
        #[must_use]
        pub fn has_authority(&self) -> bool {
            self.authority.is_some()
        }

        /// Returns the authority.
        ///
        /// # Panics
        ///
        /// Panics if the authority is absent. For a non-panicking variant,
        /// use [`authority_opt`](Self::authority_opt).
        #[must_use]
        pub fn authority(&self) -> &Authority {
            match &self.authority {
                Some(authority) => authority,
                None => panic!("attempt to get authority from a reference without an authority"),
            }
        }

        /// Returns the optional authority.
        #[must_use]
        pub fn authority_opt(&self) -> Option<&Authority> {
            self.authority.as_ref()
        }

        /// Returns the path.
        #[must_use]
        pub fn path(&self) -> &Path<S> {
            &self.path
        }

        /// Checks whether a query is present.
        #[must_use]
        pub fn has_query(&self) -> bool {
            self.query.is_some()
        }

        /// Returns the query.
        ///
        /// # Panics
        ///
        /// Panics if the query is absent. For a non-panicking variant,
        /// use [`query_opt`](Self::query_opt).
        #[must_use]
        pub fn query(&self) -> &Query<Q> {
            match &self.query {
                Some(query) => query,
                None => panic!("attempt to get query from a reference without a query"),
            }
        }

        /// Returns the optional query.
        #[must_use]
        pub fn query_opt(&self) -> Option<&Query<Q>> {
            self.query.as_ref()
        }

        /// Checks whether a fragment is present.
        #[must_use]
        pub fn has_fragment(&self) -> bool {
            self.fragment.is_some()
        }

        /// Returns the fragment.
        ///
        /// # Panics
        ///
        /// Panics if the fragment is absent. For a non-panicking variant,
        /// use [`fragment_opt`](Self::fragment_opt).
        #[must_use]
        pub fn fragment(&self) -> &Fragment<F> {
            match &self.fragment {
                Some(fragment) => fragment,
                None => panic!("attempt to get fragment from a reference without a fragment"),
            }
        }

        /// Returns the optional fragment.
        #[must_use]
        pub fn fragment_opt(&self) -> Option<&Fragment<F>> {
            self.fragment.as_ref()
        }
    };
}

impl<S, Q, F> Urin<S, Q, F>
where
    S: PercentEncodingPartial,
    Q: PercentEncodingPartial,
    F: PercentEncodingPartial,
{
    pub(crate) fn from_parts(
        scheme: Scheme<S, Q, F>,
        authority: Option<Authority>,
        path: Path<S>,
        query: Option<Query<Q>>,
        fragment: Option<Fragment<F>>,
    ) -> Self {
        Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }

    /// Returns the scheme, which has no default port.
    #[must_use]
    pub fn scheme(&self) -> &Scheme<S, Q, F> {
        &self.scheme
    }

    impl_accessors!();

    /// Returns the same URI with the path replaced.
    ///
    /// # Panics
    ///
    /// Panics if an authority is present and the new path is rootless.
    #[must_use]
    pub fn with_path(&self, path: Path<S>) -> Self {
        self.scheme.urin(
            self.authority.clone(),
            path,
            self.query.clone(),
            self.fragment.clone(),
        )
    }

    /// Resolves a URI reference against this URI, as in
    /// [Section 5.2 of RFC 3986][resolve].
    ///
    /// A URI resolves to itself. The fragment of the result always comes from
    /// the reference.
    ///
    /// [resolve]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2
    #[must_use]
    pub fn resolve(&self, reference: &UrinReference<S, Q, F>) -> Urin<S, Q, F> {
        match reference {
            UrinReference::Urin(urin) => urin.clone(),
            UrinReference::RelativeReference(rel) => self.resolve_relative(rel),
        }
    }

    /// Resolves a relative reference against this URI.
    #[must_use]
    pub fn resolve_relative(&self, reference: &RelativeReference<S, Q, F>) -> Urin<S, Q, F> {
        let (authority, path, query) = if reference.authority.is_some() {
            (
                reference.authority.clone(),
                reference.path.clone(),
                reference.query.clone(),
            )
        } else if reference.path.is_empty() {
            (
                self.authority.clone(),
                self.path.clone(),
                reference.query.clone().or_else(|| self.query.clone()),
            )
        } else {
            let path = if self.authority.is_some() && self.path.is_empty() {
                reference.path.resolve_against_empty_authority_path()
            } else {
                reference.path.resolve_relative_to(&self.path)
            };
            (self.authority.clone(), path, reference.query.clone())
        };

        Self::from_parts(
            self.scheme.clone(),
            authority,
            path,
            query,
            reference.fragment.clone(),
        )
    }
}

impl<S, Q, F> RelativeReference<S, Q, F>
where
    S: PercentEncodingPartial,
    Q: PercentEncodingPartial,
    F: PercentEncodingPartial,
{
    pub(crate) fn from_parts(
        authority: Option<Authority>,
        path: Path<S>,
        query: Option<Query<Q>>,
        fragment: Option<Fragment<F>>,
    ) -> Self {
        Self {
            authority,
            path,
            query,
            fragment,
        }
    }

    impl_accessors!();

    /// Returns the same relative reference with the path replaced.
    ///
    /// # Panics
    ///
    /// Panics if an authority is present and the new path is rootless.
    #[must_use]
    pub fn with_path(&self, path: Path<S>) -> Self {
        check_path(self.authority.as_ref(), &path);
        Self {
            path,
            ..self.clone()
        }
    }
}

impl<S, Q, F> UrinReference<S, Q, F>
where
    S: PercentEncodingPartial,
    Q: PercentEncodingPartial,
    F: PercentEncodingPartial,
{
    /// Checks whether this is a URI.
    #[must_use]
    pub fn is_urin(&self) -> bool {
        matches!(self, UrinReference::Urin(_))
    }

    /// Checks whether this is a relative reference.
    #[must_use]
    pub fn is_relative_reference(&self) -> bool {
        matches!(self, UrinReference::RelativeReference(_))
    }

    /// Returns the URI, if this is one.
    #[must_use]
    pub fn as_urin(&self) -> Option<&Urin<S, Q, F>> {
        match self {
            UrinReference::Urin(urin) => Some(urin),
            UrinReference::RelativeReference(_) => None,
        }
    }

    /// Returns the relative reference, if this is one.
    #[must_use]
    pub fn as_relative_reference(&self) -> Option<&RelativeReference<S, Q, F>> {
        match self {
            UrinReference::Urin(_) => None,
            UrinReference::RelativeReference(rel) => Some(rel),
        }
    }
}

impl<S, Q, F> From<Urin<S, Q, F>> for UrinReference<S, Q, F>
where
    S: PercentEncodingPartial,
    Q: PercentEncodingPartial,
    F: PercentEncodingPartial,
{
    fn from(urin: Urin<S, Q, F>) -> Self {
        UrinReference::Urin(urin)
    }
}

impl<S, Q, F> From<RelativeReference<S, Q, F>> for UrinReference<S, Q, F>
where
    S: PercentEncodingPartial,
    Q: PercentEncodingPartial,
    F: PercentEncodingPartial,
{
    fn from(rel: RelativeReference<S, Q, F>) -> Self {
        UrinReference::RelativeReference(rel)
    }
}

macro_rules! impl_parse {
    ($($Ty:ident => $parse:ident, $name:literal;)*) => {
        $(
            impl<S, Q, F> FromStr for $Ty<S, Q, F>
            where
                S: PercentEncodingPartial,
                Q: PercentEncodingPartial,
                F: PercentEncodingPartial,
            {
                type Err = ParseError;

                /// Parses with a scheme of the parsed name and no default port.
                fn from_str(s: &str) -> Result<Self, ParseError> {
                    parser::$parse(None, s)
                }
            }

            #[cfg(feature = "serde")]
            impl<S, Q, F> serde::Serialize for $Ty<S, Q, F>
            where
                S: PercentEncodingPartial,
                Q: PercentEncodingPartial,
                F: PercentEncodingPartial,
            {
                fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
                where
                    Ser: serde::Serializer,
                {
                    serializer.collect_str(self)
                }
            }

            #[cfg(feature = "serde")]
            impl<'de, S, Q, F> serde::Deserialize<'de> for $Ty<S, Q, F>
            where
                S: PercentEncodingPartial,
                Q: PercentEncodingPartial,
                F: PercentEncodingPartial,
            {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let s: alloc::string::String =
                        serde::Deserialize::deserialize(deserializer)?;
                    parser::$parse(None, &s).map_err(|e| {
                        serde::de::Error::custom(format_args!(
                            "failed to parse {s:?} as {}: {e}",
                            $name
                        ))
                    })
                }
            }
        )*
    };
}

impl_parse! {
    Urin => parse_urin, "URI";
    RelativeReference => parse_relative_reference, "relative reference";
    UrinReference => parse_urin_reference, "URI reference";
}
