//! URI components.

use crate::{
    error::{ParseError, ParseErrorKind},
    host::Host,
    pct_enc::{partial::NoOp, table, PercentEncoder, PercentEncoding, PercentEncodingPartial},
};
use alloc::{
    borrow::ToOwned,
    string::{String, ToString},
};
use ref_cast::{ref_cast_custom, RefCastCustom};

/// A validated [scheme] name.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
///
/// # Comparison
///
/// `SchemeName`s are compared case-insensitively.
///
/// # Examples
///
/// ```
/// use urin::component::SchemeName;
///
/// assert_eq!(SchemeName::new("HTTP"), SchemeName::new("http"));
/// assert!(SchemeName::new("1http").is_none());
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct SchemeName {
    inner: str,
}

impl SchemeName {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(name: &str) -> &SchemeName;

    /// Converts a string slice to `&SchemeName`.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid scheme name according to
    /// [Section 3.1 of RFC 3986][scheme]. For a non-panicking variant,
    /// use [`new`](Self::new).
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    #[inline]
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &SchemeName {
        match Self::new(s) {
            Some(name) => name,
            None => panic!("invalid scheme name"),
        }
    }

    /// Converts a string slice to `&SchemeName`, returning `None` if the conversion fails.
    #[inline]
    #[must_use]
    pub const fn new(s: &str) -> Option<&SchemeName> {
        match first_invalid_scheme_char(s) {
            None => Some(SchemeName::new_validated(s)),
            Some(_) => None,
        }
    }

    /// Returns the scheme name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

/// Returns the index of the first character that is not allowed at its position
/// in a scheme name, or `Some(0)` for an empty name.
pub(crate) const fn first_invalid_scheme_char(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_alphabetic() {
        return Some(0);
    }
    let mut i = 1;
    while i < bytes.len() {
        if !table::SCHEME.allows_ascii(bytes[i]) {
            return Some(i);
        }
        i += 1;
    }
    None
}

impl PartialEq for SchemeName {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for SchemeName {}

/// The [port] subcomponent of authority.
///
/// A port is a string of decimal digits, normalized by stripping leading zeros.
/// It may be empty, as in `http://example.com:/`.
///
/// # Examples
///
/// ```
/// use urin::component::Port;
///
/// assert_eq!(Port::parse("0080")?, Port::new(80));
/// assert_eq!(Port::parse("")?.as_u16(), None);
/// assert_eq!(Port::parse("99999")?.as_u16(), None);
/// # Ok::<_, urin::ParseError>(())
/// ```
///
/// [port]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Port {
    digits: String,
}

impl Port {
    /// Creates a port from a number.
    #[must_use]
    pub fn new(port: u16) -> Port {
        Port {
            digits: port.to_string(),
        }
    }

    /// Parses a port from a string of digits.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string contains a character other than a decimal digit.
    pub fn parse(s: &str) -> Result<Port, ParseError> {
        if let Some(i) = s.bytes().position(|x| !x.is_ascii_digit()) {
            return Err(ParseError::at(ParseErrorKind::InvalidPort, i, s));
        }
        let trimmed = s.trim_start_matches('0');
        let digits = if trimmed.is_empty() && !s.is_empty() {
            "0"
        } else {
            trimmed
        };
        Ok(Port {
            digits: digits.to_owned(),
        })
    }

    /// Returns the port as a string of digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Converts the port to `u16`.
    ///
    /// Returns `None` if the port is empty or does not fit in `u16`.
    #[must_use]
    pub fn as_u16(&self) -> Option<u16> {
        self.digits.parse().ok()
    }
}

pub(crate) const USERINFO_ENCODER: PercentEncoder = PercentEncoder::new(table::USERINFO);

/// The [userinfo] subcomponent of authority.
///
/// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserInfo {
    value: String,
}

impl UserInfo {
    /// Creates user information from its decoded value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> UserInfo {
        UserInfo {
            value: value.into(),
        }
    }

    /// Returns the decoded value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parses user information from its encoded form.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is not a valid percent-encoded `userinfo`.
    pub fn parse(s: &str) -> Result<UserInfo, ParseError> {
        USERINFO_ENCODER
            .decode(s)
            .map(UserInfo::new)
            .map_err(|e| e.with_kind(ParseErrorKind::InvalidUserInfo))
    }
}

/// An [authority] component.
///
/// # Examples
///
/// ```
/// use urin::{
///     component::{Authority, Port, UserInfo},
///     host::Host,
/// };
///
/// let auth = Authority::parse("user@Example.com:8080")?;
/// assert_eq!(auth.user_info_opt(), Some(&UserInfo::new("user")));
/// assert_eq!(auth.host(), &Host::registered_name("example.com"));
/// assert_eq!(auth.port_opt(), Some(&Port::new(8080)));
/// assert_eq!(auth.to_string(), "user@example.com:8080");
/// # Ok::<_, urin::ParseError>(())
/// ```
///
/// [authority]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Authority {
    user_info: Option<UserInfo>,
    host: Host,
    port: Option<Port>,
}

impl Authority {
    /// Creates an authority with the given host only.
    #[must_use]
    pub fn new(host: Host) -> Authority {
        Authority {
            user_info: None,
            host,
            port: None,
        }
    }

    /// Returns the same authority with the user information replaced.
    #[must_use]
    pub fn with_user_info(self, user_info: UserInfo) -> Authority {
        Authority {
            user_info: Some(user_info),
            ..self
        }
    }

    /// Returns the same authority with the port replaced.
    #[must_use]
    pub fn with_port(self, port: Port) -> Authority {
        Authority {
            port: Some(port),
            ..self
        }
    }

    /// Checks whether user information is present.
    #[must_use]
    pub fn has_user_info(&self) -> bool {
        self.user_info.is_some()
    }

    /// Returns the user information.
    ///
    /// # Panics
    ///
    /// Panics if user information is absent. For a non-panicking variant,
    /// use [`user_info_opt`](Self::user_info_opt).
    #[must_use]
    pub fn user_info(&self) -> &UserInfo {
        match &self.user_info {
            Some(user_info) => user_info,
            None => panic!("attempt to get user info from an authority that does not have one"),
        }
    }

    /// Returns the optional user information.
    #[must_use]
    pub fn user_info_opt(&self) -> Option<&UserInfo> {
        self.user_info.as_ref()
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Checks whether a port is present.
    #[must_use]
    pub fn has_port(&self) -> bool {
        self.port.is_some()
    }

    /// Returns the port.
    ///
    /// # Panics
    ///
    /// Panics if the port is absent. For a non-panicking variant,
    /// use [`port_opt`](Self::port_opt).
    #[must_use]
    pub fn port(&self) -> &Port {
        match &self.port {
            Some(port) => port,
            None => panic!("attempt to get port from an authority that does not have one"),
        }
    }

    /// Returns the optional port.
    #[must_use]
    pub fn port_opt(&self) -> Option<&Port> {
        self.port.as_ref()
    }

    /// Returns the same authority with the port removed if it equals `port`.
    #[must_use]
    pub fn remove_port(&self, port: &Port) -> Authority {
        Authority {
            user_info: self.user_info.clone(),
            host: self.host.clone(),
            port: self.port.clone().filter(|p| p != port),
        }
    }

    /// Parses an authority from its encoded form.
    ///
    /// # Errors
    ///
    /// Returns `Err` naming the subcomponent that failed to parse.
    pub fn parse(s: &str) -> Result<Authority, ParseError> {
        let (user_info, rem) = match s.rfind('@') {
            Some(i) => (Some(UserInfo::parse(&s[..i])?), &s[i + 1..]),
            None => (None, s),
        };

        let (host, port) = if rem.starts_with('[') {
            match rem.rfind(']') {
                Some(i) => {
                    let (host, after) = rem.split_at(i + 1);
                    match after.strip_prefix(':') {
                        Some(port) => (host, Some(port)),
                        None if after.is_empty() => (host, None),
                        None => return Err(ParseError::new(ParseErrorKind::InvalidHost, rem)),
                    }
                }
                None => return Err(ParseError::new(ParseErrorKind::InvalidHost, rem)),
            }
        } else {
            match rem.split_once(':') {
                Some((host, port)) => (host, Some(port)),
                None => (rem, None),
            }
        };

        Ok(Authority {
            user_info,
            host: Host::parse(host)?,
            port: port.map(Port::parse).transpose()?,
        })
    }
}

/// A [query] component.
///
/// The type parameter is the [partial](crate::pct_enc::partial) that encodes the
/// query's value on top of the base `query` encoder.
///
/// [query]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.4
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Query<Q: PercentEncodingPartial = NoOp> {
    value: Q::Value,
}

impl<Q: PercentEncodingPartial> Query<Q> {
    /// Creates a query from its value.
    #[must_use]
    pub fn new(value: Q::Value) -> Self {
        Self { value }
    }

    /// Returns the value of the query.
    #[must_use]
    pub fn value(&self) -> &Q::Value {
        &self.value
    }

    pub(crate) fn encoding() -> Q::Encoding {
        Q::apply(PercentEncoder::new(table::QUERY))
    }

    /// Parses a query from its encoded form, without the leading `'?'`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is not a valid encoding of a query value.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        Self::encoding()
            .decode(s)
            .map(Self::new)
            .map_err(|e| invalid_component(e, ParseErrorKind::InvalidQuery))
    }
}

/// A [fragment] component.
///
/// The type parameter is the [partial](crate::pct_enc::partial) that encodes the
/// fragment's value on top of the base `fragment` encoder.
///
/// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.5
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fragment<F: PercentEncodingPartial = NoOp> {
    value: F::Value,
}

impl<F: PercentEncodingPartial> Fragment<F> {
    /// Creates a fragment from its value.
    #[must_use]
    pub fn new(value: F::Value) -> Self {
        Self { value }
    }

    /// Returns the value of the fragment.
    #[must_use]
    pub fn value(&self) -> &F::Value {
        &self.value
    }

    pub(crate) fn encoding() -> F::Encoding {
        F::apply(PercentEncoder::new(table::FRAGMENT))
    }

    /// Parses a fragment from its encoded form, without the leading `'#'`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is not a valid encoding of a fragment value.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        Self::encoding()
            .decode(s)
            .map(Self::new)
            .map_err(|e| invalid_component(e, ParseErrorKind::InvalidFragment))
    }
}

/// Reports a failed decoding as an invalid component, unless a transformer
/// already rejected the value.
pub(crate) fn invalid_component(e: ParseError, kind: ParseErrorKind) -> ParseError {
    if e.kind() == ParseErrorKind::InvalidValue {
        e
    } else {
        e.with_kind(kind)
    }
}
