//! The host subcomponent of authority.

use crate::{
    error::{ParseError, ParseErrorKind},
    ip::{self, Hexadectet, Octet, V6},
    optional::AugmentedOptional,
    pct_enc::{table, PercentEncoder},
};
use alloc::string::String;
use core::hash::{Hash, Hasher};
use tracing::trace;

/// The [host] subcomponent of authority.
///
/// Hosts are kept in canonical form: registered names are percent-decoded and
/// lower-cased, and IP literals are stored as numbers.
///
/// # Comparison
///
/// A registered name that reads as a dotted-quad IPv4 address is equal to,
/// and hashes the same as, the corresponding [`Ipv4`](Host::Ipv4) host.
///
/// ```
/// use urin::host::Host;
///
/// assert_eq!(Host::registered_name("127.0.0.1"), Host::ipv4(127, 0, 0, 1));
///
/// // Decodes to a registered name, which is still the loopback address.
/// let host = Host::parse("%31%32%37.0.0.1")?;
/// assert!(matches!(host, Host::RegisteredName(_)));
/// assert_eq!(host, Host::loopback_address_ipv4());
/// # Ok::<_, urin::ParseError>(())
/// ```
///
/// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
#[derive(Clone, Debug)]
pub enum Host {
    /// A registered name.
    RegisteredName(RegName),
    /// An IPv4 address.
    Ipv4([Octet; 4]),
    /// An IPv6 address.
    Ipv6([Hexadectet; 8]),
    /// An IPv6 address whose last 32 bits are written as an IPv4 address.
    Ipv6WithIpv4([Hexadectet; 6], [Octet; 4]),
    /// An address of a future IP version.
    IpvFuture(IpvFuture),
}

/// A registered name, percent-decoded and lower-cased.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegName(String);

impl RegName {
    fn new(name: &str) -> RegName {
        RegName(name.to_lowercase())
    }

    /// Returns the decoded name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An IP literal of a future version, `"v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`.
///
/// Both parts are lower-cased.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IpvFuture {
    version: String,
    address: String,
}

impl IpvFuture {
    /// Returns the version, as hexadecimal digits.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// A borrowed view of a host that compares by canonical form.
#[derive(PartialEq, Eq, Hash)]
enum Canonical<'a> {
    RegisteredName(&'a str),
    Ipv4([Octet; 4]),
    Ipv6([Hexadectet; 8]),
    Ipv6WithIpv4([Hexadectet; 6], [Octet; 4]),
    IpvFuture(&'a str, &'a str),
}

pub(crate) const REG_NAME_ENCODER: PercentEncoder = PercentEncoder::new(table::REG_NAME);

fn octets(x: [u8; 4]) -> [Octet; 4] {
    x.map(Octet::new)
}

impl Host {
    /// Creates a registered name host.
    ///
    /// The name is lower-cased, unless it is a dotted-quad IPv4 address, in which
    /// case an [`Ipv4`](Host::Ipv4) host is returned.
    #[must_use]
    pub fn registered_name(name: &str) -> Host {
        AugmentedOptional::from(ipv4_host(name))
            .or_else_get(|| Host::RegisteredName(RegName::new(name)))
    }

    /// Creates an IPv4 host.
    #[must_use]
    pub fn ipv4(a: u8, b: u8, c: u8, d: u8) -> Host {
        Host::Ipv4(octets([a, b, c, d]))
    }

    /// Creates an IPv6 host.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn ipv6(
        a: u16,
        b: u16,
        c: u16,
        d: u16,
        e: u16,
        f: u16,
        g: u16,
        h: u16,
    ) -> Host {
        Host::Ipv6([a, b, c, d, e, f, g, h].map(Hexadectet::new))
    }

    /// Creates an IPv6 host with its last 32 bits given as an IPv4 address.
    #[must_use]
    pub fn ipv6_with_ipv4(hexadectets: [u16; 6], a: u8, b: u8, c: u8, d: u8) -> Host {
        Host::Ipv6WithIpv4(hexadectets.map(Hexadectet::new), octets([a, b, c, d]))
    }

    /// Creates an IP literal host of a future version.
    ///
    /// # Panics
    ///
    /// Panics if the version is not one or more hexadecimal digits, or if the address
    /// is empty or contains a character other than unreserved characters, sub-delims
    /// and `':'`. For a non-panicking variant, use [`try_ipv_future`](Self::try_ipv_future).
    #[must_use]
    pub fn ipv_future(version: &str, address: &str) -> Host {
        match Self::try_ipv_future(version, address) {
            Some(host) => host,
            None => panic!(
                "IPvFuture version must be 1*HEXDIG and address must be \
                 1*( unreserved / sub-delims / \":\" ), \
                 got version {version:?} and address {address:?}"
            ),
        }
    }

    /// Creates an IP literal host of a future version, returning `None` if the
    /// version or address is invalid.
    #[must_use]
    pub fn try_ipv_future(version: &str, address: &str) -> Option<Host> {
        let valid = !version.is_empty()
            && table::HEXDIG.validate(version)
            && !address.is_empty()
            && table::IPV_FUTURE.validate(address);
        valid.then(|| {
            Host::IpvFuture(IpvFuture {
                version: version.to_ascii_lowercase(),
                address: address.to_ascii_lowercase(),
            })
        })
    }

    /// The registered name `localhost`.
    #[must_use]
    pub fn local_host() -> Host {
        Host::RegisteredName(RegName::new("localhost"))
    }

    /// The IPv4 loopback address `127.0.0.1`.
    #[must_use]
    pub fn loopback_address_ipv4() -> Host {
        Host::ipv4(127, 0, 0, 1)
    }

    /// The IPv6 loopback address `::1`.
    #[must_use]
    pub fn loopback_address_ipv6() -> Host {
        Host::ipv6(0, 0, 0, 0, 0, 0, 0, 1)
    }

    /// The IPv6 unspecified address `::`.
    #[must_use]
    pub fn unspecified_address_ipv6() -> Host {
        Host::ipv6(0, 0, 0, 0, 0, 0, 0, 0)
    }

    /// Parses a host from its encoded form.
    ///
    /// The alternatives are tried in the order of RFC 3986: an IPv4 address, then
    /// a bracketed IPv6 or IPvFuture literal, then a registered name.
    ///
    /// # Errors
    ///
    /// Returns `Err` with [`ParseErrorKind::InvalidHost`] if the string matches none
    /// of the alternatives.
    ///
    /// # Examples
    ///
    /// ```
    /// use urin::host::Host;
    ///
    /// assert_eq!(Host::parse("[::1]")?, Host::loopback_address_ipv6());
    /// assert_eq!(Host::parse("Example.COM")?, Host::registered_name("example.com"));
    /// assert!(Host::parse("[1::1::1]").is_err());
    /// # Ok::<_, urin::ParseError>(())
    /// ```
    pub fn parse(s: &str) -> Result<Host, ParseError> {
        let host = match s.strip_prefix('[').and_then(|rem| rem.strip_suffix(']')) {
            Some(literal) => {
                let v6 = ipv6_host(s, literal);
                trace!(host = s, matched = v6.is_present(), "tried IPv6 literal");
                v6.or(|| ipv_future_host(s, literal))
            }
            None => AugmentedOptional::from(ipv4_host(s)).or(|| reg_name_host(s)),
        };
        host.or_else_throw(|e| e.with_kind(ParseErrorKind::InvalidHost))
    }

    fn canonical(&self) -> Canonical<'_> {
        match self {
            Host::RegisteredName(name) => match ip::parse_v4(name.as_str().as_bytes()) {
                Some(x) => Canonical::Ipv4(octets(x)),
                None => Canonical::RegisteredName(name.as_str()),
            },
            Host::Ipv4(x) => Canonical::Ipv4(*x),
            Host::Ipv6(x) => Canonical::Ipv6(*x),
            Host::Ipv6WithIpv4(x, y) => Canonical::Ipv6WithIpv4(*x, *y),
            Host::IpvFuture(x) => Canonical::IpvFuture(x.version(), x.address()),
        }
    }
}

fn invalid(s: &str) -> ParseError {
    ParseError::new(ParseErrorKind::InvalidHost, s)
}

fn ipv4_host(s: &str) -> Result<Host, ParseError> {
    ip::parse_v4(s.as_bytes())
        .map(|x| Host::Ipv4(octets(x)))
        .ok_or_else(|| invalid(s))
}

fn ipv6_host(s: &str, literal: &str) -> AugmentedOptional<Host> {
    match ip::parse_v6(literal.as_bytes()) {
        Some(V6::Plain(x)) => AugmentedOptional::of(Host::Ipv6(x.map(Hexadectet::new))),
        Some(V6::WithV4(x, y)) => {
            AugmentedOptional::of(Host::Ipv6WithIpv4(x.map(Hexadectet::new), octets(y)))
        }
        None => AugmentedOptional::empty(invalid(s)),
    }
}

// IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )
fn ipv_future_host(s: &str, literal: &str) -> AugmentedOptional<Host> {
    let split = literal
        .strip_prefix(['v', 'V'])
        .and_then(|rem| rem.split_once('.'))
        .ok_or_else(|| invalid(s));
    AugmentedOptional::from(split).flat_map(|(version, address)| {
        match Host::try_ipv_future(version, address) {
            Some(host) => AugmentedOptional::of(host),
            None => {
                trace!(host = s, "rejected IPvFuture literal");
                AugmentedOptional::empty(invalid(s))
            }
        }
    })
}

fn reg_name_host(s: &str) -> AugmentedOptional<Host> {
    AugmentedOptional::from(REG_NAME_ENCODER.decode(s))
        .map(|name| Host::RegisteredName(RegName::new(&name)))
}

impl PartialEq for Host {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Host {}

impl Hash for Host {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}
