use crate::{
    component::{Authority, Fragment, Port, Query, SchemeName, UserInfo, USERINFO_ENCODER},
    error::{ParseError, ParseErrorKind},
    host::{Host, REG_NAME_ENCODER},
    ip::{longest_zero_run, Hexadectet, Octet},
    path::{Path, PrefixWithDotSegment, Segment},
    pct_enc::{PercentEncoding, PercentEncodingPartial},
    reference::{RelativeReference, Urin, UrinReference},
    scheme::Scheme,
};
use core::fmt;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::InvalidOctet => "invalid percent-encoded octet",
            ParseErrorKind::UnexpectedChar => "unexpected character",
            ParseErrorKind::InvalidUtf8 => "percent-encoded octets are not valid UTF-8",
            ParseErrorKind::InvalidScheme => "invalid scheme",
            ParseErrorKind::InvalidUserInfo => "invalid user info",
            ParseErrorKind::InvalidHost => "invalid host",
            ParseErrorKind::InvalidPort => "invalid port",
            ParseErrorKind::InvalidOctetValue => "invalid octet",
            ParseErrorKind::InvalidHexadectet => "invalid hexadectet",
            ParseErrorKind::InvalidSegment => "invalid path segment",
            ParseErrorKind::InvalidQuery => "invalid query",
            ParseErrorKind::InvalidFragment => "invalid fragment",
            ParseErrorKind::InvalidValue => "invalid value",
            ParseErrorKind::InvalidUri => "not a valid URI",
            ParseErrorKind::InvalidRelativeReference => "not a valid relative reference",
        };
        match self.index {
            Some(index) => write!(f, "{msg} at index {index}: {}", self.input),
            None => write!(f, "{msg}: {}", self.input),
        }
    }
}

impl fmt::Display for SchemeName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for SchemeName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<S, Q, F> fmt::Display for Scheme<S, Q, F>
where
    S: PercentEncodingPartial,
    Q: PercentEncodingPartial,
    F: PercentEncodingPartial,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.name(), f)
    }
}

impl fmt::Display for Port {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&USERINFO_ENCODER.encode(self.value()))
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, groups: &[T]) -> fmt::Result {
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            f.write_str(":")?;
        }
        write!(f, "{group}")?;
    }
    Ok(())
}

/// Writes hexadectets with the longest run of zeros elided, returning whether
/// the output ends with the elision.
fn write_hexadectets(
    f: &mut fmt::Formatter<'_>,
    groups: &[Hexadectet],
) -> Result<bool, fmt::Error> {
    let mut values = [0u16; 8];
    for (value, group) in values.iter_mut().zip(groups) {
        *value = group.value();
    }
    match longest_zero_run(&values[..groups.len()]) {
        Some((start, end)) => {
            write_joined(f, &groups[..start])?;
            f.write_str("::")?;
            write_joined(f, &groups[end..])?;
            Ok(end == groups.len())
        }
        None => {
            write_joined(f, groups)?;
            Ok(false)
        }
    }
}

fn write_octets(f: &mut fmt::Formatter<'_>, octets: &[Octet; 4]) -> fmt::Result {
    let [a, b, c, d] = octets;
    write!(f, "{a}.{b}.{c}.{d}")
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::RegisteredName(name) => f.write_str(&REG_NAME_ENCODER.encode(name.as_str())),
            Host::Ipv4(octets) => write_octets(f, octets),
            Host::Ipv6(groups) => {
                f.write_str("[")?;
                write_hexadectets(f, groups)?;
                f.write_str("]")
            }
            Host::Ipv6WithIpv4(groups, octets) => {
                f.write_str("[")?;
                if !write_hexadectets(f, groups)? {
                    f.write_str(":")?;
                }
                write_octets(f, octets)?;
                f.write_str("]")
            }
            Host::IpvFuture(x) => write!(f, "[v{}.{}]", x.version(), x.address()),
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(user_info) = self.user_info_opt() {
            write!(f, "{user_info}@")?;
        }
        write!(f, "{}", self.host())?;
        if let Some(port) = self.port_opt() {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

impl<P: PercentEncodingPartial> fmt::Display for Segment<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Writes the path so that it reads back unchanged on its own.
impl<P: PercentEncodingPartial> fmt::Display for Path<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_encoded_string(PrefixWithDotSegment::IfFirstIsEmptyOrContainsColon))
    }
}

impl<Q: PercentEncodingPartial> fmt::Display for Query<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Self::encoding().encode(self.value()))
    }
}

impl<F: PercentEncodingPartial> fmt::Display for Fragment<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Self::encoding().encode(self.value()))
    }
}

fn write_hierarchy<S, Q, F>(
    f: &mut fmt::Formatter<'_>,
    authority: Option<&Authority>,
    path: &Path<S>,
    query: Option<&Query<Q>>,
    fragment: Option<&Fragment<F>>,
    prefix: PrefixWithDotSegment,
) -> fmt::Result
where
    S: PercentEncodingPartial,
    Q: PercentEncodingPartial,
    F: PercentEncodingPartial,
{
    let prefix = match authority {
        Some(authority) => {
            write!(f, "//{authority}")?;
            PrefixWithDotSegment::Never
        }
        None => prefix,
    };
    f.write_str(&path.to_encoded_string(prefix))?;
    if let Some(query) = query {
        write!(f, "?{query}")?;
    }
    if let Some(fragment) = fragment {
        write!(f, "#{fragment}")?;
    }
    Ok(())
}

impl<S, Q, F> fmt::Display for Urin<S, Q, F>
where
    S: PercentEncodingPartial,
    Q: PercentEncodingPartial,
    F: PercentEncodingPartial,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme())?;
        // The scheme already rules out reading a colon as one.
        write_hierarchy(
            f,
            self.authority_opt(),
            self.path(),
            self.query_opt(),
            self.fragment_opt(),
            PrefixWithDotSegment::IfFirstIsEmpty,
        )
    }
}

impl<S, Q, F> fmt::Display for RelativeReference<S, Q, F>
where
    S: PercentEncodingPartial,
    Q: PercentEncodingPartial,
    F: PercentEncodingPartial,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hierarchy(
            f,
            self.authority_opt(),
            self.path(),
            self.query_opt(),
            self.fragment_opt(),
            PrefixWithDotSegment::IfFirstIsEmptyOrContainsColon,
        )
    }
}

impl<S, Q, F> fmt::Display for UrinReference<S, Q, F>
where
    S: PercentEncodingPartial,
    Q: PercentEncodingPartial,
    F: PercentEncodingPartial,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrinReference::Urin(urin) => fmt::Display::fmt(urin, f),
            UrinReference::RelativeReference(rel) => fmt::Display::fmt(rel, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::ParseErrorKind, host::Host, ParseError};
    use alloc::string::ToString;

    #[test]
    fn ipv6_elision() {
        let cases = [
            (Host::ipv6(1, 0, 0, 2, 0, 0, 0, 3), "[1:0:0:2::3]"),
            (Host::ipv6(1, 0, 2, 3, 4, 5, 6, 7), "[1:0:2:3:4:5:6:7]"),
            (Host::ipv6(1, 0, 0, 2, 0, 0, 3, 4), "[1::2:0:0:3:4]"),
            (Host::unspecified_address_ipv6(), "[::]"),
            (Host::loopback_address_ipv6(), "[::1]"),
            (Host::ipv6(0xABCD, 0, 0, 0, 0, 0, 0, 0), "[abcd::]"),
            (
                Host::ipv6_with_ipv4([0, 0, 0, 0, 0, 0xffff], 1, 2, 3, 4),
                "[::ffff:1.2.3.4]",
            ),
            (
                Host::ipv6_with_ipv4([1, 0, 0, 0, 0, 0], 1, 2, 3, 4),
                "[1::1.2.3.4]",
            ),
            (
                Host::ipv6_with_ipv4([1, 2, 3, 4, 5, 6], 1, 2, 3, 4),
                "[1:2:3:4:5:6:1.2.3.4]",
            ),
        ];
        for (host, s) in cases {
            assert_eq!(host.to_string(), s);
            assert_eq!(Host::parse(s).unwrap(), host, "{s}");
        }
    }

    #[test]
    fn parse_error_display() {
        let err = Host::parse("[1::1::1]").unwrap_err();
        assert_eq!(err.to_string(), "invalid host: [1::1::1]");
        let err = ParseError::at(ParseErrorKind::UnexpectedChar, 1, "a b");
        assert_eq!(err.to_string(), "unexpected character at index 1: a b");
    }
}
