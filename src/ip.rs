//! Octets, hexadectets and IP address parsing.

use crate::{
    error::{ParseError, ParseErrorKind},
    pct_enc::OCTET_TABLE_LO as HEX_TABLE,
};
use core::fmt;

// dec-octet = DIGIT             ; 0-9
//           / %x31-39 DIGIT     ; 10-99
//           / "1" 2DIGIT        ; 100-199
//           / "2" %x30-34 DIGIT ; 200-249
//           / "25" %x30-35      ; 250-255
fn dec_octet(s: &[u8]) -> Option<u8> {
    match s {
        [b'0'] => Some(0),
        [b'1'..=b'9', rest @ ..] if rest.len() <= 2 && rest.iter().all(u8::is_ascii_digit) => s
            .iter()
            .fold(0u16, |acc, &d| acc * 10 + u16::from(d - b'0'))
            .try_into()
            .ok(),
        _ => None,
    }
}

// h16 = 1*4HEXDIG
fn h16(s: &[u8]) -> Option<u16> {
    if s.is_empty() || s.len() > 4 {
        return None;
    }
    s.iter().try_fold(0u16, |acc, &b| match HEX_TABLE[b as usize] {
        n if n < 128 => Some((acc << 4) | u16::from(n)),
        _ => None,
    })
}

/// An 8-bit group of an IPv4 address, in the range `0-255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Octet(u8);

impl Octet {
    /// Creates an octet.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the value of the octet.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Parses an octet from the `dec-octet` rule of RFC 3986.
    ///
    /// Leading zeros and signs are rejected, so that every octet has exactly
    /// one textual form.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is not a decimal number in the range `0-255`
    /// written without leading zeros.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        dec_octet(s.as_bytes())
            .map(Self)
            .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidOctetValue, s))
    }
}

impl From<u8> for Octet {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for Octet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A 16-bit group of an IPv6 address, in the range `0x0-0xFFFF`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hexadectet(u16);

impl Hexadectet {
    /// The hexadectet `0`.
    pub const ZERO: Hexadectet = Hexadectet(0);

    /// Creates a hexadectet.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the value of the hexadectet.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Parses a hexadectet from one to four hexadecimal digits in either case.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is empty, longer than four characters or
    /// contains a non-hexadecimal character.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        h16(s.as_bytes())
            .map(Self)
            .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidHexadectet, s))
    }
}

impl From<u16> for Hexadectet {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl fmt::Display for Hexadectet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// The result of parsing the inside of an IPv6 literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum V6 {
    Plain([u16; 8]),
    WithV4([u16; 6], [u8; 4]),
}

/// Parses a dotted-quad IPv4 address.
pub(crate) fn parse_v4(s: &[u8]) -> Option<[u8; 4]> {
    let mut parts = s.split(|&b| b == b'.');
    let mut out = [0; 4];
    for octet in &mut out {
        *octet = dec_octet(parts.next()?)?;
    }
    parts.next().is_none().then_some(out)
}

/// The hexadectets on one side of `::`, with an optional trailing IPv4 address.
#[derive(Default)]
struct Groups {
    values: [u16; 8],
    len: usize,
    v4: Option<[u8; 4]>,
}

impl Groups {
    /// Parses `h16 *( ":" h16 )`, allowing the last group to be an IPv4 address
    /// if `last` is set. The empty string gives no groups.
    fn parse(s: &[u8], last: bool) -> Option<Groups> {
        let mut groups = Groups::default();
        if s.is_empty() {
            return Some(groups);
        }
        let mut parts = s.split(|&b| b == b':').peekable();
        while let Some(part) = parts.next() {
            if last && parts.peek().is_none() && part.contains(&b'.') {
                groups.v4 = Some(parse_v4(part)?);
                break;
            }
            if groups.len == 8 {
                return None;
            }
            groups.values[groups.len] = h16(part)?;
            groups.len += 1;
        }
        Some(groups)
    }

    /// The number of hexadectets covered, counting an IPv4 address as two.
    fn width(&self) -> usize {
        self.len + if self.v4.is_some() { 2 } else { 0 }
    }
}

fn find_ellipsis(s: &[u8]) -> Option<usize> {
    s.windows(2).position(|w| w == b"::")
}

/// Parses the inside of an IPv6 literal, keeping track of a trailing IPv4 address.
pub(crate) fn parse_v6(s: &[u8]) -> Option<V6> {
    let mut segs = [0u16; 8];
    let v4 = match find_ellipsis(s) {
        None => {
            let groups = Groups::parse(s, true)?;
            if groups.width() != 8 {
                return None;
            }
            segs = groups.values;
            groups.v4
        }
        Some(i) => {
            let (head, tail) = (&s[..i], &s[i + 2..]);
            if find_ellipsis(tail).is_some() {
                return None;
            }
            let head = Groups::parse(head, false)?;
            let tail = Groups::parse(tail, true)?;
            // The ellipsis stands for at least one group of zeros.
            if head.width() + tail.width() > 7 {
                return None;
            }
            segs[..head.len].copy_from_slice(&head.values[..head.len]);
            let start = 8 - tail.width();
            segs[start..start + tail.len].copy_from_slice(&tail.values[..tail.len]);
            tail.v4
        }
    };

    Some(match v4 {
        Some(octets) => {
            let mut hex = [0; 6];
            hex.copy_from_slice(&segs[..6]);
            V6::WithV4(hex, octets)
        }
        None => V6::Plain(segs),
    })
}

/// Finds the longest run of at least two zeros, preferring the first one on ties.
///
/// Returns the start and end indexes of the run.
pub(crate) fn longest_zero_run(groups: &[u16]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut i = 0;
    while i < groups.len() {
        if groups[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < groups.len() && groups[i] == 0 {
            i += 1;
        }
        let len = i - start;
        if len >= 2 && best.map_or(true, |(s, e)| len > e - s) {
            best = Some((start, i));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn v6(s: &str) -> Option<[u16; 8]> {
        match parse_v6(s.as_bytes())? {
            V6::Plain(segs) => Some(segs),
            V6::WithV4(..) => None,
        }
    }

    #[test]
    fn dec_octets() {
        for i in 0..=u8::MAX {
            assert_eq!(dec_octet(i.to_string().as_bytes()), Some(i));
        }
        for s in ["", "256", "300", "1000", "00", "01", "-1", "1a"] {
            assert_eq!(dec_octet(s.as_bytes()), None, "{s}");
        }
    }

    #[test]
    fn test_parse_v4() {
        assert_eq!(Some([127, 0, 0, 1]), parse_v4(b"127.0.0.1"));
        assert_eq!(Some([255, 255, 255, 255]), parse_v4(b"255.255.255.255"));
        assert_eq!(Some([0, 0, 0, 0]), parse_v4(b"0.0.0.0"));

        // out of range
        assert!(parse_v4(b"256.0.0.1").is_none());
        // too short
        assert!(parse_v4(b"255.0.0").is_none());
        // too long
        assert!(parse_v4(b"255.0.0.1.2").is_none());
        // no number between dots
        assert!(parse_v4(b"255.0..1").is_none());
        // octal
        assert!(parse_v4(b"255.0.0.01").is_none());
        // octal zero
        assert!(parse_v4(b"255.0.0.00").is_none());
        assert!(parse_v4(b"255.0.00.0").is_none());
        // preceding dot
        assert!(parse_v4(b".0.0.0.0").is_none());
        // trailing dot
        assert!(parse_v4(b"0.0.0.0.").is_none());
        // sign
        assert!(parse_v4(b"+2.0.0.1").is_none());
    }

    #[test]
    fn test_parse_v6() {
        assert_eq!(Some([0; 8]), v6("0:0:0:0:0:0:0:0"));
        assert_eq!(
            Some([1, 2, 3, 4, 5, 6, 7, 8]),
            v6("1:02:003:0004:0005:006:07:8")
        );
        assert_eq!(Some([0, 0, 0, 0, 0, 0, 0, 1]), v6("::1"));
        assert_eq!(Some([1, 0, 0, 0, 0, 0, 0, 0]), v6("1::"));
        assert_eq!(Some([0; 8]), v6("::"));
        assert_eq!(
            Some([0x2a02, 0x6b8, 0, 0, 0, 0, 0x11, 0x11]),
            v6("2a02:6b8::11:11")
        );
        assert_eq!(Some([0, 2, 3, 4, 5, 6, 7, 8]), v6("::2:3:4:5:6:7:8"));
        assert_eq!(Some([1, 2, 3, 4, 0, 6, 7, 8]), v6("1:2:3:4::6:7:8"));
        assert_eq!(Some([1, 2, 3, 4, 5, 6, 7, 0]), v6("1:2:3:4:5:6:7::"));
        assert_eq!(Some([0xabcd, 0, 0, 0, 0, 0, 0, 0xEF]), v6("ABCD::eF"));

        // only a colon
        assert!(parse_v6(b":").is_none());
        // too long group
        assert!(parse_v6(b"::00000").is_none());
        // too short
        assert!(parse_v6(b"1:2:3:4:5:6:7").is_none());
        // too long
        assert!(parse_v6(b"1:2:3:4:5:6:7:8:9").is_none());
        // triple colon
        assert!(parse_v6(b"1:2:::6:7:8").is_none());
        assert!(parse_v6(b":::").is_none());
        // two double colons
        assert!(parse_v6(b"1:2::6::8").is_none());
        assert!(parse_v6(b"::6::8").is_none());
        // `::` indicating zero groups of zeros
        assert!(parse_v6(b"::1:2:3:4:5:6:7:8").is_none());
        assert!(parse_v6(b"1:2:3:4::5:6:7:8").is_none());
        // preceding colon
        assert!(parse_v6(b":1:2:3:4:5:6:7:8").is_none());
        assert!(parse_v6(b":1:2:3:4:5:6:7").is_none());
        // trailing colon
        assert!(parse_v6(b"1:2:3:4:5:6:7:8:").is_none());
        // not hexadecimal
        assert!(parse_v6(b"1::g").is_none());
    }

    #[test]
    fn test_parse_v4_in_v6() {
        assert_eq!(
            Some(V6::WithV4([0; 6], [192, 0, 2, 33])),
            parse_v6(b"::192.0.2.33")
        );
        assert_eq!(
            Some(V6::WithV4([0, 0, 0, 0, 0, 0xFFFF], [192, 0, 2, 33])),
            parse_v6(b"::FFFF:192.0.2.33")
        );
        assert_eq!(
            Some(V6::WithV4([0x64, 0xff9b, 0, 0, 0, 0], [192, 0, 2, 33])),
            parse_v6(b"64:ff9b::192.0.2.33")
        );
        assert_eq!(
            Some(V6::WithV4(
                [0x2001, 0xdb8, 0x122, 0xc000, 0x2, 0x2100],
                [192, 0, 2, 33]
            )),
            parse_v6(b"2001:db8:122:c000:2:2100:192.0.2.33")
        );

        // colon after v4
        assert!(parse_v6(b"::127.0.0.1:").is_none());
        // not enough groups
        assert!(parse_v6(b"1:2:3:4:5:127.0.0.1").is_none());
        // too many groups
        assert!(parse_v6(b"1:2:3:4:5:6:7:127.0.0.1").is_none());
    }

    #[test]
    fn zero_runs() {
        assert_eq!(longest_zero_run(&[1, 0, 0, 2, 0, 0, 0, 3]), Some((4, 7)));
        assert_eq!(longest_zero_run(&[1, 0, 0, 2, 0, 0, 3, 4]), Some((1, 3)));
        assert_eq!(longest_zero_run(&[1, 2, 3, 0, 5, 6, 7, 8]), None);
        assert_eq!(longest_zero_run(&[0; 8]), Some((0, 8)));
        assert_eq!(longest_zero_run(&[1, 2, 3, 4, 5, 0]), None);
    }

    #[test]
    fn octets_and_hexadectets() {
        assert_eq!(Octet::parse("255").unwrap(), Octet::new(255));
        assert!(Octet::parse("256").is_err());
        assert!(Octet::parse("01").is_err());
        assert!(Octet::parse("").is_err());
        assert_eq!(Hexadectet::parse("fFfF").unwrap(), Hexadectet::new(0xffff));
        assert_eq!(Hexadectet::parse("0").unwrap(), Hexadectet::ZERO);
        assert!(Hexadectet::parse("10000").is_err());
        assert!(Hexadectet::parse("").is_err());
        assert!(Hexadectet::parse("+1").is_err());
        assert_eq!(Hexadectet::new(0xAB).to_string(), "ab");
    }
}
