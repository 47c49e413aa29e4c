//! Character tables from RFC 3986.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 5234].
//!
//! [RFC 5234]: https://datatracker.ietf.org/doc/html/rfc5234

// `%` is never allowed unencoded, so its bit stands for every non-ASCII character.
const MASK_NON_ASCII: u64 = 1 << b'%';
const MASK_ASCII_LO: u64 = !MASK_NON_ASCII;

/// A set of characters that may appear unencoded in a string.
///
/// Tables are composable with [`or`](Self::or) and [`sub`](Self::sub), and are
/// used by a [`PercentEncoder`](super::PercentEncoder) to tell which characters pass
/// through unencoded. The percent character `%` is never a member of a table, as it is
/// reserved for introducing percent-encoded octets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Table(u64, u64);

impl Table {
    /// A table that allows no character.
    pub const NONE: Table = Table(0, 0);

    /// A table that allows every character except `%`.
    pub const ALL: Table = Table(!0, !0);

    /// Creates a table that only allows the given unencoded bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII or equals `b'%'`.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(
                !matches!(cur, b'%' | 128..),
                "cannot allow non-ASCII byte or %"
            );
            table |= 1u128.wrapping_shl(*cur as u32);
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the characters allowed
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Marks this table as allowing every non-ASCII character.
    #[must_use]
    pub const fn or_non_ascii(self) -> Self {
        Self(self.0 | MASK_NON_ASCII, self.1)
    }

    /// Subtracts from this table.
    ///
    /// Returns a new table that allows all the characters allowed
    /// by `self` but not allowed by `other`.
    #[must_use]
    pub const fn sub(self, other: Self) -> Self {
        Self(self.0 & !other.0, self.1 & !other.1)
    }

    /// Checks whether the table is a subset of another, i.e., `other`
    /// allows at least all the characters allowed by `self`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0 && self.1 & other.1 == self.1
    }

    #[inline]
    pub(crate) const fn allows_ascii(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0 & MASK_ASCII_LO
        } else if x < 128 {
            self.1
        } else {
            0
        };
        table & 1u64.wrapping_shl(x as u32) != 0
    }

    /// Checks whether the given unencoded character is allowed by the table.
    #[inline]
    #[must_use]
    pub const fn allows(self, ch: char) -> bool {
        if ch.is_ascii() {
            self.allows_ascii(ch as u8)
        } else {
            self.0 & MASK_NON_ASCII != 0
        }
    }

    /// Validates the given string with the table, allowing no percent-encoded octet.
    pub(crate) fn validate(self, s: &str) -> bool {
        s.chars().all(|ch| self.allows(ch))
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `DIGIT = %x30-39`
pub const DIGIT: Table = new(b"0123456789");

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
///
/// Lowercase letters are allowed as well.
pub const HEXDIG: Table = DIGIT.or(new(b"ABCDEFabcdef"));

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub const SCHEME: Table = ALPHA.or(DIGIT).or(new(b"+-."));

/// `userinfo = *( unreserved / pct-encoded / sub-delims / ":" )`
pub const USERINFO: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":"));

/// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`
pub const IPV_FUTURE: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":"));

/// `reg-name = *( unreserved / pct-encoded / sub-delims )`
pub const REG_NAME: Table = UNRESERVED.or(SUB_DELIMS);

/// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`
pub const PCHAR: Table = UNRESERVED.or(SUB_DELIMS).or(new(b":@"));

/// `query = *( pchar / "/" / "?" )`
pub const QUERY: Table = PCHAR.or(new(b"/?"));

/// `fragment = *( pchar / "/" / "?" )`
pub const FRAGMENT: Table = QUERY;

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub const UNRESERVED: Table = ALPHA.or(DIGIT).or(new(b"-._~"));

/// `reserved = gen-delims / sub-delims`
pub const RESERVED: Table = GEN_DELIMS.or(SUB_DELIMS);

/// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
pub const GEN_DELIMS: Table = new(b":/?#[]@");

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///             / "*" / "+" / "," / ";" / "="`
pub const SUB_DELIMS: Table = new(b"!$&'()*+,;=");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition() {
        assert!(UNRESERVED.is_subset(PCHAR));
        assert!(PCHAR.is_subset(QUERY));
        assert!(!QUERY.is_subset(PCHAR));
        assert!(REG_NAME.sub(new(b"!")).is_subset(REG_NAME));
        assert!(!REG_NAME.sub(new(b"!")).allows('!'));
        assert!(RESERVED.allows(':') && RESERVED.allows('='));
    }

    #[test]
    fn all_and_none() {
        assert!(Table::ALL.allows('\0'));
        assert!(Table::ALL.allows('a'));
        assert!(Table::ALL.allows('\u{7f}'));
        assert!(Table::ALL.allows('é'));
        assert!(!Table::ALL.allows('%'));
        for ch in ['\0', 'a', '%', 'é'] {
            assert!(!Table::NONE.allows(ch));
        }
        assert!(Table::NONE.is_subset(ALPHA));
        assert!(QUERY.is_subset(Table::ALL));
    }

    #[test]
    fn non_ascii() {
        assert!(!PCHAR.allows('é'));
        assert!(PCHAR.or_non_ascii().allows('é'));
        assert!(!PCHAR.or_non_ascii().allows(' '));
    }

    #[test]
    #[should_panic]
    fn percent_is_never_allowed() {
        let _ = Table::new(b"%");
    }
}
