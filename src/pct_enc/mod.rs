//! Percent-encoding utilities.
//!
//! A [`PercentEncoder`] percent-encodes every character outside its [`Table`].
//! Encoders are the base layer on which [partials](partial) build the encodings of
//! path segments, queries and fragments.

pub mod partial;
pub mod table;

pub use partial::{PercentEncoding, PercentEncodingPartial};
pub use table::Table;

use crate::error::{ParseError, ParseErrorKind};
use alloc::{string::String, vec::Vec};
use core::{iter::FusedIterator, str};

/// A percent-encoder over UTF-8.
///
/// Characters allowed by the encoder's [`Table`] are emitted verbatim, while every
/// other character is UTF-8-encoded and each byte emitted as `%` followed by two
/// uppercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use urin::pct_enc::{table, PercentEncoder};
///
/// let encoder = PercentEncoder::new(table::UNRESERVED);
/// assert_eq!(encoder.encode("¡Hola, señor!"), "%C2%A1Hola%2C%20se%C3%B1or%21");
/// assert_eq!(encoder.decode("%C2%A1Hola%2c%20se%C3%B1or%21")?, "¡Hola, señor!");
/// # Ok::<_, urin::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PercentEncoder {
    table: Table,
}

impl PercentEncoder {
    /// An encoder that leaves every character but `%` unencoded.
    pub const ENCODE_NOTHING: PercentEncoder = PercentEncoder::new(Table::ALL);

    /// An encoder that encodes every character.
    pub const ENCODE_EVERYTHING: PercentEncoder = PercentEncoder::new(Table::NONE);

    /// Creates an encoder that leaves the characters allowed by `table` unencoded.
    #[must_use]
    pub const fn new(table: Table) -> Self {
        Self { table }
    }

    /// Returns the table of characters left unencoded.
    #[must_use]
    pub const fn table(&self) -> Table {
        self.table
    }

    /// Returns an encoder that also encodes the given character.
    ///
    /// # Panics
    ///
    /// Panics if the character is not ASCII.
    #[must_use]
    pub fn additionally_encoding(self, ch: char) -> Self {
        assert!(
            ch.is_ascii(),
            "cannot additionally encode non-ASCII character"
        );
        Self::new(self.table.sub(Table::new(&[ch as u8])))
    }

    /// Percent-encodes a string.
    #[must_use]
    pub fn encode(&self, s: &str) -> String {
        let mut buf = String::with_capacity(s.len());
        for chunk in Encode::new(self.table, s) {
            buf.push_str(chunk.as_str());
        }
        buf
    }

    /// Decodes a percent-encoded string.
    ///
    /// Note that `U+002B` (+) is **not** decoded as `0x20` (space).
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `'%'` is not followed by two hexadecimal digits, if a character
    /// outside the table appears unencoded, or if the decoded bytes are not valid UTF-8.
    pub fn decode(&self, s: &str) -> Result<String, ParseError> {
        let mut buf = Vec::with_capacity(s.len());
        for chunk in Decode::new(self.table, s) {
            match chunk? {
                DecodedChunk::Unencoded(s) => buf.extend_from_slice(s.as_bytes()),
                DecodedChunk::PctDecoded(x) => buf.push(x),
            }
        }
        String::from_utf8(buf).map_err(|_| ParseError::new(ParseErrorKind::InvalidUtf8, s))
    }

    /// Checks whether the string decodes successfully with this encoder.
    #[must_use]
    pub fn is_member(&self, s: &str) -> bool {
        self.decode(s).is_ok()
    }
}

impl PercentEncoding for PercentEncoder {
    type Value = String;

    fn encode(&self, value: &String) -> String {
        PercentEncoder::encode(self, value)
    }

    fn decode(&self, encoded: &str) -> Result<String, ParseError> {
        PercentEncoder::decode(self, encoded)
    }

    fn additionally_encoding(self, ch: char) -> Self {
        PercentEncoder::additionally_encoding(self, ch)
    }
}

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
pub(crate) const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

fn is_hexdig_pair(hi: u8, lo: u8) -> bool {
    OCTET_TABLE_LO[hi as usize] | OCTET_TABLE_LO[lo as usize] < 128
}

/// Decodes a percent-encoded octet, assuming that the bytes are hexadecimal.
fn decode_octet(hi: u8, lo: u8) -> u8 {
    debug_assert!(hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit());
    OCTET_TABLE_HI[hi as usize] | OCTET_TABLE_LO[lo as usize]
}

/// An item returned by the [`Decode`] iterator.
#[derive(Clone, Copy, Debug)]
enum DecodedChunk<'a> {
    /// An unencoded subslice.
    Unencoded(&'a str),
    /// A percent-encoded octet, decoded (for example, `"%20"` decoded as `0x20`).
    PctDecoded(u8),
}

/// An iterator used to decode a percent-encoded string, validating it on the way.
#[derive(Clone, Debug)]
struct Decode<'a> {
    table: Table,
    input: &'a str,
    source: &'a str,
}

impl<'a> Decode<'a> {
    fn new(table: Table, input: &'a str) -> Self {
        Self {
            table,
            input,
            source: input,
        }
    }

    fn index(&self) -> usize {
        self.input.len() - self.source.len()
    }
}

impl<'a> Iterator for Decode<'a> {
    type Item = Result<DecodedChunk<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.source.chars().next()?;
        if first == '%' {
            let bytes = self.source.as_bytes();
            let [_, hi, lo, ..] = *bytes else {
                let err = ParseError::at(ParseErrorKind::InvalidOctet, self.index(), self.input);
                self.source = "";
                return Some(Err(err));
            };
            if !is_hexdig_pair(hi, lo) {
                let err = ParseError::at(ParseErrorKind::InvalidOctet, self.index(), self.input);
                self.source = "";
                return Some(Err(err));
            }
            self.source = &self.source[3..];
            return Some(Ok(DecodedChunk::PctDecoded(decode_octet(hi, lo))));
        }

        let mut end = self.source.len();
        for (i, ch) in self.source.char_indices() {
            if ch == '%' {
                end = i;
                break;
            }
            if !self.table.allows(ch) {
                let err = ParseError::at(
                    ParseErrorKind::UnexpectedChar,
                    self.index() + i,
                    self.input,
                );
                self.source = "";
                return Some(Err(err));
            }
        }
        let s;
        (s, self.source) = self.source.split_at(end);
        Some(Ok(DecodedChunk::Unencoded(s)))
    }
}

impl FusedIterator for Decode<'_> {}

pub(crate) fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

/// An iterator used to percent-encode a string slice.
#[derive(Clone, Debug)]
struct Encode<'s> {
    table: Table,
    source: &'s str,
    to_enc: &'s [u8],
}

impl<'s> Encode<'s> {
    fn new(table: Table, source: &'s str) -> Self {
        Self {
            table,
            source,
            to_enc: &[],
        }
    }
}

/// An item returned by the [`Encode`] iterator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EncodedChunk<'a> {
    /// An unencoded subslice.
    Unencoded(&'a str),
    /// A byte, percent-encoded (for example, `0x20` encoded as `"%20"`).
    PctEncoded(&'static str),
}

impl<'a> EncodedChunk<'a> {
    fn as_str(self) -> &'a str {
        match self {
            Self::Unencoded(s) | Self::PctEncoded(s) => s,
        }
    }
}

impl<'a> Iterator for Encode<'a> {
    type Item = EncodedChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let [x, rem @ ..] = self.to_enc {
            self.to_enc = rem;
            return Some(EncodedChunk::PctEncoded(encode_byte(*x)));
        }

        if self.source.is_empty() {
            return None;
        }

        let mut iter = self.source.char_indices();

        let first_unallowed_i = iter
            .find_map(|(i, ch)| (!self.table.allows(ch)).then_some(i))
            .unwrap_or(self.source.len());

        let next_allowed_i = iter
            .find_map(|(i, ch)| self.table.allows(ch).then_some(i))
            .unwrap_or(self.source.len());

        if first_unallowed_i == 0 {
            let (unallowed, rem) = self.source.split_at(next_allowed_i);
            self.source = rem;

            let (x, rem) = unallowed.as_bytes().split_first()?;
            self.to_enc = rem;

            Some(EncodedChunk::PctEncoded(encode_byte(*x)))
        } else {
            let allowed = &self.source[..first_unallowed_i];
            self.to_enc = &self.source.as_bytes()[first_unallowed_i..next_allowed_i];
            self.source = &self.source[next_allowed_i..];

            Some(EncodedChunk::Unencoded(allowed))
        }
    }
}

impl FusedIterator for Encode<'_> {}
