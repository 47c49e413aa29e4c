#![cfg(feature = "serde")]

use serde_test::{assert_de_tokens_error, assert_tokens, Token};
use urin::{RelativeReference, Urin, UrinReference};

#[test]
fn serde_urin() {
    let urin: Urin = "http://example.com/a%20b?q#f".parse().unwrap();
    assert_tokens(&urin, &[Token::Str("http://example.com/a%20b?q#f")]);
}

#[test]
fn serde_relative_reference() {
    let rel: RelativeReference = "./a:b?q".parse().unwrap();
    assert_tokens(&rel, &[Token::Str("./a:b?q")]);
}

#[test]
fn serde_urin_reference() {
    let r: UrinReference = "//example.com".parse().unwrap();
    assert_tokens(&r, &[Token::Str("//example.com")]);
    let r: UrinReference = "mailto:a@example.com".parse().unwrap();
    assert_tokens(&r, &[Token::Str("mailto:a@example.com")]);
}

#[test]
fn serde_error() {
    assert_de_tokens_error::<Urin>(
        &[Token::Str("foo")],
        "failed to parse \"foo\" as URI: not a valid URI: foo",
    );
    assert_de_tokens_error::<RelativeReference>(
        &[Token::Str("a b")],
        "failed to parse \"a b\" as relative reference: \
         invalid path segment at index 1: a b",
    );
}
