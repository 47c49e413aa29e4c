use urin::{path::Path, RelativeReference, Urin, UrinReference};

#[track_caller]
fn normalize(s: &str) -> String {
    s.parse::<UrinReference>().unwrap().to_string()
}

#[test]
fn normalize_rfc_example() {
    // Example from Section 6.2.2 of RFC 3986.
    assert_eq!(
        normalize("eXAMPLE://a/./b/../b/%63/%7bfoo%7d"),
        "example://a/b/c/%7Bfoo%7D"
    );
}

#[test]
fn normalize_case() {
    assert_eq!(
        normalize("HTTP://www.EXAMPLE.com/"),
        "http://www.example.com/"
    );
    assert_eq!(normalize("http://[ABCD::EF01]/"), "http://[abcd::ef01]/");
    assert_eq!(normalize("http://[V1F.AbC:D]/"), "http://[v1f.abc:d]/");

    // Only the scheme and host are case-insensitive.
    assert_eq!(normalize("http://a/B?C#D"), "http://a/B?C#D");
    assert_eq!(normalize("http://UsEr@a/"), "http://UsEr@a/");
}

#[test]
fn normalize_percent_encoding() {
    // Unreserved characters are decoded.
    assert_eq!(normalize("%41%2d%7E"), "A-~");
    // Hexadecimal digits are upper-cased.
    assert_eq!(normalize("a%2fb"), "a%2Fb");
    assert_eq!(normalize("?%3d#%3D"), "?=#=");
    // Registered names are decoded and lower-cased before re-encoding.
    assert_eq!(normalize("//%45xample.com"), "//example.com");
    assert_eq!(normalize("//ex%C3%A4mple.com"), "//ex%C3%A4mple.com");
}

#[test]
fn normalize_dot_segments() {
    assert_eq!(normalize("a/b/c/./../../g"), "a/g");
    assert_eq!(normalize("mid/content=5/../6"), "mid/6");
    assert_eq!(normalize("/a/b/c/./../../g"), "/a/g");
    assert_eq!(normalize("/../a"), "/a");
    assert_eq!(normalize("/a/.."), "/");
    assert_eq!(normalize("../a/./b"), "../a/b");
    assert_eq!(normalize("./../a"), "../a");
    assert_eq!(normalize("a/."), "a/");
    assert_eq!(normalize("a/.."), "./");

    // A leading dot-segment is kept when the path would otherwise be misread.
    assert_eq!(normalize("./a:b"), "./a:b");
    assert_eq!(normalize("s:/.//a"), "s:/.//a");
    assert_eq!(normalize("/.//a"), "/.//a");

    // Percent-encoded dots are values, not dot-segments.
    assert_eq!(normalize("a/%2E%2E/b"), "a/%2E%2E/b");
    assert_eq!(normalize("a/%2e/b"), "a/%2E/b");
}

#[test]
fn normalize_port() {
    assert_eq!(normalize("http://a:0080/"), "http://a:80/");
    assert_eq!(normalize("http://a:000/"), "http://a:0/");
    assert_eq!(normalize("http://a:/"), "http://a:/");
}

#[test]
fn equality_is_by_normal_form() {
    let a: Urin = "HTTP://Example.COM/a/./b/../c".parse().unwrap();
    let b: Urin = "http://example.com/a/c".parse().unwrap();
    assert_eq!(a, b);

    let a: RelativeReference = "%61/b".parse().unwrap();
    let b: RelativeReference = "a/b".parse().unwrap();
    assert_eq!(a, b);

    let a: Urin = "http://127.0.0.1/".parse().unwrap();
    let b: Urin = "http://%31%32%37.0.0.1/".parse().unwrap();
    assert_eq!(a, b);
}

#[test]
fn normalization_is_idempotent() {
    for s in [
        "eXAMPLE://a/./b/../b/%63/%7bfoo%7d",
        "a/b/c/./../../g",
        "../../x/./",
        "./a:b/..",
        "s:.//a",
        "//h/.././",
        "?a#b",
        "/./.././/x",
    ] {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "{s}");
    }
}

#[test]
fn standalone_path_display() {
    let path: Path = Path::parse("a:b/c").unwrap();
    assert_eq!(path.to_string(), "./a:b/c");
    let path: Path = Path::parse("/a:b/c").unwrap();
    assert_eq!(path.to_string(), "/a:b/c");
    let path: Path = Path::parse("/.//").unwrap();
    assert_eq!(path.to_string(), "/.//");
}
