use urin::{
    component::{Authority, Fragment, Port, Query, UserInfo},
    host::Host,
    path::{Path, Segment},
    RelativeReference, Scheme, Urin,
};

fn seg(s: &str) -> Segment {
    Segment::segment(s.to_owned())
}

#[test]
fn build_urin() {
    let scheme: Scheme = Scheme::new("foo");
    let authority = Authority::new(Host::registered_name("Example.com"))
        .with_user_info(UserInfo::new("user name"))
        .with_port(Port::new(8042));
    let urin = scheme.urin(
        Some(authority),
        Path::absolute([seg("over"), seg("there")]),
        Some(Query::new("name=ferret".to_owned())),
        Some(Fragment::new("nose".to_owned())),
    );
    assert_eq!(
        urin.to_string(),
        "foo://user%20name@example.com:8042/over/there?name=ferret#nose"
    );
    assert_eq!(urin, urin.to_string().parse::<Urin>().unwrap());
}

#[test]
fn build_encodes_values() {
    let scheme: Scheme = Scheme::new("s");
    let urin = scheme.urin(
        None,
        Path::rootless([seg("a/b"), seg("."), seg("c d")]),
        Some(Query::new("#".to_owned())),
        Some(Fragment::new("%".to_owned())),
    );
    assert_eq!(urin.to_string(), "s:a%2Fb/%2E/c%20d?%23#%25");
    assert_eq!(urin.path().segments()[1].value(), ".");
}

#[test]
fn build_relative_reference() {
    let scheme: Scheme = Scheme::new("s");
    let rel = scheme.relative_reference(
        None,
        Path::rootless([seg("a:b"), seg("c")]),
        None,
        None,
    );
    assert_eq!(rel.to_string(), "./a:b/c");
    assert_eq!(rel, "./a:b/c".parse().unwrap());

    let rel = scheme.relative_reference(
        Some(Authority::new(Host::ipv4(10, 0, 0, 1))),
        Path::empty(),
        Some(Query::new(String::new())),
        None,
    );
    assert_eq!(rel.to_string(), "//10.0.0.1?");
}

#[test]
fn build_dot_segments_are_removed() {
    let scheme: Scheme = Scheme::new("s");
    let urin = scheme.urin(
        None,
        Path::absolute([seg("a"), Segment::dot(), Segment::dot_dot(), seg("b")]),
        None,
        None,
    );
    assert_eq!(urin.to_string(), "s:/b");

    // An empty first segment must not read as an authority.
    let urin = scheme.urin(
        None,
        Path::absolute([Segment::empty(), seg("a")]),
        None,
        None,
    );
    assert_eq!(urin.to_string(), "s:/.//a");
    let urin = scheme.urin(
        None,
        Path::rootless([Segment::empty(), seg("a")]),
        None,
        None,
    );
    assert_eq!(urin.to_string(), "s:.//a");
}

#[test]
fn default_port_is_elided() {
    let http: Scheme = Scheme::with_default_port("http", Port::new(80));
    let host = Authority::new(Host::registered_name("example.com"));

    let with_port = http.urin(
        Some(host.clone().with_port(Port::new(80))),
        Path::empty(),
        None,
        None,
    );
    let without_port = http.urin(Some(host.clone()), Path::empty(), None, None);
    assert_eq!(with_port, without_port);
    assert_eq!(with_port.to_string(), "http://example.com");
    assert!(!with_port.authority().has_port());
    assert_eq!(with_port.scheme().default_port_opt(), None);

    let other_port = http.urin(
        Some(host.with_port(Port::new(8080))),
        Path::empty(),
        None,
        None,
    );
    assert_eq!(other_port.to_string(), "http://example.com:8080");

    // Parsing with the scheme elides the default port too, but only for its name.
    let parsed = http.parse_urin("HTTP://example.com:080").unwrap();
    assert_eq!(parsed, without_port);
    let parsed = http.parse_urin("https://example.com:80").unwrap();
    assert_eq!(parsed.to_string(), "https://example.com:80");
}

#[test]
fn with_path() {
    let urin: Urin = "http://a/b?c#d".parse().unwrap();
    let replaced = urin.with_path(Path::parse("/x/./y").unwrap());
    assert_eq!(replaced.to_string(), "http://a/x/y?c#d");
    let replaced = urin.with_path(Path::empty());
    assert_eq!(replaced.to_string(), "http://a?c#d");
}

#[test]
#[should_panic = "when authority is present, path should either be empty or start with '/'"]
fn with_rootless_path_panics() {
    let urin: Urin = "http://a/b".parse().unwrap();
    let _ = urin.with_path(Path::rootless([seg("x")]));
}

#[test]
fn absent_parts() {
    let urin: Urin = "s:p".parse().unwrap();
    assert!(urin.authority_opt().is_none());
    assert!(urin.query_opt().is_none());
    assert!(urin.fragment_opt().is_none());
    assert!(!urin.has_authority() && !urin.has_query() && !urin.has_fragment());

    let urin: Urin = "s:p?#".parse().unwrap();
    assert_eq!(urin.query().value(), "");
    assert_eq!(urin.fragment().value(), "");
    assert_eq!(urin.to_string(), "s:p?#");
}

#[test]
#[should_panic = "attempt to get port from an authority that does not have one"]
fn absent_port_panics() {
    let _ = Authority::new(Host::local_host()).port();
}

#[test]
#[should_panic = "attempt to get query from a reference without a query"]
fn absent_query_panics() {
    let urin: Urin = "s:p".parse().unwrap();
    let _ = urin.query();
}

fn bare_relative_reference() -> RelativeReference {
    let scheme: Scheme = Scheme::new("s");
    let rel = scheme.relative_reference(None, Path::empty(), None, None);
    assert!(!rel.has_authority() && !rel.has_query() && !rel.has_fragment());
    assert_eq!(rel.to_string(), "");
    rel
}

#[test]
#[should_panic = "attempt to get authority from a reference without an authority"]
fn bare_relative_reference_authority_panics() {
    let _ = bare_relative_reference().authority();
}

#[test]
#[should_panic = "attempt to get query from a reference without a query"]
fn bare_relative_reference_query_panics() {
    let _ = bare_relative_reference().query();
}

#[test]
#[should_panic = "attempt to get fragment from a reference without a fragment"]
fn bare_relative_reference_fragment_panics() {
    let _ = bare_relative_reference().fragment();
}

#[test]
#[should_panic = "scheme name must not be empty"]
fn empty_scheme_name_panics() {
    let _: Scheme = Scheme::new("");
}

#[test]
#[should_panic = "character 0 of scheme name \"1a\" must be ALPHA"]
fn scheme_name_must_start_with_alpha() {
    let _: Scheme = Scheme::new("1a");
}
