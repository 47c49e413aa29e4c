use urin::{Urin, UrinReference};

trait Test {
    fn pass(&self, r: &str, res: &str);
}

impl Test for Urin {
    #[track_caller]
    fn pass(&self, r: &str, expected: &str) {
        let r: UrinReference = r.parse().unwrap();
        let resolved = self.resolve(&r);
        assert_eq!(resolved.to_string(), expected);
        assert_eq!(resolved, expected.parse::<Urin>().unwrap());
    }
}

#[test]
fn resolve() {
    // Examples from Section 5.4 of RFC 3986.
    let base: Urin = "http://a/b/c/d;p?q".parse().unwrap();

    base.pass("g:h", "g:h");
    base.pass("g", "http://a/b/c/g");
    base.pass("./g", "http://a/b/c/g");
    base.pass("g/", "http://a/b/c/g/");
    base.pass("/g", "http://a/g");
    base.pass("//g", "http://g");
    base.pass("?y", "http://a/b/c/d;p?y");
    base.pass("g?y", "http://a/b/c/g?y");
    base.pass("#s", "http://a/b/c/d;p?q#s");
    base.pass("g#s", "http://a/b/c/g#s");
    base.pass("g?y#s", "http://a/b/c/g?y#s");
    base.pass(";x", "http://a/b/c/;x");
    base.pass("g;x", "http://a/b/c/g;x");
    base.pass("g;x?y#s", "http://a/b/c/g;x?y#s");
    base.pass("", "http://a/b/c/d;p?q");
    base.pass(".", "http://a/b/c/");
    base.pass("./", "http://a/b/c/");
    base.pass("..", "http://a/b/");
    base.pass("../", "http://a/b/");
    base.pass("../g", "http://a/b/g");
    base.pass("../..", "http://a/");
    base.pass("../../", "http://a/");
    base.pass("../../g", "http://a/g");

    base.pass("../../../g", "http://a/g");
    base.pass("../../../../g", "http://a/g");
    base.pass("/./g", "http://a/g");
    base.pass("/../g", "http://a/g");
    base.pass("g.", "http://a/b/c/g.");
    base.pass(".g", "http://a/b/c/.g");
    base.pass("g..", "http://a/b/c/g..");
    base.pass("..g", "http://a/b/c/..g");

    base.pass("./../g", "http://a/b/g");
    base.pass("./g/.", "http://a/b/c/g/");
    base.pass("g/./h", "http://a/b/c/g/h");
    base.pass("g/../h", "http://a/b/c/h");
    base.pass("g;x=1/./y", "http://a/b/c/g;x=1/y");
    base.pass("g;x=1/../y", "http://a/b/c/y");

    base.pass("g?y/./x", "http://a/b/c/g?y/./x");
    base.pass("g?y/../x", "http://a/b/c/g?y/../x");
    base.pass("g#s/./x", "http://a/b/c/g#s/./x");
    base.pass("g#s/../x", "http://a/b/c/g#s/../x");

    // A URI resolves to itself, even with the scheme of the base.
    base.pass("http:g", "http:g");

    // Non-hierarchical base URI.
    let base: Urin = "foo:bar".parse().unwrap();

    base.pass("", "foo:bar");
    base.pass("#baz", "foo:bar#baz");
    base.pass("baz", "foo:baz");
    base.pass("http://example.com/", "http://example.com/");
    base.pass("bar:baz", "bar:baz");

    let base: Urin = "foo:/".parse().unwrap();
    base.pass(".//@@", "foo:/.//@@");

    let base: Urin = "foo:/bar/..".parse().unwrap();
    base.pass(".", "foo:/");
}

#[test]
fn resolve_child() {
    let base: Urin = "http://www.example.com/child-1".parse().unwrap();
    base.pass(
        "../child-2?extra-query",
        "http://www.example.com/child-2?extra-query",
    );
    base.pass("child-2#frag", "http://www.example.com/child-2#frag");
}

#[test]
fn fragment_comes_from_reference() {
    let base: Urin = "http://a/b?q#f".parse().unwrap();
    base.pass("", "http://a/b?q");
    base.pass("c", "http://a/c");
    base.pass("#g", "http://a/b?q#g");
}

#[test]
fn merge_with_empty_path_of_authority() {
    let base: Urin = "http://a".parse().unwrap();
    base.pass("b", "http://a/b");
    base.pass("./b/../c", "http://a/c");
    base.pass("?x", "http://a?x");
}

#[test]
fn resolving_against_self_is_fixed_point() {
    for s in [
        "http://a/b/c/d;p?q",
        "foo:bar#baz",
        "file:///etc/hosts",
        "s:.//a",
        "mailto:someone@example.com",
    ] {
        let urin: Urin = s.parse().unwrap();
        let reference = UrinReference::from(urin.clone());
        assert_eq!(urin.resolve(&reference), urin);
    }
}
