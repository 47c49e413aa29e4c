#![no_main]
use libfuzzer_sys::fuzz_target;
use urin::{
    component::{Fragment, Query},
    path::{Path, Segment},
    Scheme, Urin,
};

fuzz_target!(|data: (bool, Vec<String>, Option<String>, Option<String>)| {
    let (absolute, values, query, fragment) = data;
    let segments: Vec<Segment> = values.into_iter().map(Segment::segment).collect();
    let path = if absolute {
        Path::absolute(segments)
    } else {
        Path::rootless(segments)
    };

    let scheme: Scheme = Scheme::new("fuzz");
    let u1 = scheme.urin(
        None,
        path,
        query.map(Query::new),
        fragment.map(Fragment::new),
    );
    let u2: Urin = u1.to_string().parse().unwrap();
    assert_eq!(u1, u2);
});
