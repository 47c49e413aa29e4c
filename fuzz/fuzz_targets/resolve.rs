#![no_main]
use libfuzzer_sys::fuzz_target;
use urin::{Urin, UrinReference};

fuzz_target!(|data: (&str, &str)| {
    let (Ok(base), Ok(r)) = (data.0.parse::<Urin>(), data.1.parse::<UrinReference>()) else {
        return;
    };

    let u1 = base.resolve(&r);
    let u2: Urin = u1.to_string().parse().unwrap();
    assert_eq!(u1, u2);

    // The fragment always comes from the reference.
    let fragment = match &r {
        UrinReference::Urin(u) => u.fragment_opt(),
        UrinReference::RelativeReference(rel) => rel.fragment_opt(),
    };
    assert_eq!(u1.fragment_opt(), fragment);
});
