#![no_main]
use libfuzzer_sys::fuzz_target;
use urin::UrinReference;

fuzz_target!(|data: &str| {
    let Ok(r) = data.parse::<UrinReference>() else {
        return;
    };
    let written = r.to_string();
    let reread: UrinReference = written.parse().unwrap();
    assert_eq!(r, reread);
    assert_eq!(written, reread.to_string());
});
