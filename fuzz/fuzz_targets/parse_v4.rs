#![no_main]
use libfuzzer_sys::fuzz_target;
use std::{net::Ipv4Addr, str::FromStr};
use urin_fuzz::{parse_host, to_ipv4};

fuzz_target!(|data: &str| {
    if data.contains(['/', '?', '#', '@', ':', '%']) {
        return;
    }
    let host = parse_host(data);
    assert_eq!(
        host.as_ref().and_then(to_ipv4),
        Ipv4Addr::from_str(data).ok()
    );
});
