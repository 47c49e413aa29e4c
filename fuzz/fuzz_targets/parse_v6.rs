#![no_main]
use libfuzzer_sys::fuzz_target;
use std::{net::Ipv6Addr, str::FromStr};
use urin_fuzz::{parse_host, to_ipv6};

fuzz_target!(|data: &str| {
    let host = parse_host(&format!("[{data}]"));
    assert_eq!(
        host.as_ref().and_then(to_ipv6),
        Ipv6Addr::from_str(data).ok()
    );
});
