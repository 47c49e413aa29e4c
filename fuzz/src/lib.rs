use std::net::{Ipv4Addr, Ipv6Addr};
use urin::{host::Host, RelativeReference};

/// Parses a host through a network-path reference, so that the authority
/// splitting is exercised too.
pub fn parse_host(s: &str) -> Option<Host> {
    let r: RelativeReference = format!("//user@{s}:81/").parse().ok()?;
    Some(r.authority_opt()?.host().clone())
}

pub fn to_ipv4(host: &Host) -> Option<Ipv4Addr> {
    match host {
        Host::Ipv4(x) => Some(Ipv4Addr::from(x.map(|o| o.value()))),
        _ => None,
    }
}

pub fn to_ipv6(host: &Host) -> Option<Ipv6Addr> {
    match host {
        Host::Ipv6(x) => Some(Ipv6Addr::from(x.map(|h| h.value()))),
        Host::Ipv6WithIpv4(x, [a, b, c, d]) => {
            let [x0, x1, x2, x3, x4, x5] = x.map(|h| h.value());
            let hi = u16::from_be_bytes([a.value(), b.value()]);
            let lo = u16::from_be_bytes([c.value(), d.value()]);
            Some(Ipv6Addr::from([x0, x1, x2, x3, x4, x5, hi, lo]))
        }
        _ => None,
    }
}
