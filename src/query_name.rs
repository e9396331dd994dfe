//! Lookup name synthesis.
//!
//! DNSBLs are queried with the reversed octets of an IPv4 address prepended
//! to the list zone; SURBLs with the hostname prepended as-is. Names are
//! always absolute (trailing dot) so resolver search domains never apply.

use crate::address::Classification;
use crate::error::QueryNameError;
use std::net::{IpAddr, Ipv4Addr};

/// Reverse an IPv4 address: `127.0.0.2` becomes `2.0.0.127`.
pub fn reverse_ipv4(ip: &Ipv4Addr) -> String {
    let octets = ip.octets();
    format!("{}.{}.{}.{}", octets[3], octets[2], octets[1], octets[0])
}

/// Build the absolute query name for `address` on `list_host`.
///
/// IPv6 literals are rejected rather than queried under a malformed name.
pub fn build_query_name(
    address: &str,
    classification: Classification,
    list_host: &str,
) -> Result<String, QueryNameError> {
    match classification {
        Classification::IpLiteral(IpAddr::V4(ipv4)) => {
            Ok(format!("{}.{}.", reverse_ipv4(&ipv4), list_host))
        }
        Classification::IpLiteral(IpAddr::V6(_)) => Err(QueryNameError::Ipv6Unsupported),
        Classification::Hostname => Ok(format!("{}.{}.", address, list_host)),
        Classification::Invalid => Err(QueryNameError::InvalidAddress),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::classify;

    fn name_for(address: &str, list: &str) -> Result<String, QueryNameError> {
        build_query_name(address, classify(address), list)
    }

    #[test]
    fn test_reverse_ipv4() {
        assert_eq!(reverse_ipv4(&Ipv4Addr::new(1, 2, 3, 4)), "4.3.2.1");
        assert_eq!(reverse_ipv4(&Ipv4Addr::new(192, 168, 1, 100)), "100.1.168.192");
    }

    #[test]
    fn ipv4_is_reversed_and_absolute() {
        assert_eq!(
            name_for("127.0.0.2", "sbl.spamhaus.org").unwrap(),
            "2.0.0.127.sbl.spamhaus.org."
        );
        assert_eq!(
            name_for("212.112.226.205", "bl.spamcop.net").unwrap(),
            "205.226.112.212.bl.spamcop.net."
        );
    }

    #[test]
    fn hostname_is_prepended_verbatim() {
        assert_eq!(
            name_for("dbltest.com", "dbl.spamhaus.org").unwrap(),
            "dbltest.com.dbl.spamhaus.org."
        );
    }

    #[test]
    fn ipv6_is_rejected() {
        assert_eq!(
            name_for("2001:db8::1", "sbl.spamhaus.org"),
            Err(QueryNameError::Ipv6Unsupported)
        );
    }

    #[test]
    fn invalid_is_rejected() {
        assert_eq!(
            build_query_name("", Classification::Invalid, "sbl.spamhaus.org"),
            Err(QueryNameError::InvalidAddress)
        );
    }
}
