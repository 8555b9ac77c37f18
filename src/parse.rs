//! Address and CIDR text parsing.
//!
//! IPv4 text must be dotted-decimal and IPv6 text colon-hex. Text that is valid for the
//! other family is rejected rather than reinterpreted, and the IPv4-mapped IPv6 form
//! (`::ffff:a.b.c.d`) is not accepted as IPv6.

use crate::error::IpError;
use crate::models::{is_ip_version, Address, Block, IpVersion};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Parse a bare address literal of the given family.
pub fn parse_address(version: IpVersion, text: &str) -> Result<Address, IpError> {
    let parsed = match version {
        IpVersion::V4 => text.parse::<Ipv4Addr>().ok().map(Address::from),
        IpVersion::V6 => text
            .parse::<Ipv6Addr>()
            .ok()
            .filter(|ip| ip.to_ipv4_mapped().is_none())
            .map(Address::from),
    };
    parsed.ok_or_else(|| {
        log::debug!("invalid {version} address: {text:?}");
        IpError::InvalidIpFormat
    })
}

/// Parse an `address/prefixLength` literal of the given family into a masked [`Block`].
pub fn parse_block(version: IpVersion, text: &str) -> Result<Block, IpError> {
    let invalid = || {
        log::debug!("invalid {version} CIDR: {text:?}");
        IpError::InvalidCidrFormat
    };

    let (addr, len) = text.split_once('/').ok_or_else(invalid)?;
    let addr = parse_address(version, addr).map_err(|_| invalid())?;
    let len = parse_prefix_len(version, len).ok_or_else(invalid)?;
    Block::new(addr, len).map_err(|_| invalid())
}

/// Plain decimal, no sign, no leading zero, within the family width.
fn parse_prefix_len(version: IpVersion, text: &str) -> Option<u8> {
    if text.is_empty() || text.len() > 3 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if text.len() > 1 && text.starts_with('0') {
        return None;
    }
    let len: u16 = text.parse().ok()?;
    if len > version.bits() as u16 {
        return None;
    }
    Some(len as u8)
}

/// Parse an address (`as_cidr == false`) or a CIDR (`as_cidr == true`) of the given version.
///
/// A bare address yields a host block (`/32` or `/128`) holding the address itself.
/// A CIDR yields the network block, with host bits zeroed.
///
/// # Examples
/// ```
/// use ipam_ip::{parse_ip, IPV4};
/// let host = parse_ip(IPV4, "172.18.40.40", false).unwrap();
/// assert_eq!(host.to_string(), "172.18.40.40/32");
/// let net = parse_ip(IPV4, "172.18.40.40/24", true).unwrap();
/// assert_eq!(net.to_string(), "172.18.40.0/24");
/// ```
pub fn parse_ip(version: u8, text: &str, as_cidr: bool) -> Result<Block, IpError> {
    let version = is_ip_version(version)?;
    if as_cidr {
        parse_block(version, text)
    } else {
        parse_address(version, text).map(Block::host)
    }
}

/// Parse a CIDR of the given version into its network block.
pub fn parse_cidr(version: u8, text: &str) -> Result<Block, IpError> {
    let version = is_ip_version(version)?;
    parse_block(version, text)
}

/// Check that `text` is a CIDR of the given version.
pub fn is_cidr(version: u8, text: &str) -> Result<(), IpError> {
    parse_cidr(version, text).map(|_| ())
}

/// Check that `text` is a bare address of the given version.
pub fn is_ip(version: u8, text: &str) -> Result<(), IpError> {
    parse_ip(version, text, false).map(|_| ())
}

/// True if `text` is an IPv4 CIDR. Never errors.
pub fn is_ipv4_cidr(text: &str) -> bool {
    parse_block(IpVersion::V4, text).is_ok()
}

/// True if `text` is an IPv6 CIDR. Never errors.
pub fn is_ipv6_cidr(text: &str) -> bool {
    parse_block(IpVersion::V6, text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IPV4, IPV6};

    const INVALID_IP_VERSION: u8 = 5;
    const INVALID_IP: &str = "invalidIP";
    const INVALID_CIDR: &str = "invalidCIDR";

    fn addr(s: &str) -> Address {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_ip_invalid_version() {
        assert_eq!(
            parse_ip(INVALID_IP_VERSION, "172.18.40.40", false).unwrap_err(),
            IpError::InvalidIpVersion
        );
        assert_eq!(
            parse_ip(INVALID_IP_VERSION, "172.18.40.40/24", true).unwrap_err(),
            IpError::InvalidIpVersion
        );
        // version is checked before the text
        assert_eq!(
            parse_ip(INVALID_IP_VERSION, INVALID_IP, false).unwrap_err(),
            IpError::InvalidIpVersion
        );
    }

    #[test]
    fn test_parse_ip_invalid_text() {
        assert_eq!(
            parse_ip(IPV4, INVALID_IP, false).unwrap_err(),
            IpError::InvalidIpFormat
        );
        assert_eq!(
            parse_ip(IPV4, INVALID_CIDR, true).unwrap_err(),
            IpError::InvalidCidrFormat
        );
        assert_eq!(
            parse_ip(IPV4, "172.18.40.40/24", false).unwrap_err(),
            IpError::InvalidIpFormat
        );
        assert_eq!(
            parse_ip(IPV4, "172.18.40.40", true).unwrap_err(),
            IpError::InvalidCidrFormat
        );
    }

    #[test]
    fn test_parse_ip_address() {
        let b = parse_ip(IPV4, "172.18.40.40", false).unwrap();
        assert_eq!(b.addr(), addr("172.18.40.40"));
        assert_eq!(b.prefix_len(), 32);

        let b = parse_ip(IPV6, "abcd:1234::1", false).unwrap();
        assert_eq!(b.addr(), addr("abcd:1234::1"));
        assert_eq!(b.prefix_len(), 128);
    }

    #[test]
    fn test_parse_ip_cidr() {
        let b = parse_ip(IPV4, "172.18.40.40/24", true).unwrap();
        assert_eq!(b.addr(), addr("172.18.40.0"));
        assert_eq!(b.prefix_len(), 24);

        let b = parse_ip(IPV6, "abcd:1234::1/120", true).unwrap();
        assert_eq!(b.addr(), addr("abcd:1234::"));
        assert_eq!(b.prefix_len(), 120);
    }

    #[test]
    fn test_parse_cidr() {
        assert_eq!(
            parse_cidr(INVALID_IP_VERSION, "172.18.40.40/24").unwrap_err(),
            IpError::InvalidIpVersion
        );
        assert_eq!(
            parse_cidr(IPV4, INVALID_CIDR).unwrap_err(),
            IpError::InvalidCidrFormat
        );

        let b = parse_cidr(IPV4, "172.18.40.40/24").unwrap();
        assert_eq!(b.addr(), addr("172.18.40.0"));
        assert_eq!(b.prefix_len(), 24);
        assert_eq!(b.addr().octets().len(), 4);

        let b = parse_cidr(IPV6, "abcd:1234::1/120").unwrap();
        assert_eq!(b.addr(), addr("abcd:1234::0"));
        assert_eq!(b.prefix_len(), 120);
        assert_eq!(b.addr().octets().len(), 16);
    }

    #[test]
    fn test_cross_family_text_is_rejected() {
        assert_eq!(
            parse_ip(IPV4, "abcd:1234::1", false).unwrap_err(),
            IpError::InvalidIpFormat
        );
        assert_eq!(
            parse_ip(IPV6, "172.18.40.40", false).unwrap_err(),
            IpError::InvalidIpFormat
        );
        assert_eq!(
            parse_ip(IPV6, "::ffff:172.18.40.40", false).unwrap_err(),
            IpError::InvalidIpFormat
        );
        assert_eq!(
            parse_cidr(IPV4, "abcd:1234::/120").unwrap_err(),
            IpError::InvalidCidrFormat
        );
        assert_eq!(
            parse_cidr(IPV6, "172.18.40.0/24").unwrap_err(),
            IpError::InvalidCidrFormat
        );
    }

    #[test]
    fn test_prefix_len_rules() {
        assert!(parse_cidr(IPV4, "10.0.0.0/0").is_ok());
        assert!(parse_cidr(IPV4, "10.0.0.0/32").is_ok());
        assert!(parse_cidr(IPV6, "::/128").is_ok());
        for bad in [
            "10.0.0.0/33",
            "10.0.0.0/",
            "10.0.0.0/-1",
            "10.0.0.0/+8",
            "10.0.0.0/08",
            "10.0.0.0/ 8",
            "10.0.0.0/8 ",
            "10.0.0.0/8/8",
            "10.0.0.0/1000",
            "/8",
        ] {
            assert_eq!(
                parse_cidr(IPV4, bad).unwrap_err(),
                IpError::InvalidCidrFormat,
                "{bad:?} should be rejected"
            );
        }
        assert_eq!(
            parse_cidr(IPV6, "::/129").unwrap_err(),
            IpError::InvalidCidrFormat
        );
    }

    #[test]
    fn test_literal_syntax() {
        for bad in ["", " 10.0.0.1", "10.0.0.1 ", "10.0.0", "10.0.0.256", "010.0.0.1", "10.0.0.1.1"] {
            assert_eq!(is_ip(IPV4, bad).unwrap_err(), IpError::InvalidIpFormat, "{bad:?}");
        }
        for bad in ["", "abcd::1::2", "abcd:12345::1", "abcd:1234::1%eth0", "g::1"] {
            assert_eq!(is_ip(IPV6, bad).unwrap_err(), IpError::InvalidIpFormat, "{bad:?}");
        }
        assert!(is_ip(IPV6, "::").is_ok());
        assert!(is_ip(IPV6, "ABCD:1234:0:0:0:0:0:1").is_ok());
        assert!(is_ip(IPV6, "::1.2.3.4").is_ok());
    }

    #[test]
    fn test_is_cidr() {
        assert_eq!(
            is_cidr(INVALID_IP_VERSION, "172.18.40.0/24").unwrap_err(),
            IpError::InvalidIpVersion
        );
        assert_eq!(
            is_cidr(IPV4, INVALID_CIDR).unwrap_err(),
            IpError::InvalidCidrFormat
        );
        assert!(is_cidr(IPV4, "172.18.40.0/24").is_ok());
        assert!(is_cidr(IPV6, "abcd:1234::/120").is_ok());
    }

    #[test]
    fn test_is_ip() {
        assert_eq!(
            is_ip(INVALID_IP_VERSION, "172.18.40.40").unwrap_err(),
            IpError::InvalidIpVersion
        );
        assert_eq!(is_ip(IPV4, INVALID_IP).unwrap_err(), IpError::InvalidIpFormat);
        assert!(is_ip(IPV4, "172.18.40.40").is_ok());
        assert!(is_ip(IPV6, "abcd:1234::1").is_ok());
    }

    #[test]
    fn test_is_ipv4_cidr() {
        assert!(!is_ipv4_cidr(INVALID_CIDR));
        assert!(is_ipv4_cidr("172.18.40.0/24"));
        assert!(!is_ipv4_cidr("172.18.40.0"));
        assert!(!is_ipv4_cidr("abcd:1234::/120"));
    }

    #[test]
    fn test_is_ipv6_cidr() {
        assert!(!is_ipv6_cidr(INVALID_CIDR));
        assert!(is_ipv6_cidr("abcd:1234::/120"));
        assert!(!is_ipv6_cidr("abcd:1234::"));
        assert!(!is_ipv6_cidr("172.18.40.0/24"));
    }

    #[test]
    fn test_round_trip_through_canonical_text() {
        for text in ["172.18.40.40", "0.0.0.0", "255.255.255.255"] {
            let a = parse_address(IpVersion::V4, text).unwrap();
            assert_eq!(parse_address(IpVersion::V4, &a.to_string()).unwrap(), a);
        }
        for text in ["abcd:1234:0:0:0:0:0:1", "::", "ABCD::00ff", "1:2:3:4:5:6:7:8"] {
            let a = parse_address(IpVersion::V6, text).unwrap();
            assert_eq!(parse_address(IpVersion::V6, &a.to_string()).unwrap(), a);
        }
    }
}
