//! Containment and overlap tests over CIDR text.
//!
//! Each function validates the version tag, then every text argument in order, and
//! returns the first error unchanged.

use crate::error::IpError;
use crate::models::is_ip_version;
use crate::parse::{parse_address, parse_block};

/// True if block `outer` contains block `inner`.
///
/// # Examples
/// ```
/// use ipam_ip::{contains_cidr, IPV4};
/// assert!(contains_cidr(IPV4, "172.18.40.0/24", "172.18.40.0/25").unwrap());
/// assert!(!contains_cidr(IPV4, "172.18.40.0/25", "172.18.40.0/24").unwrap());
/// ```
pub fn contains_cidr(version: u8, outer: &str, inner: &str) -> Result<bool, IpError> {
    let version = is_ip_version(version)?;
    let outer = parse_block(version, outer)?;
    let inner = parse_block(version, inner)?;
    Ok(outer.contains(&inner))
}

/// True if `ip` lies within `subnet`.
pub fn contains_ip(version: u8, subnet: &str, ip: &str) -> Result<bool, IpError> {
    let version = is_ip_version(version)?;
    let subnet = parse_block(version, subnet)?;
    let ip = parse_address(version, ip)?;
    Ok(subnet.contains_addr(&ip))
}

/// True if blocks `a` and `b` share at least one address.
pub fn is_cidr_overlap(version: u8, a: &str, b: &str) -> Result<bool, IpError> {
    let version = is_ip_version(version)?;
    let a = parse_block(version, a)?;
    let b = parse_block(version, b)?;
    Ok(a.overlaps(&b))
}
