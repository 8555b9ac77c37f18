//! Fixed-width binary IP addresses.
//!
//! [`Address`] keeps an address in its family's width (4 or 16 bytes). Comparison,
//! masking and stepping all work on those bytes directly, so IPv6 never goes through
//! native 128-bit arithmetic and wraparound follows the family width.

use super::IpVersion;
use crate::error::IpError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// A single host address, stored in its family's canonical width.
#[derive(Debug, Copy, Clone)]
pub enum Address {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl Address {
    /// Family of this address.
    pub fn version(&self) -> IpVersion {
        match self {
            Address::V4(_) => IpVersion::V4,
            Address::V6(_) => IpVersion::V6,
        }
    }

    /// Raw big-endian bytes, 4 or 16 long.
    pub fn octets(&self) -> &[u8] {
        match self {
            Address::V4(b) => &b[..],
            Address::V6(b) => &b[..],
        }
    }

    /// 16-byte key used for equality, hashing and ordering.
    ///
    /// IPv4 is projected to the IPv4-mapped IPv6 form (`::ffff:a.b.c.d`).
    pub fn canonical(&self) -> [u8; 16] {
        match self {
            Address::V4(b) => Ipv4Addr::from(*b).to_ipv6_mapped().octets(),
            Address::V6(b) => *b,
        }
    }

    /// Arithmetic successor. Wraps from the family maximum to all zeros.
    pub fn next(&self) -> Address {
        let mut out = *self;
        increment(out.octets_mut());
        out
    }

    /// Arithmetic predecessor. Wraps from all zeros to the family maximum.
    pub fn prev(&self) -> Address {
        let mut out = *self;
        decrement(out.octets_mut());
        out
    }

    /// Zero every bit after the first `prefix_len` bits.
    ///
    /// A `prefix_len` at or above the family width returns the address unchanged.
    pub fn mask(&self, prefix_len: u8) -> Address {
        let mut out = *self;
        let prefix_len = prefix_len as usize;
        for (i, byte) in out.octets_mut().iter_mut().enumerate() {
            let start = i * 8;
            if prefix_len <= start {
                *byte = 0;
            } else if prefix_len < start + 8 {
                *byte &= 0xffu8 << (8 - (prefix_len - start));
            }
        }
        out
    }

    /// Set every bit after the first `prefix_len` bits.
    pub fn fill_host_bits(&self, prefix_len: u8) -> Address {
        let mut out = *self;
        let prefix_len = prefix_len as usize;
        for (i, byte) in out.octets_mut().iter_mut().enumerate() {
            let start = i * 8;
            if prefix_len <= start {
                *byte = 0xff;
            } else if prefix_len < start + 8 {
                *byte |= 0xffu8 >> (prefix_len - start);
            }
        }
        out
    }

    /// True for `0.0.0.0` and `::`.
    pub fn is_zero(&self) -> bool {
        self.octets().iter().all(|b| *b == 0)
    }

    /// True for `255.255.255.255` and `ffff:...:ffff`.
    pub fn is_max(&self) -> bool {
        self.octets().iter().all(|b| *b == 0xff)
    }

    fn octets_mut(&mut self) -> &mut [u8] {
        match self {
            Address::V4(b) => &mut b[..],
            Address::V6(b) => &mut b[..],
        }
    }
}

/// Add one to a big-endian unsigned integer, carrying across bytes.
fn increment(bytes: &mut [u8]) {
    for byte in bytes.iter_mut().rev() {
        let (value, carry) = byte.overflowing_add(1);
        *byte = value;
        if !carry {
            return;
        }
    }
}

/// Subtract one from a big-endian unsigned integer, borrowing across bytes.
fn decrement(bytes: &mut [u8]) {
    for byte in bytes.iter_mut().rev() {
        let (value, borrow) = byte.overflowing_sub(1);
        *byte = value;
        if !borrow {
            return;
        }
    }
}

/// Compare two addresses as unsigned big-endian byte strings.
///
/// # Examples
/// ```
/// use ipam_ip::{cmp_ip, Address};
/// use std::cmp::Ordering;
/// let a: Address = "172.18.40.1".parse().unwrap();
/// let b: Address = "172.18.40.2".parse().unwrap();
/// assert_eq!(cmp_ip(&a, &b), Ordering::Less);
/// ```
pub fn cmp_ip(a: &Address, b: &Address) -> Ordering {
    match (a, b) {
        (Address::V4(x), Address::V4(y)) => x.cmp(y),
        (Address::V6(x), Address::V6(y)) => x.cmp(y),
        _ => a.canonical().cmp(&b.canonical()),
    }
}

/// The address after `ip`, wrapping at the family maximum.
pub fn next_ip(ip: &Address) -> Address {
    ip.next()
}

/// The address before `ip`, wrapping at zero.
pub fn prev_ip(ip: &Address) -> Address {
    ip.prev()
}

impl PartialEq for Address {
    fn eq(&self, other: &Address) -> bool {
        cmp_ip(self, other) == Ordering::Equal
    }
}

impl Eq for Address {}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Address) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Address) -> Ordering {
        cmp_ip(self, other)
    }
}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Address {
        Address::V4(ip.octets())
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Address {
        Address::V6(ip.octets())
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Address {
        match ip {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(ip: Address) -> IpAddr {
        match ip {
            Address::V4(b) => IpAddr::V4(Ipv4Addr::from(b)),
            Address::V6(b) => IpAddr::V6(Ipv6Addr::from(b)),
        }
    }
}

impl FromStr for Address {
    type Err = IpError;

    /// Parse an address literal, taking the family from the text itself.
    fn from_str(s: &str) -> Result<Address, IpError> {
        let version = if s.contains(':') {
            IpVersion::V6
        } else {
            IpVersion::V4
        };
        crate::parse::parse_address(version, s)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", IpAddr::from(*self))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_str(&s).map_err(|_| de::Error::custom(format!("invalid IP address: {s}")))
    }
}
