//! IP version tag validation.

use crate::error::IpError;
use serde::{Deserialize, Serialize};

/// Numeric tag for IPv4, as carried by pool and subnet objects.
pub const IPV4: u8 = 4;
/// Numeric tag for IPv6.
pub const IPV6: u8 = 6;

/// The two supported address families.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    /// Address width in bits (32 or 128).
    pub fn bits(self) -> u8 {
        match self {
            IpVersion::V4 => 32,
            IpVersion::V6 => 128,
        }
    }

    /// Address width in bytes (4 or 16).
    pub fn octets(self) -> usize {
        self.bits() as usize / 8
    }
}

impl TryFrom<u8> for IpVersion {
    type Error = IpError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            IPV4 => Ok(IpVersion::V4),
            IPV6 => Ok(IpVersion::V6),
            _ => Err(IpError::InvalidIpVersion),
        }
    }
}

impl From<IpVersion> for u8 {
    fn from(version: IpVersion) -> u8 {
        match version {
            IpVersion::V4 => IPV4,
            IpVersion::V6 => IPV6,
        }
    }
}

impl std::fmt::Display for IpVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            IpVersion::V4 => write!(f, "IPv4"),
            IpVersion::V6 => write!(f, "IPv6"),
        }
    }
}

/// Check that `version` is one of [`IPV4`] or [`IPV6`].
///
/// # Examples
/// ```
/// use ipam_ip::{is_ip_version, IpError, IpVersion};
/// assert_eq!(is_ip_version(4), Ok(IpVersion::V4));
/// assert_eq!(is_ip_version(5), Err(IpError::InvalidIpVersion));
/// ```
pub fn is_ip_version(version: u8) -> Result<IpVersion, IpError> {
    IpVersion::try_from(version).map_err(|e| {
        log::trace!("rejected IP version tag {version}");
        e
    })
}
