//! Error kinds returned by address and CIDR operations.
//!
//! Every string entry point checks the IP version tag first and then the text format,
//! returning the first failure as-is so callers can match on the kind.

use thiserror::Error;

/// Validation failure for an IP version tag, address literal or CIDR literal.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpError {
    /// The version tag is neither IPv4 nor IPv6.
    #[error("invalid IP version")]
    InvalidIpVersion,

    /// The text is not an address literal of the declared version.
    #[error("invalid IP format")]
    InvalidIpFormat,

    /// The text is not a CIDR literal of the declared version, or its prefix length is out of range.
    #[error("invalid CIDR format")]
    InvalidCidrFormat,
}
