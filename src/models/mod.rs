//! Address models.
//!
//! - [`IpVersion`] - the IPv4/IPv6 family tag and its validation
//! - [`Address`] - fixed-width host address with ordering and stepping
//! - [`Block`] - CIDR block with containment and overlap tests

mod address;
mod block;
mod version;

// Re-export public types
pub use address::{cmp_ip, next_ip, prev_ip, Address};
pub use block::Block;
pub use version::{is_ip_version, IpVersion, IPV4, IPV6};
