//! Dual-stack IP address and CIDR arithmetic for IP address management.
//!
//! String entry points take a numeric version tag ([`IPV4`] or [`IPV6`]) and validate it
//! before the text. Everything is a pure function of its inputs.

pub mod cli;
pub mod config;
mod error;
pub mod models;
pub mod output;
mod parse;
pub mod processing;

pub use error::IpError;
pub use models::{cmp_ip, is_ip_version, next_ip, prev_ip, Address, Block, IpVersion, IPV4, IPV6};
pub use parse::{
    is_cidr, is_ip, is_ipv4_cidr, is_ipv6_cidr, parse_address, parse_block, parse_cidr, parse_ip,
};
pub use processing::{
    contains_cidr, contains_ip, find_overlapping_cidrs, ips_diff_set, ips_intersection_set,
    ips_union_set, is_cidr_overlap,
};
