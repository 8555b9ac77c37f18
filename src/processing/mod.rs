//! Operations over parsed addresses and blocks.
//!
//! - [`predicates`] - containment and overlap tests on CIDR text
//! - [`set_ops`] - difference, union and intersection of address lists
//! - [`overlap`] - pairwise overlap report for a list of CIDRs

mod overlap;
mod predicates;
mod set_ops;

// Re-export public functions
pub use overlap::{find_overlapping_cidrs, log_overlapping_cidrs, OverlapConflict, OverlapKind};
pub use predicates::{contains_cidr, contains_ip, is_cidr_overlap};
pub use set_ops::{ips_diff_set, ips_intersection_set, ips_union_set};
