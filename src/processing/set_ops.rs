//! Set algebra over address lists.
//!
//! Outputs keep the first-seen order of the left operand and contain no duplicates.
//! Membership uses the same equality as [`cmp_ip`](crate::models::cmp_ip).

use crate::models::Address;
use std::collections::HashSet;

/// Addresses of `a` that are not in `b`.
///
/// # Examples
/// ```
/// use ipam_ip::{ips_diff_set, Address};
/// let a: Vec<Address> = vec!["172.18.40.1".parse().unwrap(), "172.18.40.2".parse().unwrap()];
/// let b: Vec<Address> = vec!["172.18.40.2".parse().unwrap(), "172.18.40.3".parse().unwrap()];
/// assert_eq!(ips_diff_set(&a, &b), vec!["172.18.40.1".parse::<Address>().unwrap()]);
/// ```
pub fn ips_diff_set(a: &[Address], b: &[Address]) -> Vec<Address> {
    let exclude: HashSet<&Address> = b.iter().collect();
    let mut seen = HashSet::new();
    a.iter()
        .filter(|ip| !exclude.contains(ip) && seen.insert(**ip))
        .copied()
        .collect()
}

/// Addresses in `a` or `b`: those of `a` in order, then those only in `b`.
pub fn ips_union_set(a: &[Address], b: &[Address]) -> Vec<Address> {
    let mut seen = HashSet::new();
    a.iter()
        .chain(b.iter())
        .filter(|ip| seen.insert(**ip))
        .copied()
        .collect()
}

/// Addresses in both `a` and `b`, in `a`'s order.
pub fn ips_intersection_set(a: &[Address], b: &[Address]) -> Vec<Address> {
    let keep: HashSet<&Address> = b.iter().collect();
    let mut seen = HashSet::new();
    a.iter()
        .filter(|ip| keep.contains(ip) && seen.insert(**ip))
        .copied()
        .collect()
}
