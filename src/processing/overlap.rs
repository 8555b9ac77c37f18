//! Overlapping CIDR detection.
//!
//! Checks every pair in a list of CIDRs and reports the pairs that share addresses,
//! e.g. to catch a new pool subnet that collides with the existing ones.

use crate::error::IpError;
use crate::models::{is_ip_version, Block};
use crate::parse::parse_block;
use itertools::Itertools;
use serde::Serialize;

/// How the two blocks of a conflict relate.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverlapKind {
    /// Same network and prefix.
    Equal,
    /// The first block contains the second.
    Contains,
    /// The first block lies inside the second.
    ContainedBy,
}

/// A pair of overlapping CIDRs, by position in the input list.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OverlapConflict {
    pub first_index: usize,
    pub first: Block,
    pub second_index: usize,
    pub second: Block,
    pub kind: OverlapKind,
}

/// Find all overlapping pairs among `cidrs`.
///
/// Pairs are reported in input order (`first_index < second_index`). Any CIDR that is not
/// of the given version fails the whole call.
///
/// # Arguments
/// * `version` - IP version tag, [`IPV4`](crate::IPV4) or [`IPV6`](crate::IPV6)
/// * `cidrs` - The CIDR literals to check
///
/// # Returns
/// A list of overlap conflicts found
pub fn find_overlapping_cidrs(
    version: u8,
    cidrs: &[&str],
) -> Result<Vec<OverlapConflict>, IpError> {
    let version = is_ip_version(version)?;
    let blocks = cidrs
        .iter()
        .map(|s| parse_block(version, s))
        .collect::<Result<Vec<Block>, IpError>>()?;

    let conflicts = blocks
        .iter()
        .enumerate()
        .tuple_combinations()
        .filter(|((_, a), (_, b))| a.overlaps(b))
        .map(|((i, a), (j, b))| OverlapConflict {
            first_index: i,
            first: *a,
            second_index: j,
            second: *b,
            kind: if a == b {
                OverlapKind::Equal
            } else if a.contains(b) {
                OverlapKind::Contains
            } else {
                OverlapKind::ContainedBy
            },
        })
        .collect();

    Ok(conflicts)
}

/// Log overlapping CIDR conflicts as warnings.
pub fn log_overlapping_cidrs(conflicts: &[OverlapConflict]) {
    if conflicts.is_empty() {
        log::info!("No overlapping CIDRs found.");
        return;
    }

    log::warn!("Found {} overlapping CIDR pair(s):", conflicts.len());
    for c in conflicts {
        log::warn!(
            "  #{} {} {} #{} {}",
            c.first_index,
            c.first,
            match c.kind {
                OverlapKind::Equal => "equals",
                OverlapKind::Contains => "contains",
                OverlapKind::ContainedBy => "is inside",
            },
            c.second_index,
            c.second
        );
    }
}
