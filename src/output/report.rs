//! Summary of a CIDR list for display.

use crate::error::IpError;
use crate::models::{is_ip_version, Address, Block, IpVersion};
use crate::parse::parse_block;
use crate::processing::{find_overlapping_cidrs, OverlapConflict};
use serde::Serialize;

/// One input CIDR with its address range.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BlockSummary {
    /// CIDR as given, masked to its network.
    pub cidr: Block,
    pub version: IpVersion,
    /// Network address.
    pub first: Address,
    /// Highest address (broadcast for IPv4).
    pub last: Address,
    /// Adjacent block of the same size, if the family has room for one.
    pub next: Option<Block>,
}

/// Everything printed for one run: the blocks and any overlaps between them.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub blocks: Vec<BlockSummary>,
    pub conflicts: Vec<OverlapConflict>,
}

impl Report {
    /// Parse `cidrs` as the given version and summarize them.
    pub fn build(version: u8, cidrs: &[&str]) -> Result<Report, IpError> {
        let family = is_ip_version(version)?;
        let blocks = cidrs
            .iter()
            .map(|s| {
                parse_block(family, s).map(|b| BlockSummary {
                    cidr: b,
                    version: family,
                    first: b.first(),
                    last: b.last(),
                    next: b.next_block(),
                })
            })
            .collect::<Result<Vec<BlockSummary>, IpError>>()?;
        let conflicts = find_overlapping_cidrs(version, cidrs)?;
        Ok(Report { blocks, conflicts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IPV4;

    #[test]
    fn test_build_report() {
        let report = Report::build(IPV4, &["10.1.1.5/28", "10.1.1.0/24"]).unwrap();
        assert_eq!(report.blocks.len(), 2);
        let first = &report.blocks[0];
        assert_eq!(first.cidr.to_string(), "10.1.1.0/28");
        assert_eq!(first.last.to_string(), "10.1.1.15");
        assert_eq!(first.next.unwrap().to_string(), "10.1.1.16/28");
        assert_eq!(report.conflicts.len(), 1, "/28 lies inside the /24");
    }

    #[test]
    fn test_build_report_rejects_bad_input() {
        assert_eq!(Report::build(9, &["10.0.0.0/8"]), Err(IpError::InvalidIpVersion));
        assert_eq!(
            Report::build(IPV4, &["10.0.0.0/8", "nope"]),
            Err(IpError::InvalidCidrFormat)
        );
    }
}
