//! CIDR blocks.

use super::{Address, IpVersion};
use crate::error::IpError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// A network range: masked base address plus prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Block {
    base: Address,
    prefix_len: u8,
}

impl Block {
    /// Build a block from any address inside it, zeroing the host bits.
    pub fn new(addr: Address, prefix_len: u8) -> Result<Block, IpError> {
        if prefix_len > addr.version().bits() {
            return Err(IpError::InvalidCidrFormat);
        }
        Ok(Block {
            base: addr.mask(prefix_len),
            prefix_len,
        })
    }

    /// A single-address block (`/32` or `/128`).
    pub fn host(addr: Address) -> Block {
        Block {
            base: addr,
            prefix_len: addr.version().bits(),
        }
    }

    pub fn version(&self) -> IpVersion {
        self.base.version()
    }

    /// Network (base) address.
    pub fn addr(&self) -> Address {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Lowest address in the block.
    pub fn first(&self) -> Address {
        self.base
    }

    /// Highest address in the block (the IPv4 broadcast address).
    pub fn last(&self) -> Address {
        self.base.fill_host_bits(self.prefix_len)
    }

    /// The adjacent block with the same prefix length.
    ///
    /// Returns `None` if this block already ends at the family's maximum address.
    pub fn next_block(&self) -> Option<Block> {
        let last = self.last();
        if last.is_max() {
            return None;
        }
        Some(Block {
            base: last.next(),
            prefix_len: self.prefix_len,
        })
    }

    /// True if every address of `other` lies inside `self`.
    ///
    /// A block contains itself; it never contains a block with a shorter prefix.
    pub fn contains(&self, other: &Block) -> bool {
        self.version() == other.version()
            && other.prefix_len >= self.prefix_len
            && other.base.mask(self.prefix_len) == self.base
    }

    /// True if `addr` masked to this block's prefix is the block's base.
    pub fn contains_addr(&self, addr: &Address) -> bool {
        self.version() == addr.version() && addr.mask(self.prefix_len) == self.base
    }

    /// True if the two blocks share at least one address.
    pub fn overlaps(&self, other: &Block) -> bool {
        if self.version() != other.version() {
            return false;
        }
        let p = self.prefix_len.min(other.prefix_len);
        self.base.mask(p) == other.base.mask(p)
    }
}

impl FromStr for Block {
    type Err = IpError;

    /// Parse `address/prefixLength`, taking the family from the text itself.
    fn from_str(s: &str) -> Result<Block, IpError> {
        let version = if s.contains(':') {
            IpVersion::V6
        } else {
            IpVersion::V4
        };
        crate::parse::parse_block(version, s)
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix_len)
    }
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Block, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Block::from_str(&s).map_err(|_| de::Error::custom(format!("invalid CIDR format: {s}")))
    }
}
