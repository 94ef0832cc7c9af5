//! Source readers for the legacy order exports
//!
//! Each legacy system has its own record shape. [`RawOrder`] is the closed set
//! of those shapes; adding a source means adding a variant here, a reader
//! module, and a mapping function in [`crate::normalize`].

use std::path::Path;

use crate::model::SourceSystem;
use crate::Result;

pub mod system_a;
pub mod system_b;

pub use system_a::SystemAOrder;
pub use system_b::SystemBOrder;

/// Source record in its native, un-normalized shape
#[derive(Debug, Clone, PartialEq)]
pub enum RawOrder {
    SystemA(SystemAOrder),
    SystemB(SystemBOrder),
}

/// A configured order source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// JSON array export
    SystemA,
    /// CSV export with a header row
    SystemB,
}

impl SourceKind {
    /// Sources in load order
    pub const ALL: [SourceKind; 2] = [SourceKind::SystemA, SourceKind::SystemB];

    /// File name used when the configuration does not override it
    pub fn default_file_name(&self) -> &'static str {
        match self {
            SourceKind::SystemA => "system_a_orders.json",
            SourceKind::SystemB => "system_b_orders.csv",
        }
    }

    pub fn source_system(&self) -> SourceSystem {
        match self {
            SourceKind::SystemA => SourceSystem::SystemA,
            SourceKind::SystemB => SourceSystem::SystemB,
        }
    }

    /// Read every record of this source from `path`
    pub fn read(&self, path: &Path) -> Result<Vec<RawOrder>> {
        match self {
            SourceKind::SystemA => Ok(system_a::read_file(path)?
                .into_iter()
                .map(RawOrder::SystemA)
                .collect()),
            SourceKind::SystemB => Ok(system_b::read_file(path)?
                .into_iter()
                .map(RawOrder::SystemB)
                .collect()),
        }
    }
}
