//! Startup loading
//!
//! Reads every configured source, normalizes its records and concatenates the
//! results. A source that cannot be read or parsed contributes nothing; the
//! failure is logged and recorded, and the remaining sources still load.

use std::path::PathBuf;
use tracing::{error, info};

use crate::config::SourcesConfig;
use crate::model::UnifiedOrder;
use crate::normalize::normalize;
use crate::sources::SourceKind;

/// Result of loading a single source
#[derive(Debug, Clone, PartialEq)]
pub struct SourceOutcome {
    pub kind: SourceKind,
    pub path: PathBuf,
    /// Number of orders loaded, or the reason the source was skipped
    pub result: std::result::Result<usize, String>,
}

impl SourceOutcome {
    pub fn is_loaded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Everything produced by a startup load
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Orders from all sources, in source order (System A first)
    pub orders: Vec<UnifiedOrder>,
    pub sources: Vec<SourceOutcome>,
}

impl LoadReport {
    pub fn failed_sources(&self) -> impl Iterator<Item = &SourceOutcome> {
        self.sources.iter().filter(|s| !s.is_loaded())
    }
}

/// Load and normalize all configured sources
///
/// Never fails as a whole: partial availability is expected.
pub fn load_orders(config: &SourcesConfig) -> LoadReport {
    let mut orders = Vec::new();
    let mut sources = Vec::with_capacity(SourceKind::ALL.len());

    for kind in SourceKind::ALL {
        let path = config.path(kind).to_path_buf();
        let result = match kind.read(&path) {
            Ok(raw) => {
                let count = raw.len();
                orders.extend(raw.into_iter().map(normalize));
                info!("✓ {} loaded {} orders from {}", kind.source_system(), count, path.display());
                Ok(count)
            }
            Err(e) => {
                error!("Error loading {} data from {}: {}", kind.source_system(), path.display(), e);
                Err(e.to_string())
            }
        };
        sources.push(SourceOutcome { kind, path, result });
    }

    info!("Loaded {} orders.", orders.len());
    LoadReport { orders, sources }
}
