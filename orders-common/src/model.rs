//! Unified order model
//!
//! Every source record is mapped into [`UnifiedOrder`]. Status and provenance
//! are closed enums, so a serialized order can only ever carry one of the
//! canonical names.

use serde::Serialize;
use std::fmt;

/// Canonical order status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum OrderStatus {
    /// Also the fallback for unrecognized source codes
    #[default]
    Pending,
    Processing,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// All canonical statuses in lifecycle order
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Canonical name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Case-insensitive exact comparison against the canonical name
    pub fn matches_name(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legacy system an order was exported from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SourceSystem {
    SystemA,
    SystemB,
}

impl SourceSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceSystem::SystemA => "SystemA",
            SourceSystem::SystemB => "SystemB",
        }
    }
}

impl fmt::Display for SourceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order in the unified schema
///
/// `order_id` is only unique within one source system; the same id may appear
/// once per source in the loaded collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedOrder {
    pub order_id: String,
    pub source_system: SourceSystem,
    pub customer_name: String,
    /// `YYYY-MM-DD` for well-formed input; malformed source dates pass through
    pub order_date: String,
    /// NaN when the source amount was not numeric (serialized as `null`)
    pub total_amount: f64,
    pub status: OrderStatus,
}
