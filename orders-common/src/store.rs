//! In-memory order store
//!
//! Built once from the startup load and never mutated afterwards, so it can be
//! shared across request handlers behind an `Arc` without locking. All queries
//! are linear scans over the collection.

use crate::model::UnifiedOrder;

#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Vec<UnifiedOrder>,
}

impl OrderStore {
    pub fn new(orders: Vec<UnifiedOrder>) -> Self {
        Self { orders }
    }

    pub fn all(&self) -> &[UnifiedOrder] {
        &self.orders
    }

    /// Orders whose canonical status equals `status`, ignoring case
    ///
    /// A name outside the canonical set matches nothing.
    pub fn filter_by_status(&self, status: &str) -> Vec<&UnifiedOrder> {
        self.orders
            .iter()
            .filter(|o| o.status.matches_name(status))
            .collect()
    }

    /// First order whose id equals `order_id` exactly (case-sensitive)
    pub fn find_by_id(&self, order_id: &str) -> Option<&UnifiedOrder> {
        self.orders.iter().find(|o| o.order_id == order_id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
