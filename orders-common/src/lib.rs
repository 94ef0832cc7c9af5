//! # Orders Common Library
//!
//! Shared code for the unified orders service:
//! - Unified order model (status and source vocabularies)
//! - Source readers for the System A JSON and System B CSV exports
//! - Normalization of source records into the unified schema
//! - Startup loading and the immutable in-memory order store
//! - Bootstrap configuration

pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod sources;
pub mod store;

pub use error::{Error, Result};
pub use loader::{load_orders, LoadReport, SourceOutcome};
pub use model::{OrderStatus, SourceSystem, UnifiedOrder};
pub use store::OrderStore;
