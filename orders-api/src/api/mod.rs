//! HTTP API handlers for orders-api

pub mod health;
pub mod orders;
pub mod ui;

pub use health::health_routes;
pub use orders::{get_order, list_orders, search_orders};
pub use ui::{serve_app_js, serve_index, serve_styles_css};
