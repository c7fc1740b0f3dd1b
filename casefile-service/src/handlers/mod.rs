//! HTTP handlers for the casefile service.

pub mod actions;
pub mod health;
pub mod metrics;

pub use actions::proxy_action;
pub use health::{health_check, readiness_check};
pub use self::metrics::metrics_endpoint;
