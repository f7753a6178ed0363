//! Core services for chainview: event bus, display formatters, chart
//! geometry, and configuration.

pub mod chart;
pub mod config;
pub mod events;
pub mod humanize;

pub use config::Config;
pub use events::{BusEvent, EventBus, SubscriptionId, Topic};
