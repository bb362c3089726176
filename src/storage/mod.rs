//! Storage module for persistence access and configuration.

pub mod config;
pub mod gateway;
pub mod memory;

pub use config::{AppConfig, ConfigError, DisplaySettings, RefreshSettings};
pub use gateway::{BodyProfile, GatewayError, GoalSetGateway};
pub use memory::InMemoryGateway;
