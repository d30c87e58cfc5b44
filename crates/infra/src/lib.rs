//! Infrastructure layer: configuration and external service clients.

/// Configuration loading and representation.
pub mod config;

/// External service clients/adapters.
pub mod external;

pub use config::{AppConfig, ConfigError};
pub use external::{
    ChannelSource, OrderSource, PostSource, Service, UpstreamError, UpstreamResult,
};
