//! Configuration module shared by every crate in the workspace
//!
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//!
//! Service-specific settings (store TTL, region rules, channel provider) live
//! next to the services that consume them.

pub mod environment;
pub mod server;

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
