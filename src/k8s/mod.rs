/// Kubernetes API access
pub mod access;
pub mod infrastructure;

pub use access::{connect, discovery_order, ConfigSource};
pub use infrastructure::{fetch, INFRASTRUCTURE_NAME};
