mod core;
mod gateway;
mod provider;
mod transform;

pub use core::Config;
pub use gateway::GatewayConfig;
pub use provider::{ProviderConfig, ProviderSettings};
pub use transform::TransformConfig;
