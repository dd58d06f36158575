pub mod schema;

pub use schema::{Config, GatewayConfig, ProviderConfig, ProviderSettings, TransformConfig};
