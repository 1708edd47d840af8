pub mod schema;

pub use schema::{ComposerConfig, Config, GatewayConfig, ObservabilityConfig, SeedConfig};
