mod composer;
mod core;
mod gateway;
mod observability;
mod seed;

pub use composer::ComposerConfig;
pub use core::Config;
pub use gateway::GatewayConfig;
pub use observability::ObservabilityConfig;
pub use seed::SeedConfig;
