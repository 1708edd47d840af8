use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Load the `acme` demo brand and its guidance at startup (default: true)
    #[serde(default = "default_true")]
    pub demo_data: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_data: default_true(),
        }
    }
}
