use super::Config;
use crate::error::ConfigError;

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let composer = &self.composer;
        if !(0.0..=1.0).contains(&composer.reuse_threshold) {
            return Err(ConfigError::Validation(format!(
                "composer.reuse_threshold must be within [0, 1], got {}",
                composer.reuse_threshold
            )));
        }
        for (name, value) in [
            ("composer.reuse_candidates", composer.reuse_candidates),
            ("composer.guidance_matches", composer.guidance_matches),
            ("composer.default_search_k", composer.default_search_k),
        ] {
            if value == 0 {
                return Err(ConfigError::Validation(format!("{name} must be > 0")));
            }
        }
        if self.observability.level().is_none() {
            return Err(ConfigError::Validation(format!(
                "observability.log_level is not a tracing level: {}",
                self.observability.log_level
            )));
        }
        Ok(())
    }
}
