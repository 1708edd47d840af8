use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(port_str) =
            std::env::var("AGUI_GATEWAY_PORT").or_else(|_| std::env::var("PORT"))
            && let Ok(port) = port_str.parse::<u16>()
        {
            self.gateway.port = port;
        }

        if let Ok(host) = std::env::var("AGUI_GATEWAY_HOST").or_else(|_| std::env::var("HOST"))
            && !host.is_empty()
        {
            self.gateway.host = host;
        }

        if let Ok(level) = std::env::var("AGUI_LOG_LEVEL")
            && !level.is_empty()
        {
            self.observability.log_level = level;
        }

        if let Ok(threshold_str) = std::env::var("AGUI_REUSE_THRESHOLD")
            && let Ok(threshold) = threshold_str.parse::<f32>()
            && (0.0..=1.0).contains(&threshold)
        {
            self.composer.reuse_threshold = threshold;
        }
    }
}
