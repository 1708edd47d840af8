use super::Config;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::Path;

impl Config {
    /// Load `~/.agui/config.toml`, writing the defaults there on first run,
    /// then apply `AGUI_*` environment overrides.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let mut config = Self::load_or_init_in(&home.join(".agui"))?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_init_in(agui_dir: &Path) -> Result<Self> {
        let config_path = agui_dir.join("config.toml");

        if !agui_dir.exists() {
            fs::create_dir_all(agui_dir).context("Failed to create .agui directory")?;
        }

        if config_path.exists() {
            let contents =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            config.config_path.clone_from(&config_path);
            config.validate()?;
            Ok(config)
        } else {
            let config = Self {
                config_path,
                ..Self::default()
            };
            config.validate()?;
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
