//! Settings file loading and saving
//!
//! Settings live in `<dir>/.p42/widgets.toml`. Loading never fails: a missing
//! or broken file yields the defaults, with the reason logged.

use std::path::{Path, PathBuf};

use p42_core::prelude::*;

use super::types::Settings;

pub const CONFIG_DIR: &str = ".p42";
pub const CONFIG_FILENAME: &str = "widgets.toml";

const DEFAULT_CONFIG: &str = r#"# P42 widgets configuration

[ui]
icons = "nerd_fonts"    # or "unicode"

[badge]
padding = 10

[header]
height = 30
icon_size = 16

[metric_summary]
# delay_threshold_minutes = 15

[funnel]
show_percent_sign = true
row_spacing = 2

[tui]
points_per_column = 5
points_per_row = 10
"#;

/// Path of the settings file for `dir`
pub fn settings_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<dir>/.p42/widgets.toml`, falling back to defaults
pub fn load_settings(dir: &Path) -> Settings {
    let config_path = settings_path(dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match read_settings(&config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("Failed to load {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Read and validate one settings file
pub fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::config_not_found(path));
    }
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    settings.validate()?;
    Ok(settings)
}

/// Write settings to `<dir>/.p42/widgets.toml`, creating the directory
pub fn save_settings(dir: &Path, settings: &Settings) -> Result<()> {
    settings.validate()?;
    let config_dir = dir.join(CONFIG_DIR);
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;

    let content = toml::to_string_pretty(settings)?;
    std::fs::write(settings_path(dir), content)?;
    info!("Saved settings to {:?}", settings_path(dir));
    Ok(())
}

/// Create `.p42/widgets.toml` with commented defaults unless it exists
pub fn init_config_dir(dir: &Path) -> Result<()> {
    let config_dir = dir.join(CONFIG_DIR);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .map_err(|e| Error::config(format!("Failed to create .p42 dir: {}", e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let config_dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();

        let config = r#"
[header]
height = 24

[metric_summary]
delay_threshold_minutes = 15

[funnel]
show_percent_sign = false
"#;
        std::fs::write(config_dir.join(CONFIG_FILENAME), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.header.height, 24);
        assert_eq!(settings.header.icon_size, 16);
        assert_eq!(settings.metric_summary.delay_threshold_minutes, Some(15.0));
        assert!(!settings.funnel.show_percent_sign);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let config_dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join(CONFIG_FILENAME), "not valid toml {{{{").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());

        let err = read_settings(&settings_path(temp.path())).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_load_settings_invalid_values_fall_back() {
        let temp = tempdir().unwrap();
        let config_dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join(CONFIG_FILENAME),
            "[tui]\npoints_per_column = 0\n",
        )
        .unwrap();

        assert_eq!(load_settings(temp.path()), Settings::default());
    }

    #[test]
    fn test_read_settings_missing_file() {
        let temp = tempdir().unwrap();
        let err = read_settings(&settings_path(temp.path())).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let temp = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.ui.icons = IconMode::Unicode;
        settings.badge.padding = 4;

        save_settings(temp.path(), &settings).unwrap();
        assert_eq!(load_settings(temp.path()), settings);
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();

        init_config_dir(temp.path()).unwrap();

        assert!(settings_path(temp.path()).exists());
        assert_eq!(load_settings(temp.path()), Settings::default());
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = tempdir().unwrap();
        let config_dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join(CONFIG_FILENAME), "[badge]\npadding = 3\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        assert_eq!(load_settings(temp.path()).badge.padding, 3);
    }
}
