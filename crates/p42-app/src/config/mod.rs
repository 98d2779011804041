//! Configuration file parsing for P42 widgets
//!
//! Supports:
//! - `.p42/widgets.toml` - Component defaults and terminal host settings

pub mod settings;
pub mod types;

pub use settings::{
    init_config_dir, load_settings, read_settings, save_settings, settings_path, CONFIG_DIR,
    CONFIG_FILENAME,
};
pub use types::*;
