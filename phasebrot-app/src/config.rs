use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use phasebrot_core::KeyBindings;

const CONFIG_FILE: &str = "phasebrot.json";

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Startup settings. Read once at launch and never written back; the view
/// itself always starts from the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Fill threads; 0 sizes the pool to the available cores.
    pub worker_threads: usize,
    pub show_hud: bool,
    /// Binding any action to `H` takes the key from the HUD toggle.
    pub key_bindings: KeyBindings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1920.0,
            window_height: 1080.0,
            worker_threads: 0,
            show_hud: false,
            key_bindings: KeyBindings::default(),
        }
    }
}

impl AppConfig {
    /// Load `phasebrot.json` from next to the executable, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&data_directory().join(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<AppConfig>(&json) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    error!("Failed to parse config {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                error!("Failed to read config {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// The executable's directory, or the working directory when that is unknown.
pub fn data_directory() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => dir.to_path_buf(),
            None => PathBuf::from("."),
        },
        Err(_) => PathBuf::from("."),
    }
}

/// Where PNG snapshots are written.
pub fn snapshots_directory() -> PathBuf {
    data_directory().join("images")
}

#[cfg(test)]
mod tests {
    use super::*;
    use phasebrot_core::Action;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("phasebrot_config_missing.json");
        let _ = fs::remove_file(&path);
        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let path = temp_config(
            "phasebrot_config_partial.json",
            r#"{ "worker_threads": 4, "key_bindings": { "toggle_pause": "K" } }"#,
        );
        let config = AppConfig::load_from(&path);
        assert_eq!(config.worker_threads, 4);
        assert_eq!(config.window_width, 1920.0);
        assert_eq!(config.key_bindings.action_for("K"), Some(Action::TogglePause));
        assert_eq!(config.key_bindings.action_for("F"), Some(Action::ResetView));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let path = temp_config("phasebrot_config_bad.json", "{ not json");
        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
        let _ = fs::remove_file(&path);
    }
}
