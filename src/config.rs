use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::selection::UiSelectionState;
use crate::error::{AppError, Result};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub dashboard: DashboardConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Capture the mouse. A left click on the theme toggle or the test
    /// selector acts like its key binding; other mouse events are ignored.
    pub mouse_enabled: bool,
}

/// Initial dashboard state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Test id selected at startup. Unknown ids fall back to the first test.
    pub initial_test: String,
    /// Start in dark mode.
    pub dark_mode: bool,
    /// Ticks a notification stays on screen.
    pub notification_ticks: u32,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_enabled: false,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let initial = UiSelectionState::default();
        Self {
            initial_test: initial.selected_test_id,
            dark_mode: initial.dark_mode,
            notification_ticks: 40,
        }
    }
}

impl DashboardConfig {
    /// Fresh selection state seeded from this config.
    pub fn initial_selection(&self) -> UiSelectionState {
        UiSelectionState::new(self.initial_test.clone(), self.dark_mode)
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/water-tests/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match Self::try_load_from(&config_path) {
            Ok(Some(config)) => {
                log::info!("Loaded config from {}", config_path.display());
                config
            }
            Ok(None) => {
                log::debug!(
                    "No config file at {} — using defaults",
                    config_path.display()
                );
                Self::default()
            }
            Err(e) => {
                log::warn!("{e} — using defaults");
                Self::default()
            }
        }
    }

    /// Read and parse a config file. `Ok(None)` when the file can't be read.
    pub fn try_load_from(path: &Path) -> Result<Option<Self>> {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Ok(None);
        };
        toml::from_str(&contents)
            .map(Some)
            .map_err(|source| AppError::Config {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tui.tick_rate_ms.max(1))
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("water-tests").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.tui.tick_rate_ms, 50);
        assert!(!config.tui.mouse_enabled);
        assert_eq!(config.dashboard.initial_test, "test-1");
        assert!(config.dashboard.dark_mode);
        assert_eq!(config.dashboard.notification_ticks, 40);
    }

    #[test]
    fn test_config_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppConfig::try_load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_config_load_does_not_panic() {
        let config = AppConfig::load();
        assert!(config.tick_rate().as_millis() >= 1);
    }

    #[test]
    fn test_partial_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\ninitial_test = \"test-3\"\ndark_mode = false").unwrap();

        let config = AppConfig::try_load_from(file.path()).unwrap().unwrap();
        assert_eq!(config.dashboard.initial_test, "test-3");
        assert!(!config.dashboard.dark_mode);
        // Untouched sections keep defaults
        assert_eq!(config.tui.tick_rate_ms, 50);
        assert_eq!(config.dashboard.notification_ticks, 40);

        let selection = config.dashboard.initial_selection();
        assert_eq!(selection.active_test().name, "Turbidity");
        assert!(!selection.dark_mode);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tui\ntick_rate_ms = ").unwrap();

        let err = AppConfig::try_load_from(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[test]
    fn test_unknown_initial_test_falls_back() {
        let mut config = AppConfig::default();
        config.dashboard.initial_test = "test-99".to_string();
        assert_eq!(config.dashboard.initial_selection().active_test().id, "test-1");
    }

    #[test]
    fn test_zero_tick_rate_clamped() {
        let mut config = AppConfig::default();
        config.tui.tick_rate_ms = 0;
        assert_eq!(config.tick_rate().as_millis(), 1);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.tui.tick_rate_ms, config.tui.tick_rate_ms);
        assert_eq!(deserialized.dashboard.initial_test, config.dashboard.initial_test);
    }
}
