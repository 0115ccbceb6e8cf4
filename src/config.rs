//! Application configuration.
//!
//! Settings live in `~/.turminal/config.json`. Every field is optional and a
//! missing file means defaults, so the app runs with no setup at all.
//!
//! # Environment
//!
//! - `TURMINAL_CONFIG` - alternate path to the config file
//! - `TURMINAL_SHELL` - shell program, overriding the file
//!
//! # Example
//!
//! ```json
//! {
//!   "shell": { "program": "/bin/bash", "args": ["-c"] },
//!   "palette": { "input": "#00CED1", "error": "red" }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub shell: ShellConfig,
    pub palette: PaletteConfig,
}

/// How the host shell is invoked: `program args... <command>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        if cfg!(windows) {
            Self {
                program: "cmd".to_string(),
                args: vec!["/C".to_string()],
            }
        } else {
            Self {
                program: "/bin/sh".to_string(),
                args: vec!["-c".to_string()],
            }
        }
    }
}

/// Display colors, as names (`"black"`) or hex (`"#B22222"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub input: String,
    pub output: String,
    pub error: String,
    pub background: String,
    pub foreground: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            input: "#00CED1".to_string(),
            output: "black".to_string(),
            error: "#B22222".to_string(),
            background: "white".to_string(),
            foreground: "black".to_string(),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("TURMINAL_CONFIG") {
        return PathBuf::from(path);
    }
    let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    home.join(".turminal").join("config.json")
}

impl Config {
    /// Load from the default location and apply environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::load_from(&default_config_path())?;
        config.override_shell(std::env::var("TURMINAL_SHELL").ok());
        Ok(config)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid config JSON at {}", path.display()))?;
        Ok(config)
    }

    /// Replace the shell program when an override is present and non-blank.
    pub fn override_shell(&mut self, program: Option<String>) {
        if let Some(program) = program.filter(|p| !p.trim().is_empty()) {
            self.shell.program = program;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "palette": { "error": "red" } }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.palette.error, "red");
        assert_eq!(config.palette.input, "#00CED1");
        assert_eq!(config.shell, ShellConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config JSON"));
    }

    #[test]
    fn test_shell_override() {
        let mut config = Config::default();
        config.override_shell(Some("   ".to_string()));
        assert_eq!(config.shell, ShellConfig::default());

        config.override_shell(Some("/bin/bash".to_string()));
        assert_eq!(config.shell.program, "/bin/bash");
        assert_eq!(config.shell.args, ShellConfig::default().args);

        config.override_shell(None);
        assert_eq!(config.shell.program, "/bin/bash");
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"program\""));
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
