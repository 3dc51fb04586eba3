//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.model-viewer/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::providers::openai::DEFAULT_OPENAI_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub openai: OpenAiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub organization: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Resolved Config (concrete values where a default exists)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` is a startup error, reported before the terminal is touched.
    pub api_key: Option<String>,
    pub base_url: String,
    pub organization: Option<String>,
    pub timeout: Duration,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.model-viewer/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".model-viewer").join("config.toml"))
}

/// Load config from `~/.model-viewer/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ViewerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ViewerConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(ViewerConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<ViewerConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ViewerConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ViewerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    // Keep the key itself out of the log
    debug!(
        "Config: base_url={:?}, organization={:?}, timeout_secs={:?}, api_key set={}",
        config.openai.base_url,
        config.openai.organization,
        config.openai.timeout_secs,
        config.openai.api_key.is_some()
    );
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Model Viewer Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [openai]
# api_key = "sk-..."                       # Or set OPENAI_API_KEY env var
# base_url = "https://api.openai.com/v1"   # Or set OPENAI_BASE_URL env var
# organization = "org-..."                 # Or set OPENAI_ORGANIZATION env var
# timeout_secs = 30                        # Per-request timeout for the model listing
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &ViewerConfig) -> ResolvedConfig {
    resolve_with_env(config, |name| std::env::var(name).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &ViewerConfig,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // API key: env → config
    let api_key = env("OPENAI_API_KEY")
        .or_else(|| config.openai.api_key.clone())
        .filter(|key| !key.trim().is_empty());

    // Base URL: env → config → default
    let base_url = env("OPENAI_BASE_URL")
        .or_else(|| config.openai.base_url.clone())
        .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

    // Organization: env → config
    let organization = env("OPENAI_ORGANIZATION").or_else(|| config.openai.organization.clone());

    // A zero timeout would fail every request, so it counts as unset
    let timeout_secs = match config.openai.timeout_secs {
        Some(0) => {
            warn!(
                "timeout_secs = 0 is not usable, falling back to {}s",
                DEFAULT_TIMEOUT_SECS
            );
            DEFAULT_TIMEOUT_SECS
        }
        Some(secs) => secs,
        None => DEFAULT_TIMEOUT_SECS,
    };

    ResolvedConfig {
        api_key,
        base_url,
        organization,
        timeout: Duration::from_secs(timeout_secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = ViewerConfig::default();
        assert!(config.openai.api_key.is_none());
        assert!(config.openai.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&ViewerConfig::default(), no_env);
        assert!(resolved.api_key.is_none());
        assert_eq!(resolved.base_url, DEFAULT_OPENAI_BASE_URL);
        assert!(resolved.organization.is_none());
        assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_resolve_zero_timeout_uses_default() {
        let config: ViewerConfig = toml::from_str("[openai]\ntimeout_secs = 0\n").unwrap();
        let resolved = resolve_with_env(&config, no_env);
        assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ViewerConfig {
            openai: OpenAiConfig {
                api_key: Some("sk-file".to_string()),
                base_url: Some("http://localhost:8080/v1".to_string()),
                organization: Some("org-file".to_string()),
                timeout_secs: Some(5),
            },
        };
        let resolved = resolve_with_env(&config, no_env);
        assert_eq!(resolved.api_key.as_deref(), Some("sk-file"));
        assert_eq!(resolved.base_url, "http://localhost:8080/v1");
        assert_eq!(resolved.organization.as_deref(), Some("org-file"));
        assert_eq!(resolved.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_resolve_env_wins_over_config() {
        let config = ViewerConfig {
            openai: OpenAiConfig {
                api_key: Some("sk-file".to_string()),
                base_url: Some("http://file/v1".to_string()),
                ..Default::default()
            },
        };
        let env: HashMap<&str, &str> = HashMap::from([
            ("OPENAI_API_KEY", "sk-env"),
            ("OPENAI_BASE_URL", "http://env/v1"),
            ("OPENAI_ORGANIZATION", "org-env"),
        ]);
        let resolved = resolve_with_env(&config, |name| env.get(name).map(|v| v.to_string()));
        assert_eq!(resolved.api_key.as_deref(), Some("sk-env"));
        assert_eq!(resolved.base_url, "http://env/v1");
        assert_eq!(resolved.organization.as_deref(), Some("org-env"));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let resolved = resolve_with_env(&ViewerConfig::default(), |name| {
            (name == "OPENAI_API_KEY").then(|| "  ".to_string())
        });
        assert!(resolved.api_key.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[openai]
api_key = "sk-test-123"
base_url = "http://192.168.1.100:8080/v1"
organization = "org-abc"
timeout_secs = 10
"#;
        let config: ViewerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.openai.api_key.as_deref(), Some("sk-test-123"));
        assert_eq!(
            config.openai.base_url.as_deref(),
            Some("http://192.168.1.100:8080/v1")
        );
        assert_eq!(config.openai.organization.as_deref(), Some("org-abc"));
        assert_eq!(config.openai.timeout_secs, Some(10));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let config: ViewerConfig = toml::from_str("[openai]\ntimeout_secs = 3\n").unwrap();
        assert_eq!(config.openai.timeout_secs, Some(3));
        assert!(config.openai.api_key.is_none());

        let config: ViewerConfig = toml::from_str("").unwrap();
        assert!(config.openai.base_url.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("model-viewer-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        fs::write(&path, "[openai\napi_key = ").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("model-viewer-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.openai.api_key.is_none());
        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.contains("# [openai]"));
        // The generated file is all comments, so it parses to defaults
        let reparsed: ViewerConfig = toml::from_str(&generated).unwrap();
        assert!(reparsed.openai.base_url.is_none());

        fs::remove_dir_all(&dir).unwrap();
    }
}
