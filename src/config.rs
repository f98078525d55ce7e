//! Runtime configuration: defaults, then environment (optionally from `.env`).

use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_API_KEY_FALLBACK: &str = "API_KEY";
pub const ENV_MODEL: &str = "GENGRAPHIC_MODEL";
pub const ENV_API_BASE: &str = "GENGRAPHIC_API_BASE";
pub const ENV_DATA_DIR: &str = "GENGRAPHIC_DATA_DIR";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();
        Self {
            api_key: get(ENV_API_KEY).or_else(|| get(ENV_API_KEY_FALLBACK)),
            model: get(ENV_MODEL).unwrap_or(defaults.model),
            api_base: get(ENV_API_BASE).unwrap_or(defaults.api_base),
            data_dir: get(ENV_DATA_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
        }
    }

    /// File the credential-selection flow writes the API key to.
    pub fn api_key_path(&self) -> PathBuf {
        self.data_dir.join(".api_key")
    }
}

/// Platform data directory for the application, or `./.gengraphic` when there is none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|p| p.join("gengraphic"))
        .unwrap_or_else(|| PathBuf::from(".gengraphic"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.api_key, None);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_primary_key_wins_over_fallback() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_API_KEY, "primary"),
            (ENV_API_KEY_FALLBACK, "fallback"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("primary"));

        let config = Config::from_lookup(lookup_from(&[
            (ENV_API_KEY, "  "),
            (ENV_API_KEY_FALLBACK, "fallback"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("fallback"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_MODEL, "other-model"),
            (ENV_API_BASE, "http://127.0.0.1:9999"),
            (ENV_DATA_DIR, "/tmp/gengraphic-test"),
        ]));
        assert_eq!(config.model, "other-model");
        assert_eq!(config.api_base, "http://127.0.0.1:9999");
        assert_eq!(
            config.api_key_path(),
            PathBuf::from("/tmp/gengraphic-test/.api_key")
        );
    }
}
