//! Configuration loading — TOML file, `.env` file and environment variables.
//!
//! Looks for `foxhen.toml` and `.env` in the working directory. Every field
//! has a sensible default so both files are optional. Precedence, highest
//! first: process environment, `.env`, `foxhen.toml`, defaults.
//! `GIN_MODE` is accepted as a fallback name for `RUN_MODE`.
//!
//! The `.env` file is only read; the process environment is never modified.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use foxhen_adapter_http_axum::config::HttpConfig;
use foxhen_domain::error::FoxhenError;
use foxhen_domain::target::{Target, TargetState};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Run mode, selects the default log verbosity.
    pub mode: RunMode,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// API mount and health probe settings.
    pub http: HttpSection,
    /// Registry seed records; empty means the built-in set.
    pub targets: Vec<TargetSeed>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// How verbosely the service runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[default]
    Debug,
    Release,
    Test,
}

/// Logging configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax). Falls back to a per-mode default.
    pub filter: Option<String>,
}

/// Settings forwarded to the HTTP adapter.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HttpSection {
    /// Path prefix the API is mounted under.
    pub prefix: String,
    /// Service name reported by the health probe.
    pub service_name: String,
}

/// One `[[targets]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetSeed {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub difficulty: u32,
    pub state: Option<String>,
}

impl Config {
    /// Load configuration from `foxhen.toml` and `.env` (if present), then
    /// apply process environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but is malformed, or if the merged
    /// configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("foxhen.toml", ".env", |key| std::env::var(key).ok())
    }

    /// Merge all sources: defaults, the TOML file at `config_path`, the
    /// `.env` file at `dotenv_path`, then `env`.
    fn load_from(
        config_path: impl AsRef<Path>,
        dotenv_path: impl AsRef<Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let dotenv = read_dotenv(dotenv_path)?;
        let mut config = Self::from_file(config_path)?;
        config.apply_overrides(layered(env, &dotenv))?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply `PORT`, `HOST`, `RUN_MODE`, `FOXHEN_LOG` and `RUST_LOG` as
    /// resolved by `lookup`. `GIN_MODE` is read when `RUN_MODE` is unset.
    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("PORT") {
            self.server.port = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Validation(format!("invalid PORT `{val}`")))?;
        }
        if let Some(val) = lookup("RUN_MODE").or_else(|| lookup("GIN_MODE")) {
            self.mode = val.parse()?;
        }
        if let Some(val) = lookup("FOXHEN_LOG") {
            self.logging.filter = Some(val);
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = Some(val);
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if !self.http.prefix.is_empty() && !self.http.prefix.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "http prefix `{}` must start with `/`",
                self.http.prefix
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the effective `tracing` filter directive.
    #[must_use]
    pub fn log_filter(&self) -> String {
        self.logging
            .filter
            .clone()
            .unwrap_or_else(|| self.mode.default_log_filter().to_string())
    }

    /// Build the settings handed to the HTTP adapter.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            prefix: self.http.prefix.clone(),
            service_name: self.http.service_name.clone(),
            ..HttpConfig::default()
        }
    }

    /// Validate the configured seed records, falling back to the built-in
    /// set when none are configured.
    ///
    /// # Errors
    ///
    /// Returns [`FoxhenError::Validation`] if a record violates domain invariants.
    pub fn seed_targets(&self) -> Result<Vec<Target>, FoxhenError> {
        if self.targets.is_empty() {
            return foxhen_adapter_memory::default_targets();
        }
        self.targets.iter().map(TargetSeed::to_target).collect()
    }
}

impl TargetSeed {
    fn to_target(&self) -> Result<Target, FoxhenError> {
        let mut builder = Target::builder()
            .id(self.id.as_str())
            .name(self.name.as_str())
            .difficulty(self.difficulty);
        if let Some(state) = &self.state {
            builder = builder.state(TargetState::new(state.as_str()));
        }
        builder.build()
    }
}

impl RunMode {
    /// Filter used when neither the config file nor the environment sets one.
    #[must_use]
    pub fn default_log_filter(self) -> &'static str {
        match self {
            Self::Debug => "foxhend=debug,foxhen=debug,tower_http=debug",
            Self::Release | Self::Test => "foxhend=info,foxhen=info,tower_http=info",
        }
    }
}

impl FromStr for RunMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::Validation(format!(
                "unknown run mode `{other}` (expected debug, release or test)"
            ))),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => f.write_str("debug"),
            Self::Release => f.write_str("release"),
            Self::Test => f.write_str("test"),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for HttpSection {
    fn default() -> Self {
        let http = HttpConfig::default();
        Self {
            prefix: http.prefix,
            service_name: http.service_name,
        }
    }
}

/// Resolve a variable from `env` first, falling back to `.env` values.
fn layered<'a>(
    env: impl Fn(&str) -> Option<String> + 'a,
    dotenv: &'a HashMap<String, String>,
) -> impl Fn(&str) -> Option<String> + 'a {
    move |key: &str| env(key).or_else(|| dotenv.get(key).cloned())
}

/// Read `KEY=value` pairs from a `.env` file, if it exists.
fn read_dotenv(path: impl AsRef<Path>) -> Result<HashMap<String, String>, ConfigError> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => iter
            .collect::<Result<HashMap<_, _>, _>>()
            .map_err(ConfigError::Dotenv),
        Err(err) if err.not_found() => Ok(HashMap::new()),
        Err(err) => Err(ConfigError::Dotenv(err)),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Malformed `.env` file.
    #[error("failed to read .env file")]
    Dotenv(#[from] dotenvy::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.mode, RunMode::Debug);
        assert_eq!(config.http.prefix, "/api/v1");
        assert!(config.targets.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            mode = 'release'

            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'warn'

            [http]
            prefix = '/api/v2'
            service_name = 'go-core'

            [[targets]]
            id = 'target-010'
            name = 'Mail Relay'
            difficulty = 4
            state = 'hardened'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.mode, RunMode::Release);
        assert_eq!(config.log_filter(), "warn");
        assert_eq!(config.http.prefix, "/api/v2");
        assert_eq!(config.http.service_name, "go-core");
        assert_eq!(config.targets.len(), 1);
        assert_eq!(config.targets[0].difficulty, 4);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_apply_port_and_mode_from_environment() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("PORT", "3001"), ("RUN_MODE", "Release")]))
            .unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.mode, RunMode::Release);
        assert_eq!(config.bind_addr(), "0.0.0.0:3001");
    }

    #[test]
    fn should_prefer_rust_log_over_foxhen_log() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("FOXHEN_LOG", "info"), ("RUST_LOG", "trace")]))
            .unwrap();
        assert_eq!(config.log_filter(), "trace");
    }

    #[test]
    fn should_reject_unparseable_port() {
        let mut config = Config::default();
        let result = config.apply_overrides(env(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_unknown_run_mode() {
        assert!("verbose".parse::<RunMode>().is_err());
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_prefix_without_leading_slash() {
        let mut config = Config::default();
        config.http.prefix = "api".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_pick_log_filter_from_mode() {
        let mut config = Config::default();
        assert!(config.log_filter().contains("tower_http=debug"));
        config.mode = RunMode::Release;
        assert!(config.log_filter().contains("tower_http=info"));
    }

    #[test]
    fn should_forward_http_settings() {
        let mut config = Config::default();
        config.http.service_name = "go-core".to_string();
        let http = config.http_config();
        assert_eq!(http.prefix, "/api/v1");
        assert_eq!(http.service_name, "go-core");
        assert_eq!(http.version, HttpConfig::default().version);
    }

    #[test]
    fn should_use_built_in_seed_when_no_targets_configured() {
        let targets = Config::default().seed_targets().unwrap();
        let ids: Vec<&str> = targets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["target-001", "target-002"]);
    }

    #[test]
    fn should_default_seed_state_to_active() {
        let mut config = Config::default();
        config.targets.push(TargetSeed {
            id: "target-010".to_string(),
            name: "Mail Relay".to_string(),
            difficulty: 3,
            state: None,
        });
        let targets = config.seed_targets().unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].state.as_str(), TargetState::ACTIVE);
    }

    #[test]
    fn should_reject_seed_with_empty_name() {
        let mut config = Config::default();
        config.targets.push(TargetSeed {
            id: "target-010".to_string(),
            name: String::new(),
            difficulty: 0,
            state: None,
        });
        assert!(config.seed_targets().is_err());
    }

    #[test]
    fn should_return_empty_map_when_dotenv_missing() {
        let values = read_dotenv("definitely-not-here.env").unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn should_read_pairs_from_dotenv_file() {
        let path = std::env::temp_dir().join(format!("foxhend-{}.env", std::process::id()));
        std::fs::write(&path, "PORT=9191\n# comment\nRUN_MODE=test\n").unwrap();

        let values = read_dotenv(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(values.get("PORT").map(String::as_str), Some("9191"));
        assert_eq!(values.get("RUN_MODE").map(String::as_str), Some("test"));

        let mut config = Config::default();
        config.apply_overrides(|key| values.get(key).cloned()).unwrap();
        assert_eq!(config.server.port, 9191);
        assert_eq!(config.mode, RunMode::Test);
    }

    fn scratch_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("foxhend-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn should_prefer_process_env_over_dotenv() {
        let dotenv: HashMap<String, String> =
            HashMap::from([("PORT".to_string(), "9100".to_string())]);
        let mut config = Config::default();
        config
            .apply_overrides(layered(env(&[("PORT", "9200")]), &dotenv))
            .unwrap();
        assert_eq!(config.server.port, 9200);
    }

    #[test]
    fn should_fall_back_to_dotenv_when_env_unset() {
        let dotenv: HashMap<String, String> =
            HashMap::from([("PORT".to_string(), "9100".to_string())]);
        let lookup = layered(env(&[]), &dotenv);
        assert_eq!(lookup("PORT").as_deref(), Some("9100"));
        assert_eq!(lookup("HOST"), None);
    }

    #[test]
    fn should_layer_toml_then_dotenv_then_env() {
        let toml = scratch_file("layers.toml", "[server]\nhost = '127.0.0.1'\nport = 9000\n");
        let dotenv = scratch_file("layers.env", "PORT=9100\n");
        let missing = std::env::temp_dir().join("foxhend-no-such.env");

        let toml_only = Config::load_from(&toml, &missing, env(&[])).unwrap();
        let with_dotenv = Config::load_from(&toml, &dotenv, env(&[])).unwrap();
        let with_env = Config::load_from(&toml, &dotenv, env(&[("PORT", "9200")])).unwrap();

        std::fs::remove_file(&toml).unwrap();
        std::fs::remove_file(&dotenv).unwrap();

        assert_eq!(toml_only.server.port, 9000);
        assert_eq!(with_dotenv.server.port, 9100);
        assert_eq!(with_dotenv.server.host, "127.0.0.1");
        assert_eq!(with_env.server.port, 9200);
    }

    #[test]
    fn should_reject_invalid_port_from_dotenv_on_load() {
        let dotenv = scratch_file("bad-port.env", "PORT=0\n");
        let result = Config::load_from("nonexistent.toml", &dotenv, env(&[]));
        std::fs::remove_file(&dotenv).unwrap();
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_accept_gin_mode_alias() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("GIN_MODE", "release")]))
            .unwrap();
        assert_eq!(config.mode, RunMode::Release);
    }

    #[test]
    fn should_prefer_run_mode_over_gin_mode() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("GIN_MODE", "release"), ("RUN_MODE", "test")]))
            .unwrap();
        assert_eq!(config.mode, RunMode::Test);
    }
}
