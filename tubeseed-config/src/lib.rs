//! Loader for `tubeseed` settings with YAML + environment overlays.
//!
//! Every field is optional: the binary merges these values under its command
//! line flags. Environment variables use the `TUBESEED__` prefix
//! (`TUBESEED__DEVELOPER_KEY`, `TUBESEED__MAX_RESULTS`, ...) and win over
//! files. String values may reference `${VAR}` placeholders.
//!
//! ```yaml
//! developer_key: "${YOUTUBE_API_KEY}"
//! max_results: 25
//! safe_search: moderate
//! show_channels: true
//! ```
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::{Path, PathBuf};

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;
const ENV_PREFIX: &str = "TUBESEED";

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub developer_key: Option<String>,
    pub seed: Option<PathBuf>,
    #[serde(deserialize_with = "lenient_u32")]
    pub max_results: Option<u32>,
    pub safe_search: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub show_channels: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub show_playlists: Option<bool>,
    #[serde(deserialize_with = "lenient_bool")]
    pub verbose: Option<bool>,
    pub api_base: Option<String>,
    #[serde(deserialize_with = "lenient_u64")]
    pub timeout_secs: Option<u64>,
}

/// Default settings location: `<config dir>/tubeseed/tubeseed.yaml`.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tubeseed").join("tubeseed.yaml"))
}

// Environment values always arrive as strings; files may carry real scalars.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(u64),
    Text(String),
}

fn lenient_u64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
    use serde::de::Error;
    match Option::<Scalar>::deserialize(d)? {
        None => Ok(None),
        Some(Scalar::Int(n)) => Ok(Some(n)),
        Some(Scalar::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected an integer, got {s:?}"))),
        Some(Scalar::Bool(b)) => Err(D::Error::custom(format!("expected an integer, got {b}"))),
    }
}

fn lenient_u32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    use serde::de::Error;
    match lenient_u64(d)? {
        None => Ok(None),
        Some(n) => u32::try_from(n)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("{n} is out of range"))),
    }
}

fn lenient_bool<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    use serde::de::Error;
    match Option::<Scalar>::deserialize(d)? {
        None => Ok(None),
        Some(Scalar::Bool(b)) => Ok(Some(b)),
        Some(Scalar::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(D::Error::custom(format!("expected a boolean, got {s:?}"))),
        },
        Some(Scalar::Int(n)) => Ok(Some(n != 0)),
    }
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hides the `config` crate wiring (YAML files + env overrides).
pub struct SettingsLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: String,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsLoader {
    /// Start with no files; `TUBESEED__` env overrides are applied at load.
    ///
    /// ```
    /// use tubeseed_config::SettingsLoader;
    ///
    /// let settings = SettingsLoader::new()
    ///     .with_env_prefix("TUBESEED_DOCTEST_UNSET")
    ///     .with_yaml_str("max_results: 10\nverbose: true")
    ///     .load()
    ///     .expect("valid settings");
    ///
    /// assert_eq!(settings.max_results, Some(10));
    /// assert_eq!(settings.verbose, Some(true));
    /// assert!(settings.developer_key.is_none());
    /// ```
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Read env overrides from `<prefix>__*` instead of `TUBESEED__*`.
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.to_string();
        self
    }

    /// Attach a file that must exist; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Attach a file that is silently skipped when absent.
    pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Allow tests to merge inline YAML snippets.
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self.builder.add_source(File::from_str(yaml, FileFormat::Yaml));
        self
    }

    /// Merge files, then environment, expand `${VAR}` placeholders, and
    /// deserialize into [`Settings`].
    pub fn load(self) -> Result<Settings, ConfigError> {
        let cfg = self
            .builder
            .add_source(Environment::with_prefix(&self.env_prefix).separator("__"))
            .build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))
    }
}
