//! Resolution of flags, environment and settings file into one [`AppConfig`].
use crate::cli::Cli;
use crate::output::DisplayOptions;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tubeseed_common::{Result, TubeseedError};
use tubeseed_config::{default_settings_path, Settings, SettingsLoader};
use tubeseed_youtube::{SearchOptions, YOUTUBE_API_BASE};

/// Everything the run needs, after precedence has been applied.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub developer_key: String,
    /// `None` reads standard input.
    pub seed: Option<PathBuf>,
    pub api_base: String,
    pub search: SearchOptions,
    pub display: DisplayOptions,
}

impl AppConfig {
    /// Merge `cli` over `settings` over built-in defaults.
    ///
    /// Fails with [`TubeseedError::MissingDeveloperKey`] when no non-empty key
    /// was supplied anywhere.
    pub fn resolve(cli: &Cli, settings: Settings) -> Result<Self> {
        let developer_key = cli
            .developer_key
            .clone()
            .filter(|k| !k.is_empty())
            .or(settings.developer_key.filter(|k| !k.is_empty()))
            .ok_or(TubeseedError::MissingDeveloperKey)?;

        let seed = cli
            .seed
            .clone()
            .or(settings.seed)
            .filter(|p| !p.as_os_str().is_empty());

        let defaults = SearchOptions::default();
        let search = SearchOptions {
            max_results: cli
                .max_results
                .or(settings.max_results)
                .unwrap_or(defaults.max_results),
            safe_search: cli
                .safe_search
                .clone()
                .or(settings.safe_search)
                .unwrap_or(defaults.safe_search),
            timeout: cli
                .timeout_secs
                .or(settings.timeout_secs)
                .map(Duration::from_secs),
        };

        let display = DisplayOptions {
            show_channels: cli.show_channels.or(settings.show_channels).unwrap_or(false),
            show_playlists: cli
                .show_playlists
                .or(settings.show_playlists)
                .unwrap_or(false),
            verbose: cli.verbose.or(settings.verbose).unwrap_or(false),
        };

        let api_base = cli
            .api_base
            .clone()
            .or(settings.api_base)
            .unwrap_or_else(|| YOUTUBE_API_BASE.to_string());

        Ok(Self {
            developer_key,
            seed,
            api_base,
            search,
            display,
        })
    }
}

/// Load the settings file named on the command line (required), or the
/// default one when it exists.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let loader = match (explicit, default_settings_path()) {
        (Some(path), _) => SettingsLoader::new().with_file(path),
        (None, Some(default)) => SettingsLoader::new().with_optional_file(default),
        (None, None) => SettingsLoader::new(),
    };
    loader
        .load()
        .map_err(|e| TubeseedError::Config(e.to_string()))
}

/// Open the seed file, or standard input when no path is configured.
pub fn open_seed_source(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| TubeseedError::SeedFile {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "seed.source.file");
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            tracing::debug!("seed.source.stdin");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}
