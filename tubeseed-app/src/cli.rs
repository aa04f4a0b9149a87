use clap::Parser;
use std::path::PathBuf;

/// Expand seed video ids and queries into YouTube search results.
///
/// Every option may also be set in the settings file or through a
/// `TUBESEED__<OPTION>` environment variable; flags win.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tubeseed", version)]
pub struct Cli {
    /// List of video ids and query strings (prefixed with ^) to generate results from [default: stdin]
    #[arg(long, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Google API developer key
    #[arg(long, env = "YOUTUBE_DEVELOPER_KEY", hide_env_values = true)]
    pub developer_key: Option<String>,

    /// Max YouTube results per seed [default: 50]
    #[arg(long, value_name = "N")]
    pub max_results: Option<u32>,

    /// Safe search level: none, moderate or strict [default: none]
    #[arg(long, value_name = "LEVEL")]
    pub safe_search: Option<String>,

    /// Show YouTube channels as well
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub show_channels: Option<bool>,

    /// Show YouTube playlists as well
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub show_playlists: Option<bool>,

    /// Print section headers and titles, not just ids
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub verbose: Option<bool>,

    /// Settings file [default: <config dir>/tubeseed/tubeseed.yaml if present]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Search API base URL
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Per-request timeout in seconds [default: 15]
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}
