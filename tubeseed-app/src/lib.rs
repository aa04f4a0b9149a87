//! Library half of the `tubeseed` binary: flag parsing, settings
//! resolution, the seed loop and the result printer.
pub mod cli;
pub mod output;
pub mod run;
pub mod settings;

pub use cli::Cli;
pub use output::DisplayOptions;
pub use run::{run, RunSummary};
pub use settings::AppConfig;
