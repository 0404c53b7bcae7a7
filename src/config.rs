use std::path::PathBuf;

use clap::Parser;

use crate::repl::DEFAULT_PROMPT;

#[derive(Parser, Debug)]
#[command(
    name = "stbstore",
    version,
    about = "Single-table record store with a line-oriented shell"
)]
pub struct Cli {
    /// Database file, created if it does not exist
    pub filename: PathBuf,

    /// File used to load and save line history
    #[arg(long, env = "STBSTORE_HISTORY")]
    pub history: Option<PathBuf>,

    /// Prompt printed before each line
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,
}

/// Settings for one shell session.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_path: PathBuf,
    pub history_path: Option<PathBuf>,
    pub prompt: String,
}

impl Config {
    pub fn from_args() -> Self {
        Cli::parse().into()
    }

    pub fn try_from_iter<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Cli::try_parse_from(args)?.into())
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            db_path: cli.filename,
            history_path: cli.history,
            prompt: cli.prompt,
        }
    }
}
