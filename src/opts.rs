use std::path::PathBuf;

use argh::FromArgs;
use log::LevelFilter;

use crate::format::Format;

/// Evaluate math library calls with deterministic results.
#[derive(FromArgs)]
pub struct Opts {
    /// input script
    #[argh(positional)]
    pub file: Option<PathBuf>,

    /// output file
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,

    /// number format: `auto` or `.N` for N fractional digits
    #[argh(option, default = "Default::default()")]
    pub format: Format,

    /// logging level
    #[argh(option, long = "log", default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,
}

impl Opts {
    /// Parse options from `env::args`.
    pub fn parse() -> Opts {
        argh::from_env()
    }
}
