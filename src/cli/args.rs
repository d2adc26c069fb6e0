//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::report::Format;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory to scan for source and resource files
    #[arg(long, value_name = "DIR")]
    pub scan: PathBuf,

    /// Include a suggested resource entry for every missing key
    #[arg(long)]
    pub fix: bool,

    /// Report file to write (default: i18n_report.<format>)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t)]
    pub format: Format,

    /// Locale whose <locale>.json receives suggestions (overrides config file)
    #[arg(long, env = "KEYSCAN_DEFAULT_LOCALE")]
    pub default_locale: Option<String>,

    /// Exit with status 1 when missing keys are found
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Output path, falling back to `i18n_report.<ext>` in the working directory.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format.default_output()))
    }
}
