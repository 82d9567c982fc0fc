use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bpcomplexity")]
#[command(about = "Cognitive complexity scoring for Blueprint graphs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every entry of a project snapshot and list the complex ones
    Analyze {
        /// Project snapshot (JSON)
        project: PathBuf,

        /// Configuration file (defaults to the nearest .bpcomplexity.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Minimum percent for an entry to be listed
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only scan Blueprints under this package path
        #[arg(long, conflicts_with = "all_packages")]
        package_prefix: Option<String>,

        /// Scan Blueprints in every package, not only the configured one
        #[arg(long)]
        all_packages: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Show how each node of one entry contributes to its score
    Explain {
        /// Project snapshot (JSON)
        project: PathBuf,

        /// Blueprint name
        blueprint: String,

        /// Entry display name or node guid
        entry: String,

        /// Configuration file (defaults to the nearest .bpcomplexity.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
