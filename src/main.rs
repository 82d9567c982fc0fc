use anyhow::Result;
use bpcomplexity::cli::{self, Commands};
use bpcomplexity::commands::{self, AnalyzeConfig, ExplainConfig};

fn main() -> Result<()> {
    let cli = cli::parse_args();

    match cli.command {
        Commands::Analyze {
            project,
            config,
            threshold,
            format,
            output,
            package_prefix,
            all_packages,
            verbosity,
        } => {
            init_logging(verbosity);
            commands::handle_analyze(AnalyzeConfig {
                project,
                config,
                threshold,
                format,
                output,
                package_prefix,
                all_packages,
            })
        }
        Commands::Explain {
            project,
            blueprint,
            entry,
            config,
            format,
            verbosity,
        } => {
            init_logging(verbosity);
            commands::handle_explain(ExplainConfig {
                project,
                blueprint,
                entry,
                config,
                format,
            })
        }
        Commands::Init { force } => {
            init_logging(0);
            commands::init_config(force)
        }
    }
}

/// `RUST_LOG` wins when set; otherwise each `-v` raises the level one step
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
