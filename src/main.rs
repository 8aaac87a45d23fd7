use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use doclint::cli::commands;
use doclint::cli::{Cli, Commands};
use doclint::discovery::DiscoveryConfig;
use doclint::linting::config::SettingsPatch;
use doclint::linting::LintOptions;

/// Log to stderr so stdout stays machine-readable. `DOCLINT_LOG` takes an
/// env-filter directive and defaults to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("DOCLINT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let discovery = DiscoveryConfig {
        include: cli.include.clone(),
        exclude: cli.exclude.clone(),
    };

    match cli.command {
        Commands::Check {
            ref path,
            ref config,
            min_length,
            no_check_references,
            require_override,
        } => {
            let project_path = PathBuf::from(path)
                .canonicalize()
                .unwrap_or_else(|_| PathBuf::from(path));

            let options = LintOptions {
                discovery,
                config_path: config.as_ref().map(PathBuf::from),
                settings: SettingsPatch {
                    minimum_comment_length: min_length,
                    check_references: no_check_references.then_some(false),
                    require_override_annotation: require_override.then_some(true),
                },
            };
            let (output, has_diagnostics) =
                commands::run_check(&project_path, &options, &cli.format)?;
            println!("{}", output);
            if has_diagnostics {
                std::process::exit(1);
            }
        }

        Commands::Resolve {
            ref name,
            ref file,
            ref root,
        } => {
            let project_path = PathBuf::from(root)
                .canonicalize()
                .unwrap_or_else(|_| PathBuf::from(root));
            let (output, resolved) = commands::run_resolve(
                &project_path,
                &PathBuf::from(file),
                name,
                &discovery,
                &cli.format,
            )?;
            println!("{}", output);
            if !resolved {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
