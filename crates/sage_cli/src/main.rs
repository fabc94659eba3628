//! Sage Tokens CLI
//!
//! Resolves a token registry (`tokens.toml`) against a base theme and
//! reports what a stylesheet generator would see:
//! - `show`: print the merged theme as TOML or JSON
//! - `check`: validate the merged theme and list diagnostics
//! - `scale`: print one scale extension
//! - `init`: write the sage registry as a starting `tokens.toml`
//! - `presets`: list the built-in base themes

mod commands;
mod project;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Resolve and check design-token registries
#[derive(Parser, Debug)]
#[command(name = "sage-tokens")]
#[command(about = "Resolve and check design-token registries")]
#[command(version)]
struct Cli {
    /// Log merge and load details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the theme after merging the registry onto a base preset
    Show {
        /// Registry file or directory containing tokens.toml (builtin sage registry if omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Base preset to merge onto
        #[arg(short, long, default_value = "tailwind")]
        base: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Toml)]
        format: Format,
    },

    /// Validate the merged theme; fails only on errors
    Check {
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, default_value = "tailwind")]
        base: String,

        /// Emit diagnostics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a scale extension (empty when the scale is not extended)
    Scale {
        /// Scale name, e.g. backdrop_blur or animation_delay
        name: String,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write the sage registry as tokens.toml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing tokens.toml
        #[arg(short, long)]
        force: bool,
    },

    /// List base presets
    Presets,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Toml,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Show {
            config,
            base,
            format,
        } => {
            print!("{}", commands::show(config.as_deref(), &base, format)?);
        }
        Command::Check { config, base, json } => {
            let report = commands::check(config.as_deref(), &base, json)?;
            print!("{}", report.output);
            if report.failed {
                anyhow::bail!("token registry has errors");
            }
        }
        Command::Scale { name, config } => {
            print!("{}", commands::scale(config.as_deref(), &name)?);
        }
        Command::Init { path, force } => {
            let written = project::create_tokens_file(&path, force)?;
            println!("Created {}", written.display());
        }
        Command::Presets => {
            print!("{}", commands::presets());
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays parseable
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
