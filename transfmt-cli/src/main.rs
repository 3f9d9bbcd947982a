use std::io::IsTerminal;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};
use transfmt_cli::{
    CommonOptions,
    commands::{run_check_command, run_format_command},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,

    /// Also log debug messages
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Sort, deduplicate and rewrite translation files.
    Format {
        #[command(flatten)]
        options: CommonOptions,

        /// Write output files even if their content is unchanged
        #[arg(long)]
        write_if_unchanged: bool,
    },

    /// Report translation files that are not properly formatted.
    Check {
        #[command(flatten)]
        options: CommonOptions,

        /// Exit successfully even if files require formatting
        #[arg(long)]
        no_fail: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .init();

    let status = match args.commands {
        Commands::Format {
            options,
            write_if_unchanged,
        } => run_format_command(&options, write_if_unchanged),
        Commands::Check { options, no_fail } => run_check_command(&options, no_fail),
    };
    status.into()
}
