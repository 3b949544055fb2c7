//! Command line arguments.

use std::path::PathBuf;

use clap::{
    Parser,
    Subcommand,
};
use pomo::config::ConfigError;
use pomo::workspace::WorkspaceError;
use thiserror::Error;

/// Compile gettext .po catalogs into binary .mo files
#[derive(Parser, Debug)]
#[command(name = "pomo", version)]
pub(crate) struct Cli {
    /// Log filter used when POMO_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub(crate) log_level: String,

    /// Action to run
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Compile a single catalog
    Compile {
        /// Path to the .po file
        source: PathBuf,

        /// Output path. Defaults to the source path with ".po" replaced by ".mo"
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compile every catalog in a workspace, configured by .pomo.json
    Workspace {
        /// Workspace root
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Number of catalogs compiled in parallel
        #[arg(long, env = "POMO_NUM_THREADS")]
        num_threads: Option<usize>,
    },
}

/// Failures surfaced by the binary.
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Single-file compilation failed
    #[error(transparent)]
    Compile(#[from] pomo::Error),
    /// The workspace configuration is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The workspace could not be scanned
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
    /// Some catalogs in the workspace failed
    #[error("{0} catalog(s) failed to compile")]
    PartialFailure(usize),
}
