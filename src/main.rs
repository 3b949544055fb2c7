//! Entry point for the `pomo` command.

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pomo::Compiler;
use pomo::config::ConfigManager;
use pomo::workspace::WorkspaceCompiler;
use tracing_subscriber::EnvFilter;

use crate::cli::{
    Cli,
    CliError,
    Command,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter =
        EnvFilter::try_from_env("POMO_LOG").unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).init();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one subcommand.
async fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Compile { source, output } => {
            Compiler::new().compile(&source, output.as_deref())?;
            Ok(())
        }
        Command::Workspace { root, num_threads } => compile_workspace(root, num_threads).await,
    }
}

/// Compiles every catalog under `root`.
async fn compile_workspace(root: PathBuf, num_threads: Option<usize>) -> Result<(), CliError> {
    let mut config_manager = ConfigManager::load(root)?;
    config_manager.override_num_threads(num_threads)?;

    let report = WorkspaceCompiler::new().compile_workspace(&config_manager).await?;
    tracing::info!(
        compiled = report.compiled.len(),
        failed = report.failed.len(),
        "Workspace compiled"
    );

    if report.is_success() { Ok(()) } else { Err(CliError::PartialFailure(report.failed.len())) }
}
