use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sj_console::config::ConfigStore;
use sj_console::logging;

use crate::Commands;

#[derive(Parser)]
#[command(name = "sj-console")]
#[command(about = "Console for stream-processing platform resources", long_about = None)]
pub(crate) struct Cli {
    /// Path to config.json (defaults to $SJ_CONSOLE_HOME or ~/.config/sj-console)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Backend base URL; overrides the config file and SJ_BASE_URL
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file while the terminal UI runs
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = ConfigStore::discover(cli.config)?;

    match cli.command {
        None => {
            if let Some(path) = &cli.log_file {
                logging::init_file(path, cli.verbose)?;
            }
            let config = store.load_effective(cli.base_url)?;
            sj_console::tui::run_with_options(sj_console::tui::TuiRunOptions { config })?;
        }
        Some(command) => {
            if cli.log_file.is_some() {
                anyhow::bail!(
                    "`--log-file` is only supported when running the TUI (no subcommand)"
                );
            }
            logging::init_stderr(cli.verbose);
            let session = crate::cli_exec::Session::new(store, cli.base_url);
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("start async runtime")?;
            runtime.block_on(crate::cli_exec::handle_command(&session, command))?;
        }
    }

    Ok(())
}
