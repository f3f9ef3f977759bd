use std::path::PathBuf;

use clap::Subcommand;

use crate::cli_commands::streams::{CreateArgs, DeleteArgs};

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Update stored settings
    Set {
        /// Backend base URL to store
        #[arg(long = "url", value_name = "URL")]
        url: Option<String>,
        /// Request timeout in seconds (0 clears it)
        #[arg(long)]
        timeout_secs: Option<u64>,
        /// Refuse deletions while dependents exist
        #[arg(long)]
        enforce_blockers: Option<bool>,
        /// Keep up to N alerts in the terminal UI (0 keeps only the latest)
        #[arg(long)]
        alert_queue: Option<usize>,
    },
}

#[derive(Subcommand)]
pub(crate) enum CustomCommands {
    /// List uploaded resources
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Upload a local file
    Upload { path: PathBuf },

    /// Download a resource into a directory
    Download {
        name: String,
        /// Required for jars
        version: Option<String>,
        /// Target directory (defaults to current directory)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Delete a resource
    Delete {
        name: String,
        /// Required for jars
        version: Option<String>,
    },
}

#[derive(Subcommand)]
pub(crate) enum StreamsCommands {
    /// List streams
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List stream types the backend supports
    Types {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a stream
    Show {
        name: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a stream
    Create(CreateArgs),

    /// Delete a stream after checking what still uses it
    Delete(DeleteArgs),
}

#[derive(Subcommand)]
pub(crate) enum ServicesCommands {
    /// List services
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a service
    Show {
        name: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}
