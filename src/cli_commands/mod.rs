use clap::Subcommand;

use crate::{ConfigCommands, CustomCommands, ServicesCommands, StreamsCommands};

pub(crate) mod streams;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show or change the stored configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Manage uploaded custom files
    Files {
        #[command(subcommand)]
        command: CustomCommands,
    },

    /// Manage uploaded custom jars (module bundles)
    Jars {
        #[command(subcommand)]
        command: CustomCommands,
    },

    /// Manage streams
    Streams {
        #[command(subcommand)]
        command: StreamsCommands,
    },

    /// Inspect platform services
    Services {
        #[command(subcommand)]
        command: ServicesCommands,
    },
}
