use anyhow::{Context, Result};

use sj_console::config::{ConfigStore, ConsoleConfig};
use sj_console::remote::RemoteClient;

use crate::{Commands, ConfigCommands, CustomCommands, ServicesCommands, StreamsCommands};

mod config;
mod custom;
mod dispatch;
mod services;
mod streams;

/// What every command needs: where config lives and the `--base-url` override.
pub(crate) struct Session {
    store: ConfigStore,
    base_url: Option<String>,
}

impl Session {
    pub(crate) fn new(store: ConfigStore, base_url: Option<String>) -> Self {
        Self { store, base_url }
    }

    fn config(&self) -> Result<ConsoleConfig> {
        self.store.load_effective(self.base_url.clone())
    }

    fn client(&self) -> Result<(ConsoleConfig, RemoteClient)> {
        let cfg = self.config()?;
        let client = RemoteClient::new(&cfg).context("create remote client")?;
        Ok((cfg, client))
    }
}

pub(crate) async fn handle_command(session: &Session, command: Commands) -> Result<()> {
    dispatch::handle_command(session, command).await
}

fn print_json<T: serde::Serialize>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", what))?
    );
    Ok(())
}
