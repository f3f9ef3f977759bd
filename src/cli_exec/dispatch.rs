use super::config::handle_config_command;
use super::custom::handle_custom_command;
use super::services::handle_services_command;
use super::streams::handle_streams_command;
use super::*;

pub(super) async fn handle_command(session: &Session, command: Commands) -> Result<()> {
    match command {
        Commands::Config { command } => handle_config_command(session, command)?,
        Commands::Files { command } => {
            let (_, client) = session.client()?;
            handle_custom_command(client.files(), command).await?
        }
        Commands::Jars { command } => {
            let (_, client) = session.client()?;
            handle_custom_command(client.jars(), command).await?
        }
        Commands::Streams { command } => handle_streams_command(session, command).await?,
        Commands::Services { command } => handle_services_command(session, command).await?,
    }

    Ok(())
}
