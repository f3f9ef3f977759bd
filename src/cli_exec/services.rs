use sj_console::model::Service;

use super::*;

pub(super) async fn handle_services_command(
    session: &Session,
    command: ServicesCommands,
) -> Result<()> {
    let (_, client) = session.client()?;
    let services = client.services();

    match command {
        ServicesCommands::List { json } => {
            let items = services
                .list::<Service>()
                .await
                .map_err(anyhow::Error::msg)?;
            if json {
                print_json(&items, "services")?;
            } else {
                for s in items {
                    println!("{} {}", s.name, s.service_type);
                }
            }
        }
        ServicesCommands::Show { name, json } => {
            let service = services
                .get::<Service>(&name)
                .await
                .map_err(anyhow::Error::msg)?;
            if json {
                print_json(&service, "service")?;
            } else {
                println!("name: {}", service.name);
                println!("type: {}", service.service_type);
                if let Some(desc) = &service.description {
                    println!("description: {}", desc);
                }
                if let Some(provider) = &service.provider {
                    println!("provider: {}", provider);
                }
                for (key, value) in &service.extra {
                    match value.as_str() {
                        Some(s) => println!("{}: {}", key, s),
                        None => println!("{}: {}", key, value),
                    }
                }
            }
        }
    }

    Ok(())
}
