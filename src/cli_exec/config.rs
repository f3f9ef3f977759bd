use super::*;

pub(super) fn handle_config_command(session: &Session, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            let cfg = session.config()?;
            if json {
                print_json(&cfg, "config")?;
            } else {
                println!("path: {}", session.store.path().display());
                println!("base_url: {}", cfg.base_url);
                match cfg.timeout_secs {
                    Some(secs) => println!("timeout_secs: {}", secs),
                    None => println!("timeout_secs: none"),
                }
                println!("enforce_blockers: {}", cfg.enforce_blockers);
                match cfg.alert_queue {
                    Some(n) => println!("alert_queue: {}", n),
                    None => println!("alert_queue: single"),
                }
            }
        }
        ConfigCommands::Set {
            url,
            timeout_secs,
            enforce_blockers,
            alert_queue,
        } => {
            let mut cfg = session.store.read()?;
            if let Some(url) = url {
                cfg.apply_overrides(None, Some(url));
            }
            if let Some(secs) = timeout_secs {
                cfg.timeout_secs = (secs > 0).then_some(secs);
            }
            if let Some(enforce) = enforce_blockers {
                cfg.enforce_blockers = enforce;
            }
            if let Some(n) = alert_queue {
                cfg.alert_queue = (n > 0).then_some(n);
            }
            cfg.validate()?;
            session.store.write(&cfg)?;
            println!("Saved {}", session.store.path().display());
        }
    }

    Ok(())
}
