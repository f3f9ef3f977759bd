use std::path::Path;

use sj_console::model::{CustomFile, ResourceDescriptor};
use sj_console::remote::{ResourceService, sanitize_download_filename};

use super::*;

pub(super) async fn handle_custom_command(
    service: ResourceService,
    command: CustomCommands,
) -> Result<()> {
    match command {
        CustomCommands::List { json } => {
            let items = service
                .list::<CustomFile>()
                .await
                .map_err(anyhow::Error::msg)?;
            if json {
                print_json(&items, "custom list")?;
            } else if items.is_empty() {
                println!("No {} uploaded", service.collection().segment);
            } else {
                for item in items {
                    let version = item.version.as_deref().unwrap_or("-");
                    let uploaded = item.upload_date.as_deref().unwrap_or("-");
                    println!("{} {} {}", item.name, version, uploaded);
                    if let Some(desc) = item.description.filter(|d| !d.is_empty()) {
                        println!("  {}", desc);
                    }
                }
            }
        }
        CustomCommands::Upload { path } => {
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .with_context(|| format!("no file name in {}", path.display()))?
                .to_string();
            let bytes =
                std::fs::read(&path).with_context(|| format!("read {}", path.display()))?;
            let body = service
                .upload(&filename, bytes)
                .await
                .map_err(anyhow::Error::msg)?;
            println!("{}", upload_message(&body));
        }
        CustomCommands::Download { name, version, out } => {
            let target = descriptor(name, version);
            let download = service
                .download(&target)
                .await
                .map_err(anyhow::Error::msg)?;
            let dir = match out {
                Some(dir) => dir,
                None => std::env::current_dir().context("get current dir")?,
            };
            let path = dir.join(sanitize_download_filename(&download.filename));
            write_download(&path, &download.bytes)?;
            println!("Saved {} ({} bytes)", path.display(), download.bytes.len());
        }
        CustomCommands::Delete { name, version } => {
            let target = descriptor(name, version);
            let message = service.remove(&target).await.map_err(anyhow::Error::msg)?;
            println!("{}", message);
        }
    }

    Ok(())
}

fn descriptor(name: String, version: Option<String>) -> ResourceDescriptor {
    ResourceDescriptor { name, version }
}

/// Upload responses are raw bodies; show the envelope message when there is one.
fn upload_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/entity/message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

fn write_download(path: &Path, bytes: &[u8]) -> Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
