use std::io::{BufRead, Write};

use sj_console::alerts::AlertBoard;
use sj_console::deletion::{BlockerPolicy, DeletionOutcome, SafeDeletion};
use sj_console::model::{Generator, ResourceDescriptor, Stream};
use sj_console::streams::{StreamsApi, StreamsBackend};
use sj_console::tags::TagBuffer;

use crate::cli_commands::streams::{CreateArgs, DeleteArgs};

use super::*;

pub(super) async fn handle_streams_command(
    session: &Session,
    command: StreamsCommands,
) -> Result<()> {
    let (cfg, client) = session.client()?;
    let api = StreamsApi::new(&client);

    match command {
        StreamsCommands::List { json } => {
            let streams = api.list_streams().await.map_err(anyhow::Error::msg)?;
            if json {
                print_json(&streams, "streams")?;
            } else if streams.is_empty() {
                println!("No streams");
            } else {
                for s in streams {
                    println!("{} {} {}", s.name, s.stream_type, s.service);
                }
            }
        }
        StreamsCommands::Types { json } => {
            let types = api.stream_types().await.map_err(anyhow::Error::msg)?;
            if json {
                print_json(&types, "stream types")?;
            } else {
                for t in types {
                    println!("{}", t);
                }
            }
        }
        StreamsCommands::Show { name, json } => {
            let stream = client
                .streams()
                .get::<Stream>(&name)
                .await
                .map_err(anyhow::Error::msg)?;
            if json {
                print_json(&stream, "stream")?;
            } else {
                print_stream(&stream);
            }
        }
        StreamsCommands::Create(args) => {
            let stream = stream_from_args(args);
            let message = api.save_stream(&stream).await.map_err(anyhow::Error::msg)?;
            println!("{}", message);
        }
        StreamsCommands::Delete(args) => {
            let policy = BlockerPolicy::from_enforce(cfg.enforce_blockers || args.enforce_blockers);
            delete_stream(&api, policy, args).await?;
        }
    }

    Ok(())
}

fn print_stream(stream: &Stream) {
    println!("name: {}", stream.name);
    println!("type: {}", stream.stream_type);
    println!("service: {}", stream.service);
    if let Some(desc) = &stream.description {
        println!("description: {}", desc);
    }
    if !stream.tags.is_empty() {
        println!("tags: {}", stream.tags.join(" "));
    }
    if let Some(p) = stream.partitions {
        println!("partitions: {}", p);
    }
    if let Some(r) = stream.replication_factor {
        println!("replication_factor: {}", r);
    }
    if let Some(primary) = &stream.primary {
        println!("primary: {}", primary);
    }
    if let Some(generator) = &stream.generator {
        println!(
            "generator: {} service={} instances={}",
            generator.generator_type, generator.service, generator.instance_count
        );
    }
}

/// Tags are typed through the same buffer the terminal UI uses, so splitting and
/// whitespace handling match.
fn parse_tags(raw: &str) -> Vec<String> {
    let mut buf = TagBuffer::new();
    for c in raw.chars() {
        if c.is_whitespace() {
            buf.press_space();
        } else {
            buf.type_char(c);
        }
    }
    buf.finish()
}

fn stream_from_args(args: CreateArgs) -> Stream {
    let mut generator = Generator::default();
    if let Some(t) = args.generator_type {
        generator.generator_type = t;
    }
    if let Some(s) = args.generator_service {
        generator.service = s;
    }
    if let Some(n) = args.instance_count {
        generator.instance_count = n;
    }
    Stream {
        name: args.name,
        description: args.description,
        stream_type: args.stream_type,
        service: args.service,
        tags: parse_tags(&args.tags),
        partitions: args.partitions,
        replication_factor: args.replication_factor,
        primary: args.primary,
        force: args.force,
        generator: Some(generator),
    }
    .prepared_for_save()
}

async fn delete_stream(api: &StreamsApi, policy: BlockerPolicy, args: DeleteArgs) -> Result<()> {
    let mut alerts = AlertBoard::default();
    let mut deletion = SafeDeletion::new(policy);

    let pending = deletion
        .begin(api, ResourceDescriptor::named(&args.name), &mut alerts)
        .await
        .context("dependents lookup did not complete")?;
    if let Some(alert) = alerts.latest() {
        eprintln!("warning: could not check dependents: {}", alert.message);
    }
    if !pending.blockers.is_empty() {
        println!("Stream '{}' is used by:", args.name);
        for b in &pending.blockers {
            println!("  {}", b);
        }
    }

    if let Some(refusal) = deletion.blocked() {
        deletion.cancel();
        return Err(refusal.into());
    }

    if !args.yes && !confirm(&format!("Delete stream '{}'?", args.name))? {
        deletion.cancel();
        println!("Cancelled");
        return Ok(());
    }

    match deletion.confirm_and_delete(api, &mut alerts).await? {
        DeletionOutcome::Deleted { message } => println!("{}", message),
        DeletionOutcome::Failed { message } => anyhow::bail!(message),
    }
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush().context("flush stdout")?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read confirmation")?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

#[cfg(test)]
#[path = "../tests/cli_exec/streams_tests.rs"]
mod tests;
