#![allow(dead_code)]

use std::net::TcpStream;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

pub struct ServerGuard {
    pub base_url: String,
    addr: String,
    _dir: tempfile::TempDir,
    child: Child,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

impl ServerGuard {
    #[allow(dead_code)]
    pub fn client(&self) -> sj_console::remote::RemoteClient {
        sj_console::remote::RemoteClient::with_base_url(&self.base_url, None)
            .expect("remote client")
    }

    #[allow(dead_code)]
    pub fn addr(&self) -> &str {
        &self.addr
    }
}

pub fn spawn_server() -> Result<ServerGuard> {
    spawn_server_with(&[])
}

pub fn spawn_server_with(extra: &[&str]) -> Result<ServerGuard> {
    let dir = tempfile::tempdir().context("create server tempdir")?;
    let addr_file = dir.path().join("addr.txt");

    let child = Command::new(env!("CARGO_BIN_EXE_sj-dev-server"))
        .args(["--addr", "127.0.0.1:0", "--addr-file"])
        .arg(&addr_file)
        .args(extra)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn sj-dev-server")?;

    let addr = read_addr_file(&addr_file)?;
    wait_for_listener(&addr)?;

    Ok(ServerGuard {
        base_url: format!("http://{}", addr),
        addr,
        _dir: dir,
        child,
    })
}

fn read_addr_file(addr_file: &std::path::Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(s.to_string());
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

fn wait_for_listener(addr: &str) -> Result<()> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("server did not accept connections at {}", addr);
        }
        if TcpStream::connect(addr).is_ok() {
            return Ok(());
        }
        thread::sleep(Duration::from_millis(50));
    }
}

/// Posts raw JSON to a dev-only endpoint (services, instances).
#[allow(dead_code)]
pub async fn post_json(base_url: &str, path: &str, body: serde_json::Value) -> Result<()> {
    reqwest::Client::new()
        .post(format!("{}/v1/{}", base_url, path))
        .json(&body)
        .send()
        .await
        .with_context(|| format!("POST {}", path))?
        .error_for_status()
        .with_context(|| format!("POST {} status", path))?;
    Ok(())
}
