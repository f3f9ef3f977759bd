//! Console configuration: `config.json` plus environment and flag overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const BASE_URL_ENV: &str = "SJ_BASE_URL";
pub const HOME_ENV: &str = "SJ_CONSOLE_HOME";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub version: u32,

    /// Backend origin; requests go to `{base_url}/v1/...`.
    pub base_url: String,

    /// Per-request timeout. Unset means requests wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Refuse to confirm a deletion while dependents still reference the target.
    #[serde(default)]
    pub enforce_blockers: bool,

    /// Keep up to this many alerts instead of only the latest one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_queue: Option<usize>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            enforce_blockers: false,
            alert_queue: None,
        }
    }
}

impl ConsoleConfig {
    /// Applies overrides in increasing precedence: environment, then command-line flag.
    pub fn apply_overrides(&mut self, env_base_url: Option<String>, flag_base_url: Option<String>) {
        if let Some(url) = env_base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(url) = flag_base_url {
            self.base_url = url;
        }
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            anyhow::bail!(
                "base url must start with http:// or https:// (got '{}')",
                self.base_url
            );
        }
        if self.alert_queue == Some(0) {
            anyhow::bail!("alert_queue must be at least 1");
        }
        Ok(())
    }
}

/// Location of `config.json` on disk.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `explicit`, else `$SJ_CONSOLE_HOME/config.json`, else `~/.config/sj-console/config.json`.
    pub fn discover(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            return Ok(Self::at(path));
        }
        if let Some(home) = std::env::var_os(HOME_ENV) {
            return Ok(Self::at(PathBuf::from(home).join("config.json")));
        }
        let home = std::env::var_os("HOME")
            .context("cannot locate config: set HOME, SJ_CONSOLE_HOME or pass --config")?;
        Ok(Self::at(
            PathBuf::from(home)
                .join(".config")
                .join("sj-console")
                .join("config.json"),
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config, falling back to defaults when the file does not exist yet.
    pub fn read(&self) -> Result<ConsoleConfig> {
        if !self.path.exists() {
            return Ok(ConsoleConfig::default());
        }
        let bytes = fs::read(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        let cfg: ConsoleConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(cfg)
    }

    pub fn write(&self, cfg: &ConsoleConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.path, &bytes)
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }

    /// Reads the stored config and applies `SJ_BASE_URL` and the `--base-url` flag.
    pub fn load_effective(&self, flag_base_url: Option<String>) -> Result<ConsoleConfig> {
        let mut cfg = self.read()?;
        cfg.apply_overrides(std::env::var(BASE_URL_ENV).ok(), flag_base_url);
        cfg.validate()?;
        Ok(cfg)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("rename into {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
