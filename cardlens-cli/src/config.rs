//! `config.toml`: input limits and output style for the `cardlens` binary.
//!
//! Lookup order: `--config <PATH>`, then `$CARDLENS_CONFIG`, then
//! `$HOME/.cardlens/config.toml`. A missing file means defaults.

use anyhow::{Context, Result, bail};
use log::debug;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "CARDLENS_CONFIG";

/// Upload cap carried over from the web form: 16 MiB.
pub const DEFAULT_MAX_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub input: InputSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputSection {
    /// Files larger than this are refused before parsing.
    pub max_bytes: u64,
    pub require_pdf_extension: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSection {
    /// Pretty-print JSON (overridden by `--compact`)
    pub pretty: bool,
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            require_pdf_extension: true,
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(s).context("parse config.toml")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.max_bytes == 0 {
            bail!("input.max_bytes must be greater than zero");
        }
        Ok(())
    }
}

/// Pick the config file from an explicit path, the env override or `$HOME`.
pub fn resolve_path(
    explicit: Option<&Path>,
    env_override: Option<OsString>,
    home: Option<OsString>,
) -> Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    if let Some(p) = env_override.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(p));
    }
    let home = home.context("HOME is not set; pass --config <PATH>")?;
    Ok(PathBuf::from(home).join(".cardlens").join("config.toml"))
}

pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve_path(
        explicit,
        std::env::var_os(CONFIG_ENV),
        std::env::var_os("HOME"),
    )
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("no config at {}; using defaults", path.display());
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Config::from_toml(&s).with_context(|| format!("invalid config {}", path.display()))
}

/// Write the default config unless a file is already there.
///
/// Returns `false` when an existing file was left untouched.
pub fn write_default_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let s = toml::to_string_pretty(&Config::default()).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(true)
}
