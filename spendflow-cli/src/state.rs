use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$SPENDFLOW_HOME`, or `~/.spendflow`
pub fn spendflow_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("SPENDFLOW_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".spendflow"))
}

pub fn ensure_spendflow_home() -> Result<PathBuf> {
    let dir = spendflow_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
