use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use spendflow_ingest::ParserOptions;
use std::fs;
use std::path::PathBuf;

use crate::state::{ensure_spendflow_home, spendflow_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputSection,
    pub parser: ParserSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSection {
    pub skip_markers: Vec<String>,
}

impl Default for ParserSection {
    fn default() -> Self {
        Self {
            skip_markers: ParserOptions::default().skip_markers,
        }
    }
}

impl ParserSection {
    pub fn to_options(&self) -> ParserOptions {
        ParserOptions {
            skip_markers: self.skip_markers.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Table,
}

pub fn config_path() -> Result<PathBuf> {
    Ok(spendflow_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    let p = ensure_spendflow_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let p = save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let cfg = Config::default();
        let s = toml::to_string_pretty(&cfg).unwrap();
        assert!(s.contains("format = \"json\""));
        assert_eq!(toml::from_str::<Config>(&s).unwrap(), cfg);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let cfg: Config = toml::from_str("[output]\nformat = \"table\"\n").unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Table);
        assert!(cfg.output.pretty);
        assert_eq!(cfg.parser.skip_markers, vec!["Transaction Report", "Page"]);
    }

    #[test]
    fn test_parser_section_to_options() {
        let section = ParserSection {
            skip_markers: vec!["Closing balance".into()],
        };
        assert_eq!(section.to_options().skip_markers, vec!["Closing balance"]);
    }
}
