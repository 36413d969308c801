//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tsukamoto_core::dataset::AttendanceScale;

/// Top-level tsukamoto configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TsukamotoConfig {
    /// Reject out-of-range inputs before fuzzification.
    #[serde(default = "default_true")]
    pub validate_inputs: bool,
    /// Decimal places for scores in text output.
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Output format when `--format` is not given: "text" or "json".
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Print membership degrees with every assessment.
    #[serde(default)]
    pub show_membership: bool,
    /// Scale of the attendance column in datasets.
    #[serde(default)]
    pub attendance_scale: AttendanceScale,
}

fn default_true() -> bool {
    true
}
fn default_precision() -> usize {
    2
}
fn default_format() -> String {
    "text".to_string()
}

impl Default for TsukamotoConfig {
    fn default() -> Self {
        Self {
            validate_inputs: true,
            precision: default_precision(),
            default_format: default_format(),
            show_membership: false,
            attendance_scale: AttendanceScale::default(),
        }
    }
}

impl TsukamotoConfig {
    /// Output format to use, preferring an explicit command-line value.
    pub fn format<'a>(&'a self, cli: Option<&'a str>) -> &'a str {
        cli.unwrap_or(&self.default_format)
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `tsukamoto.toml` in the current directory
/// 2. `~/.config/tsukamoto/config.toml`
///
/// `TSUKAMOTO_FORMAT` overrides `default_format`.
pub fn load_config_from(path: Option<&Path>) -> Result<TsukamotoConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("tsukamoto.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TsukamotoConfig::default(),
    };

    apply_format_override(&mut config, std::env::var("TSUKAMOTO_FORMAT").ok());

    Ok(config)
}

/// Parse a config file's contents.
pub fn parse_config(content: &str) -> Result<TsukamotoConfig> {
    let config: TsukamotoConfig = toml::from_str(content)?;
    anyhow::ensure!(
        matches!(config.default_format.as_str(), "text" | "json"),
        "default_format must be \"text\" or \"json\", got \"{}\"",
        config.default_format
    );
    Ok(config)
}

fn apply_format_override(config: &mut TsukamotoConfig, value: Option<String>) {
    if let Some(format) = value.filter(|f| !f.trim().is_empty()) {
        config.default_format = format.trim().to_lowercase();
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("tsukamoto"))
}
