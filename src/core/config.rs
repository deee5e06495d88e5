//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lifeterm/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::seeds;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LifeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub initial_seed: Option<String>,
    pub frame_interval_ms: Option<u64>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub cell_glyph: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 100;
pub const DEFAULT_CELL_GLYPH: &str = "\u{25A3}"; // ▣
pub const DEFAULT_LOG_FILE: &str = "lifeterm.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub seed_index: usize,
    pub frame_interval: Duration,
    pub cell_glyph: String,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub seed: Option<String>,
    pub frame_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.lifeterm/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lifeterm").join("config.toml"))
}

/// Load config from `~/.lifeterm/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LifeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LifeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LifeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LifeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<LifeConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Written on first run. Every line is commented, so it parses to an empty config.
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# lifeterm configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults -> this file -> env vars -> CLI flags.

# [general]
# initial_seed = "ACORN"             # ACORN, GLIDER, R_PENTOMINO, BLINKER, PULSAR, GOSPER_GUN
# frame_interval_ms = 100            # Or set LIFETERM_FRAME_MS
# log_file = "lifeterm.log"
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"

# [display]
# cell_glyph = "▣"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &LifeConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &LifeConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Seed: CLI → env → config → first catalog entry
    let seed_index = cli
        .seed
        .clone()
        .or_else(|| env("LIFETERM_SEED"))
        .or_else(|| config.general.initial_seed.clone())
        .map(|name| {
            seeds::find(&name).unwrap_or_else(|| {
                warn!("Unknown seed '{}', starting with {}", name, seeds::CATALOG[0].name);
                0
            })
        })
        .unwrap_or(0);

    // Frame interval: CLI → env → config → default, never zero
    let frame_ms = cli
        .frame_ms
        .or_else(|| {
            env("LIFETERM_FRAME_MS").and_then(|raw| match raw.trim().parse() {
                Ok(ms) => Some(ms),
                Err(_) => {
                    warn!("Ignoring invalid LIFETERM_FRAME_MS value '{}'", raw);
                    None
                }
            })
        })
        .or(config.general.frame_interval_ms)
        .unwrap_or(DEFAULT_FRAME_INTERVAL_MS)
        .max(1);

    let cell_glyph = config
        .display
        .cell_glyph
        .clone()
        .filter(|glyph| !glyph.is_empty())
        .unwrap_or_else(|| DEFAULT_CELL_GLYPH.to_string());

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let log_level = match config.general.log_level.as_deref() {
        Some(raw) => raw.parse::<LevelFilter>().unwrap_or_else(|_| {
            warn!("Unknown log level '{}', using {}", raw, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        seed_index,
        frame_interval: Duration::from_millis(frame_ms),
        cell_glyph,
        log_file,
        log_level,
    }
}
