//! Configuration for the dasa engine.
//!
//! A small TOML file selects the ayanamsha, default depth, partial-period
//! policy, default timezone offset and the ephemeris year range:
//!
//! ```toml
//! ayanamsha = "lahiri"
//! depth = "antardasha"
//! partial_period_policy = "proportional"
//! default_tz_offset = 5.5
//!
//! [ephemeris]
//! min_year = 1600
//! max_year = 2400
//! ```
//!
//! The file is looked up at an explicit path first, then at `$DASA_CONFIG`.
//! With neither, built-in defaults apply. Every field is optional.

pub mod error;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use dasa_core::EngineConfig;
use dasa_search::{DEFAULT_TZ_OFFSET_HOURS, DashaRequest};
use dasa_vedic_base::AyanamshaSystem;
use dasa_vedic_base::dasha::{DashaLevel, PartialPeriodPolicy};
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "DASA_CONFIG";

/// Raw configuration as read from TOML. Names are resolved by [`DasaConfig::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DasaConfig {
    pub ayanamsha: String,
    pub depth: String,
    pub partial_period_policy: String,
    pub default_tz_offset: f64,
    pub ephemeris: EphemerisSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EphemerisSection {
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for EphemerisSection {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            min_year: engine.min_year,
            max_year: engine.max_year,
        }
    }
}

impl Default for DasaConfig {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::default().key().to_string(),
            depth: DashaLevel::default().name().to_ascii_lowercase(),
            partial_period_policy: PartialPeriodPolicy::default().name().to_string(),
            default_tz_offset: DEFAULT_TZ_OFFSET_HOURS,
            ephemeris: EphemerisSection::default(),
        }
    }
}

/// Typed settings ready for the engine and orchestration layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedConfig {
    pub request: DashaRequest,
    pub default_tz_offset: f64,
    pub engine: EngineConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            request: DashaRequest::default(),
            default_tz_offset: DEFAULT_TZ_OFFSET_HOURS,
            engine: EngineConfig::default(),
        }
    }
}

impl DasaConfig {
    /// Parse TOML text. `path` is only used in error messages.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Load from `explicit`, else from `$DASA_CONFIG`, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match config_path(explicit, std::env::var_os(CONFIG_ENV_VAR)) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Resolve names into domain enums and check numeric ranges.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let ayanamsha = self
            .ayanamsha
            .parse::<AyanamshaSystem>()
            .map_err(|_| unknown("ayanamsha", &self.ayanamsha))?;
        let depth = self
            .depth
            .parse::<DashaLevel>()
            .map_err(|_| unknown("depth", &self.depth))?;
        let policy = self
            .partial_period_policy
            .parse::<PartialPeriodPolicy>()
            .map_err(|_| unknown("partial_period_policy", &self.partial_period_policy))?;

        if !(-12.0..=14.0).contains(&self.default_tz_offset) {
            return Err(ConfigError::OutOfRange {
                field: "default_tz_offset",
                message: format!("{} is not between -12 and 14", self.default_tz_offset),
            });
        }
        let (lo, hi) = EngineConfig::LIMIT_YEARS;
        let EphemerisSection { min_year, max_year } = self.ephemeris;
        if min_year > max_year || min_year < lo || max_year > hi {
            return Err(ConfigError::OutOfRange {
                field: "ephemeris",
                message: format!("years {min_year}..={max_year} must be ordered within {lo}..={hi}"),
            });
        }

        Ok(ResolvedConfig {
            request: DashaRequest {
                ayanamsha,
                depth,
                policy,
            },
            default_tz_offset: self.default_tz_offset,
            engine: EngineConfig::new(min_year, max_year),
        })
    }
}

fn unknown(field: &'static str, value: &str) -> ConfigError {
    ConfigError::UnknownValue {
        field,
        value: value.to_string(),
    }
}

/// Explicit path wins; an empty environment value counts as unset.
fn config_path(explicit: Option<&Path>, env_value: Option<OsString>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
}
