use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Errors while loading or resolving a configuration file.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: PathBuf, message: String },
    /// The file is not valid TOML for [`DasaConfig`](crate::DasaConfig).
    Parse { path: PathBuf, message: String },
    /// A name field (ayanamsha, depth, policy) holds an unknown value.
    UnknownValue { field: &'static str, value: String },
    /// A numeric field is outside its allowed range.
    OutOfRange { field: &'static str, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "cannot read config {}: {message}", path.display())
            }
            Self::Parse { path, message } => {
                write!(f, "invalid config {}: {message}", path.display())
            }
            Self::UnknownValue { field, value } => {
                write!(f, "unknown {field} '{value}'")
            }
            Self::OutOfRange { field, message } => write!(f, "{field}: {message}"),
        }
    }
}

impl Error for ConfigError {}
