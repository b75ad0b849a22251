use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for agent-installer operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Template file does not exist.
    #[error("Could not find template file '{}'", .path.display())]
    MissingTemplate { path: PathBuf },

    /// Template file is not valid UTF-8 text.
    #[error("Template file '{}' is not valid UTF-8 text", .path.display())]
    Encoding { path: PathBuf },

    /// Output path resolves to the template itself.
    #[error(
        "Output '{}' is the template file '{}'; refusing to overwrite it",
        .output.display(),
        .template.display()
    )]
    OutputIsTemplate { output: PathBuf, template: PathBuf },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Config file named explicitly but absent.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Agent server URL could not be turned into a domain.
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    /// `MARKER=VALUE` assignment is malformed.
    #[error("Invalid placeholder assignment '{0}': expected MARKER=VALUE")]
    InvalidAssignment(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
