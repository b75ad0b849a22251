//! Render configuration: template/output paths and the placeholder mapping.

pub mod parse;

use std::path::PathBuf;

use crate::domain::{AppError, PlaceholderMapping};

/// Template read when no path is configured.
pub const DEFAULT_TEMPLATE_FILE: &str = "agent-installer.sh";
/// Installer written when no path is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "install-test.sh";

pub const AGENT_ID_MARKER: &str = "{{AGENT_ID}}";
pub const TOKEN_MARKER: &str = "{{TOKEN}}";
pub const DOMAIN_MARKER: &str = "{{DOMAIN}}";

const DEFAULT_AGENT_ID: &str = "Ankara-01";
const DEFAULT_TOKEN: &str = "MY_SECURE_TOKEN";
const DEFAULT_DOMAIN: &str = "localhost";

/// Everything a single render needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub template: PathBuf,
    pub output: PathBuf,
    pub placeholders: PlaceholderMapping,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            placeholders: default_placeholders(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.template.as_os_str().is_empty() {
            return Err(AppError::config_error("template path must not be empty"));
        }
        if self.output.as_os_str().is_empty() {
            return Err(AppError::config_error("output path must not be empty"));
        }
        if self.template == self.output {
            return Err(AppError::config_error(format!(
                "output path '{}' must differ from the template path",
                self.output.display()
            )));
        }
        if self.placeholders.markers().any(str::is_empty) {
            return Err(AppError::config_error("placeholder markers must not be empty"));
        }
        Ok(())
    }
}

/// Sample agent identity used for local installer testing.
pub fn default_placeholders() -> PlaceholderMapping {
    [
        (AGENT_ID_MARKER, DEFAULT_AGENT_ID),
        (TOKEN_MARKER, DEFAULT_TOKEN),
        (DOMAIN_MARKER, DEFAULT_DOMAIN),
    ]
    .into_iter()
    .collect()
}

/// Wrap a bare placeholder name in double braces; already-delimited markers pass through.
pub fn marker_for(name: &str) -> String {
    if name.starts_with("{{") && name.ends_with("}}") {
        name.to_string()
    } else {
        format!("{{{{{name}}}}}")
    }
}
