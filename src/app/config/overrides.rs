//! Command-line overrides layered over the loaded configuration.

use std::path::PathBuf;

use crate::domain::config::marker_for;
use crate::domain::{
    AGENT_ID_MARKER, AppError, DOMAIN_MARKER, RenderConfig, TOKEN_MARKER, domain_from_server_url,
};
use crate::ports::TemplateFilesystem;

use super::load_config;

/// Caller-supplied render options. `None` fields keep the configured value.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Settings file to load before applying overrides.
    pub config: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub agent_id: Option<String>,
    pub token: Option<String>,
    pub domain: Option<String>,
    /// Agent server URL the `DOMAIN` value is derived from.
    pub server_url: Option<String>,
    /// Raw `MARKER=VALUE` assignments, applied last.
    pub assignments: Vec<String>,
}

/// Build the final configuration for a render.
pub fn resolve_config<F: TemplateFilesystem>(
    options: &RenderOptions,
    fs: &F,
) -> Result<RenderConfig, AppError> {
    let mut config = load_config(options.config.as_deref(), fs)?;

    if let Some(template) = &options.template {
        config.template = template.clone();
    }
    if let Some(output) = &options.output {
        config.output = output.clone();
    }
    if let Some(agent_id) = &options.agent_id {
        config.placeholders.insert(AGENT_ID_MARKER, agent_id.as_str());
    }
    if let Some(token) = &options.token {
        config.placeholders.insert(TOKEN_MARKER, token.as_str());
    }
    match (&options.domain, &options.server_url) {
        (Some(_), Some(_)) => {
            return Err(AppError::config_error("--domain and --server-url are mutually exclusive"));
        }
        (Some(domain), None) => config.placeholders.insert(DOMAIN_MARKER, domain.as_str()),
        (None, Some(url)) => {
            config.placeholders.insert(DOMAIN_MARKER, domain_from_server_url(url)?)
        }
        (None, None) => {}
    }
    for raw in &options.assignments {
        let (marker, value) = parse_assignment(raw)?;
        config.placeholders.insert(marker, value);
    }

    config.validate()?;
    Ok(config)
}

fn parse_assignment(raw: &str) -> Result<(String, String), AppError> {
    let (name, value) =
        raw.split_once('=').ok_or_else(|| AppError::InvalidAssignment(raw.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidAssignment(raw.to_string()));
    }
    Ok((marker_for(name), value.to_string()))
}
