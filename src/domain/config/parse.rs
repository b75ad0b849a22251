//! Pure parse/validate for the render settings file.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{AppError, RenderConfig};

use super::marker_for;

/// On-disk shape of the settings file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub render: RenderSection,
    #[serde(default)]
    pub placeholders: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSection {
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl ConfigFile {
    /// Layer the file's values over `base`.
    pub fn apply_to(self, mut base: RenderConfig) -> RenderConfig {
        if let Some(template) = self.render.template {
            base.template = template;
        }
        if let Some(output) = self.render.output {
            base.output = output;
        }
        for (name, value) in self.placeholders {
            base.placeholders.insert(marker_for(&name), value);
        }
        base
    }
}

/// Parse settings TOML and merge it over the defaults.
pub fn parse_config_content(content: &str) -> Result<RenderConfig, AppError> {
    let file: ConfigFile = toml::from_str(content)?;
    let config = file.apply_to(RenderConfig::default());
    config.validate()?;
    Ok(config)
}
