//! Settings file loading.

use std::path::Path;

use crate::domain::config::parse::parse_config_content;
use crate::domain::{AppError, RenderConfig};
use crate::ports::TemplateFilesystem;

/// Load the render configuration from `path`, or the defaults when no file is given.
pub fn load_config<F: TemplateFilesystem>(
    path: Option<&Path>,
    fs: &F,
) -> Result<RenderConfig, AppError> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };

    if !fs.exists(path) {
        return Err(AppError::ConfigMissing(path.display().to_string()));
    }

    let content = fs.read_text(path)?;
    parse_config_content(&content)
}
