//! agent-installer: render the monitoring agent installer script from its shell template.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::commands::render as render_cmd;
use services::LocalFilesystem;

pub use app::commands::render::RenderOutcome;
pub use app::config::RenderOptions;
pub use domain::{AppError, PlaceholderMapping, RenderConfig, domain_from_server_url};

/// Render `template` into `output` on local disk.
///
/// Fails with [`AppError::MissingTemplate`] without touching `output` when the
/// template does not exist.
pub fn render(
    template: &Path,
    output: &Path,
    substitutions: &PlaceholderMapping,
) -> Result<RenderOutcome, AppError> {
    render_cmd::render(&LocalFilesystem, template, output, substitutions)
}

/// Resolve the configuration for `options` (defaults, settings file, overrides).
pub fn resolve_config(options: &RenderOptions) -> Result<RenderConfig, AppError> {
    app::config::resolve_config(options, &LocalFilesystem)
}

/// Resolve the configuration for `options` and render with it.
pub fn render_with(options: &RenderOptions) -> Result<RenderOutcome, AppError> {
    let config = resolve_config(options)?;
    render_cmd::execute(&LocalFilesystem, &config)
}
