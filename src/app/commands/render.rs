//! Render command: read the installer template, substitute placeholders, write the script.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::config::default_placeholders;
use crate::domain::{AppError, PlaceholderMapping, RenderConfig, Replacement, render_text};
use crate::ports::TemplateFilesystem;

/// Result of a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    /// Path the rendered script was written to.
    pub output: PathBuf,
    /// Occurrences replaced per marker, in application order.
    pub replacements: Vec<Replacement>,
    /// True when the built-in sample agent values were substituted.
    pub sample_values: bool,
}

impl RenderOutcome {
    /// Suggested command for running the generated installer. Printed, never executed.
    pub fn run_hint(&self) -> String {
        format!("sudo bash {}", self.output.display())
    }

    pub fn total_replacements(&self) -> usize {
        self.replacements.iter().map(|r| r.count).sum()
    }
}

/// Render `template` into `output` using `substitutions`.
///
/// A missing template fails with [`AppError::MissingTemplate`] and an output
/// that resolves to the template fails with [`AppError::OutputIsTemplate`],
/// both before anything is written. An existing output file is overwritten.
/// The output is left in place if only marking it executable fails.
pub fn render<F: TemplateFilesystem>(
    fs: &F,
    template: &Path,
    output: &Path,
    substitutions: &PlaceholderMapping,
) -> Result<RenderOutcome, AppError> {
    if !fs.exists(template) {
        return Err(AppError::MissingTemplate { path: template.to_path_buf() });
    }
    if fs.canonicalize(template)? == resolve_output(fs, output)? {
        return Err(AppError::OutputIsTemplate {
            output: output.to_path_buf(),
            template: template.to_path_buf(),
        });
    }

    let content = fs.read_text(template)?;
    let rendered = render_text(&content, substitutions);
    for replacement in &rendered.replacements {
        debug!(marker = %replacement.marker, count = replacement.count, "applied placeholder");
    }

    fs.write_text(output, &rendered.text)?;
    if let Err(err) = fs.set_executable(output) {
        warn!(output = %output.display(), error = %err, "could not mark installer executable");
    }

    info!(
        template = %template.display(),
        output = %output.display(),
        bytes = rendered.text.len(),
        "rendered installer script"
    );

    Ok(RenderOutcome {
        output: output.to_path_buf(),
        replacements: rendered.replacements,
        sample_values: *substitutions == default_placeholders(),
    })
}

/// Validate `config` and render with it.
pub fn execute<F: TemplateFilesystem>(
    fs: &F,
    config: &RenderConfig,
) -> Result<RenderOutcome, AppError> {
    config.validate()?;
    render(fs, &config.template, &config.output, &config.placeholders)
}

/// Canonical form of `output`; a not-yet-existing file resolves through its parent directory.
fn resolve_output<F: TemplateFilesystem>(fs: &F, output: &Path) -> Result<PathBuf, AppError> {
    if fs.exists(output) {
        return fs.canonicalize(output);
    }
    let name = output.file_name().ok_or_else(|| {
        AppError::config_error(format!("output path '{}' has no file name", output.display()))
    })?;
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok(fs.canonicalize(parent)?.join(name))
}
