//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::config::RenderOptions;
use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "agent-installer")]
#[command(version)]
#[command(
    about = "Render the monitoring agent installer script from its shell template",
    long_about = None
)]
struct Cli {
    /// TOML settings file ([render] paths and [placeholders] values)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
    /// Installer template to read
    #[arg(short = 't', long)]
    template: Option<PathBuf>,
    /// Path of the generated installer script
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
    /// Value for {{AGENT_ID}}
    #[arg(long)]
    agent_id: Option<String>,
    /// Value for {{TOKEN}}
    #[arg(long)]
    token: Option<String>,
    /// Value for {{DOMAIN}}
    #[arg(long, conflicts_with = "server_url")]
    domain: Option<String>,
    /// Agent server URL to derive {{DOMAIN}} from (e.g. ws://192.168.1.100:5123)
    #[arg(long)]
    server_url: Option<String>,
    /// Extra placeholder assignment, MARKER=VALUE (repeatable)
    #[arg(long = "set", value_name = "MARKER=VALUE")]
    assignments: Vec<String>,
    /// Exit with status 1 when the template is missing
    #[arg(long)]
    strict: bool,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            config: self.config.clone(),
            template: self.template.clone(),
            output: self.output.clone(),
            agent_id: self.agent_id.clone(),
            token: self.token.clone(),
            domain: self.domain.clone(),
            server_url: self.server_url.clone(),
            assignments: self.assignments.clone(),
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run_render(&cli.render_options(), cli.strict) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// A missing template is reported on stdout and exits 0 unless `strict`.
fn run_render(options: &RenderOptions, strict: bool) -> Result<i32, AppError> {
    match crate::render_with(options) {
        Ok(outcome) => {
            if outcome.sample_values {
                println!("✅ Generated '{}' with test variables.", outcome.output.display());
            } else {
                println!("✅ Generated '{}'.", outcome.output.display());
            }
            println!("👉 Run it locally: {}", outcome.run_hint());
            Ok(0)
        }
        Err(err @ AppError::MissingTemplate { .. }) => {
            println!("❌ Error: {}", err);
            Ok(if strict { 1 } else { 0 })
        }
        Err(err) => Err(err),
    }
}
