pub mod config;
pub mod error;
pub mod placeholders;
pub mod server_url;

pub use config::{
    AGENT_ID_MARKER, DEFAULT_OUTPUT_FILE, DEFAULT_TEMPLATE_FILE, DOMAIN_MARKER, RenderConfig,
    TOKEN_MARKER,
};
pub use error::AppError;
pub use placeholders::{PlaceholderMapping, RenderedText, Replacement, render_text};
pub use server_url::domain_from_server_url;
