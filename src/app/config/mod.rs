//! Configuration resolution for a render.
//!
//! Precedence, lowest first: built-in defaults, the optional settings file,
//! command-line overrides.

mod load_config;
mod overrides;

pub use load_config::load_config;
pub use overrides::{RenderOptions, resolve_config};
