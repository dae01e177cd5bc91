//! Response rendering.

mod config_text;
mod form;

// Re-export public functions
pub use config_text::render_config;
pub use form::{format_field, render_form};
