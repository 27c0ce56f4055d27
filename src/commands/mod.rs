//! Command handlers.
//!
//! - `templates.rs`: serve, get, list and classify
//! - `config.rs`: configuration display

mod config;
mod templates;

pub use config::cmd_config;
pub use templates::{cmd_classify, cmd_get, cmd_list, cmd_serve};
