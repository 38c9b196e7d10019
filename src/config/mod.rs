//! Generator configuration.
//!
//! Settings come from built-in defaults, an optional YAML file, and finally
//! command-line / environment overrides, in that order.

pub mod loader;
pub mod schema;

pub use loader::{ConfigOverrides, load_config, parse_config};
pub use schema::{ExistingFiles, GeneratorConfig};
