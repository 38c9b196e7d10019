//! Command-line interface for `recipedoc`.

pub mod args;
pub mod commands;
