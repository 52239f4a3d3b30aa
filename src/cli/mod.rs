//! Command-line interface module.

mod args;
pub mod build;
pub mod common;
pub mod jsonld;
pub mod page;
pub mod query;

pub use args::{BuildArgs, Cli, Commands, JsonLdArgs, QueryArgs};
