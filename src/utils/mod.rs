//! Utility modules shared across the crate.

pub mod html;
pub mod path;
pub mod plural;

pub use plural::plural_count;
