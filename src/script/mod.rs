//! Script generation
//!
//! Builds sync tool command lines from a resolved configuration and renders
//! them into a readable shell script.

pub mod command;
pub mod generator;
pub mod wrap;

pub use command::{quote, Command};
pub use generator::BackupScript;
