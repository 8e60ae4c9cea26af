//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the generator.

pub mod generate;

pub use generate::{handle_generate, GenerateArgs};
