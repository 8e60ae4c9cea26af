//! syncscript - Generate human-readable rclone backup scripts
//!
//! This library turns a declarative configuration describing a set of backup
//! jobs into a shell script that runs the sync tool once per job. The script
//! is meant to be read and edited by people, so commands are wrapped to a
//! fixed width and the configured description is carried over as comments.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Value tree, schema validation, defaults and layered lookup
//! - `script`: Command assembly, line wrapping and script generation
//! - `cli`: Command handlers used by the binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use syncscript::config::{loader, Config, Format};
//! use syncscript::script::BackupScript;
//!
//! let tree = loader::parse(
//!     "[backups.docs]\nsrc = \"/home/docs\"\ndst = \"remote:docs\"\n",
//!     Format::Toml,
//! )?;
//! let config = Config::new(tree)?;
//! let script = BackupScript::new(&config).generate()?;
//! assert!(script.starts_with("#!/bin/sh"));
//! # Ok::<(), syncscript::ScriptError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod script;

pub use error::{ScriptError, ScriptResult};
