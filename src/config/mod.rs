//! Configuration module for syncscript
//!
//! This module provides everything between a document on disk and a
//! resolved configuration:
//! - Format-agnostic value tree
//! - Schema description and validation
//! - Built-in defaults and the document schema
//! - Layered override lookup

pub mod loader;
pub mod resolver;
pub mod schema;
pub mod settings;
pub mod value;

pub use loader::Format;
pub use resolver::Config;
pub use schema::{validate, Field, Requirement, Schema, TypeTag};
pub use value::{Table, Value};
