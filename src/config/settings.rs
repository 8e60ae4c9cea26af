//! Built-in settings for syncscript
//!
//! Declares the override vocabulary shared by the `global` section and each
//! backup job, the schema a configuration document must satisfy, and the
//! defaults consulted when neither a job nor the global section sets a key.

use super::schema::{Field, Schema, TypeTag};
use super::value::{Table, Value};

/// Sync tool invocation used when no `command` is configured
pub const DEFAULT_COMMAND: &[&str] = &["rclone", "sync"];

/// Keys a job or the `global` section may override, with their types
pub const OVERRIDE_KEYS: &[(&str, TypeTag)] = &[
    ("command", TypeTag::StrList),
    ("dry_run", TypeTag::Bool),
    ("progress", TypeTag::Bool),
    ("ignore", TypeTag::StrList),
    ("log_file", TypeTag::String),
];

fn default_command() -> Value {
    Value::from(DEFAULT_COMMAND.to_vec())
}

fn default_dry_run() -> Value {
    Value::Bool(true)
}

fn default_progress() -> Value {
    Value::Bool(true)
}

fn default_ignore() -> Value {
    Value::List(Vec::new())
}

/// The defaults table: the last tier of every lookup.
///
/// `log_file`, `src` and `dst` deliberately have no entry.
pub fn defaults() -> Table {
    let mut table = Table::new();
    table.insert("command".to_string(), default_command());
    table.insert("dry_run".to_string(), default_dry_run());
    table.insert("progress".to_string(), default_progress());
    table.insert("ignore".to_string(), default_ignore());
    table
}

fn override_fields() -> impl Iterator<Item = (&'static str, Field)> {
    OVERRIDE_KEYS
        .iter()
        .map(|(name, tag)| (*name, Field::optional(*tag)))
}

/// Schema for the `global` section
pub fn global_schema() -> Schema {
    Schema::fields(override_fields())
}

/// Schema for a single backup job
pub fn job_schema() -> Schema {
    Schema::fields(
        [
            ("src", Field::required(TypeTag::String)),
            ("dst", Field::required(TypeTag::String)),
        ]
        .into_iter()
        .chain(override_fields()),
    )
}

/// Schema for a whole configuration document
pub fn config_schema() -> Schema {
    Schema::fields([
        ("description", Field::optional(TypeTag::String)),
        ("global", Field::optional(global_schema())),
        ("backups", Field::keyed(job_schema())),
    ])
}
