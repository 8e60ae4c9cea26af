//! Layered lookup over a validated configuration
//!
//! Values are resolved in three tiers: the job's own definition, then the
//! `global` section, then the built-in defaults.
//!
//! ## Truthiness
//!
//! A tier only answers when its value is *truthy*. An explicitly set falsy
//! value (`false`, `""`, `[]`) is treated as unset and the lookup falls
//! through to the next tier. One consequence is that `dry_run = false`
//! cannot switch off the default `dry_run = true`. This matches the
//! behaviour existing configurations were written against.

use super::schema::validate;
use super::settings::{config_schema, defaults};
use super::value::{Table, Value};
use crate::error::{ScriptError, ScriptResult};

/// A validated configuration document with ordered lookups
#[derive(Debug, Clone)]
pub struct Config {
    description: Option<String>,
    global: Table,
    backups: Table,
    defaults: Table,
}

impl Config {
    /// Validate a raw tree and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the tree does not match the configuration
    /// schema or has no `backups` section.
    pub fn new(tree: Value) -> ScriptResult<Self> {
        validate(&tree, &config_schema()).map_err(|e| ScriptError::ConfigInvalid(e.to_string()))?;

        let Value::Table(mut tree) = tree else {
            return Err(ScriptError::ConfigInvalid(
                "expected a table at the top level".into(),
            ));
        };

        let backups = match tree.shift_remove("backups") {
            Some(Value::Table(backups)) => backups,
            _ => {
                return Err(ScriptError::ConfigInvalid(
                    "required key `backups` not in object".into(),
                ))
            }
        };
        let global = match tree.shift_remove("global") {
            Some(Value::Table(global)) => global,
            _ => Table::new(),
        };
        let description = match tree.shift_remove("description") {
            Some(Value::String(description)) => Some(description),
            _ => None,
        };

        tracing::debug!(jobs = backups.len(), "configuration validated");

        Ok(Self {
            description,
            global,
            backups,
            defaults: defaults(),
        })
    }

    /// Look up a property, job-local first when a job is given.
    ///
    /// An unknown job name simply has no local tier.
    pub fn lookup(&self, job: Option<&str>, property: &str) -> Option<&Value> {
        if let Some(name) = job {
            let local = self
                .backups
                .get(name)
                .and_then(Value::as_table)
                .and_then(|definition| definition.get(property));

            if let Some(value) = local.filter(|v| v.is_truthy()) {
                tracing::trace!(job = name, property, tier = "job", "resolved");
                return Some(value);
            }
        }

        self.base(property)
    }

    /// Look up a property in the `global` section, then the defaults
    pub fn base(&self, property: &str) -> Option<&Value> {
        if let Some(value) = self.global.get(property).filter(|v| v.is_truthy()) {
            tracing::trace!(property, tier = "global", "resolved");
            return Some(value);
        }

        let default = self.defaults.get(property);
        tracing::trace!(property, tier = "default", found = default.is_some(), "resolved");
        default
    }

    /// The job-name to job-definition mapping, in declaration order
    pub fn backups(&self) -> &Table {
        &self.backups
    }

    /// Names of all configured jobs, in declaration order
    pub fn job_names(&self) -> impl Iterator<Item = &str> {
        self.backups.keys().map(String::as_str)
    }

    /// The top-level description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
