//! Backup script generation
//!
//! Turns a resolved [`Config`] into script text: an interpreter line, an
//! optional comment block with the description, then one sync command per
//! backup job in declaration order.

use crate::config::{Config, Value};
use crate::error::{ScriptError, ScriptResult};

use super::command::Command;

/// First line of every generated script
pub const INTERPRETER: &str = "#!/bin/sh";

/// Generates backup scripts from a configuration
#[derive(Debug, Clone, Copy)]
pub struct BackupScript<'a> {
    config: &'a Config,
}

impl<'a> BackupScript<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Lines every script starts with
    pub fn setup(&self) -> Vec<String> {
        let mut setup = vec![INTERPRETER.to_string()];

        if let Some(description) = self.config.description().filter(|d| !d.is_empty()) {
            setup.extend(description.lines().map(|line| {
                if line.is_empty() {
                    "#".to_string()
                } else {
                    format!("# {}", line)
                }
            }));
        }

        setup
    }

    /// Build the sync command for one job.
    ///
    /// # Errors
    ///
    /// Returns `UnknownJob` for an undeclared job and `RequiredNotDefined`
    /// when `src` or `dst` resolves to nothing.
    pub fn build_command(&self, job: &str) -> ScriptResult<Command> {
        if !self.config.backups().contains_key(job) {
            return Err(ScriptError::UnknownJob(job.to_string()));
        }

        // These have no global or default tier to fall back on
        let src = self.string(job, "src")?.ok_or_else(|| ScriptError::required(job, "src"))?;
        let dst = self.string(job, "dst")?.ok_or_else(|| ScriptError::required(job, "dst"))?;

        let base = self.string_list(job, "command")?.unwrap_or_default();
        let mut command = Command::new(base);

        if self.flag(job, "dry_run") {
            command.arg("--dry-run");
        }

        if self.flag(job, "progress") {
            command.arg("--progress");
        }

        for pattern in self.string_list(job, "ignore")?.unwrap_or_default() {
            command.arg("--exclude").quoted(pattern);
        }

        command.quoted(src).quoted(dst);

        Ok(command)
    }

    /// Rendered command lines for every job, in declaration order
    pub fn commands(&self) -> ScriptResult<Vec<String>> {
        self.config
            .job_names()
            .map(|job| -> ScriptResult<String> {
                let mut command = self.build_command(job)?;

                if let Some(log_file) = self.string(job, "log_file")? {
                    command.redirect_stderr(log_file);
                }

                tracing::debug!(job, tokens = command.tokens().len(), "built command");
                Ok(command.render())
            })
            .collect()
    }

    /// The complete script text
    pub fn generate(&self) -> ScriptResult<String> {
        let mut lines = self.setup();
        lines.extend(self.commands()?);

        tracing::info!(
            jobs = self.config.backups().len(),
            lines = lines.len(),
            "generated backup script"
        );

        Ok(lines.join("\n"))
    }

    fn flag(&self, job: &str, property: &str) -> bool {
        self.config
            .lookup(Some(job), property)
            .is_some_and(Value::is_truthy)
    }

    fn string(&self, job: &str, property: &str) -> ScriptResult<Option<&'a str>> {
        match self.config.lookup(Some(job), property) {
            None => Ok(None),
            Some(value) if !value.is_truthy() => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| invalid(property, "a string")),
        }
    }

    fn string_list(&self, job: &str, property: &str) -> ScriptResult<Option<Vec<&'a str>>> {
        match self.config.lookup(Some(job), property) {
            None => Ok(None),
            Some(value) => value
                .as_str_list()
                .map(Some)
                .ok_or_else(|| invalid(property, "a list of strings")),
        }
    }
}

fn invalid(property: &str, expected: &'static str) -> ScriptError {
    ScriptError::InvalidValue {
        property: property.to_string(),
        expected,
    }
}
