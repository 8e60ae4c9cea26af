//! Script generation CLI command
//!
//! Loads a configuration document, validates it and either writes the
//! generated script or, with `--check`, reports what would be generated.

use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use crate::config::{loader, Config, Format};
use crate::error::{ScriptError, ScriptResult};
use crate::script::BackupScript;

/// Arguments for generating a backup script
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the backup configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Input format (inferred from the file extension by default)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Write the script to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only validate the configuration and every job; emit no script
    #[arg(long)]
    pub check: bool,
}

/// Handle a generate command, writing user-facing output to `out`
pub fn handle_generate<W: Write>(args: &GenerateArgs, out: &mut W) -> ScriptResult<()> {
    let tree = loader::load(&args.config, args.format)?;
    let config = Config::new(tree)?;
    let script = BackupScript::new(&config);

    if args.check {
        for job in config.job_names() {
            script.build_command(job)?;
        }

        writeln!(out, "Configuration OK: {}", args.config.display())?;
        if let Some(description) = config.description() {
            writeln!(out, "Description: {}", description.lines().next().unwrap_or(""))?;
        }
        writeln!(out, "Backups:")?;
        for (i, job) in config.job_names().enumerate() {
            writeln!(out, "  {}. {}", i + 1, job)?;
        }
        writeln!(out, "Total: {} backup(s)", config.backups().len())?;
        return Ok(());
    }

    let text = script.generate()?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", text)).map_err(|e| {
                ScriptError::Io(format!(
                    "Failed to write script '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            tracing::info!(path = %path.display(), "wrote backup script");
        }
        None => writeln!(out, "{}", text)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
description = "Home"

[backups.docs]
src = "/home/docs"
dst = "remote:docs"
"#;

    fn write_config(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn args(config: PathBuf) -> GenerateArgs {
        GenerateArgs {
            config,
            format: None,
            output: None,
            check: false,
        }
    }

    #[test]
    fn test_generate_to_writer() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "backups.toml", CONFIG);

        let mut out = Vec::new();
        handle_generate(&args(path), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "#!/bin/sh\n# Home\nrclone sync --dry-run --progress \"/home/docs\" \"remote:docs\"\n"
        );
    }

    #[test]
    fn test_generate_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "backups.toml", CONFIG);
        let output = temp_dir.path().join("backup.sh");

        let mut args = args(path);
        args.output = Some(output.clone());

        let mut out = Vec::new();
        handle_generate(&args, &mut out).unwrap();

        assert!(out.is_empty());
        let script = std::fs::read_to_string(output).unwrap();
        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.ends_with("\"remote:docs\"\n"));
    }

    #[test]
    fn test_check_lists_jobs() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "backups.toml", CONFIG);

        let mut args = args(path);
        args.check = true;

        let mut out = Vec::new();
        handle_generate(&args, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Configuration OK"));
        assert!(text.contains("  1. docs"));
        assert!(!text.contains("rclone"));
    }

    #[test]
    fn test_check_catches_missing_src() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            "backups.toml",
            "[backups.docs]\nsrc = \"\"\ndst = \"/b\"\n",
        );

        let mut args = args(path);
        args.check = true;

        let err = handle_generate(&args, &mut Vec::new()).unwrap_err();
        assert!(err.is_required_not_defined());
    }

    #[test]
    fn test_invalid_config_fails_before_output() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "backups.json", r#"{"backups": {}, "extra": 1}"#);

        let mut out = Vec::new();
        let err = handle_generate(&args(path), &mut out).unwrap_err();
        assert!(matches!(err, ScriptError::ConfigInvalid(_)));
        assert!(out.is_empty());
    }
}
