//! Sync tool command lines
//!
//! A [`Command`] is the token sequence for one backup job. Path-like tokens
//! are wrapped in double quotes.
//!
//! Quoting does not escape embedded quotes or other shell metacharacters.
//! It is meant for human-authored paths and is not safe against hostile
//! input.

use std::fmt;

use super::wrap;

/// Wrap a token in literal double quotes
pub fn quote(token: &str) -> String {
    format!("\"{}\"", token)
}

/// Token sequence for one sync invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    tokens: Vec<String>,
}

impl Command {
    /// Start a command from its base invocation words
    pub fn new<I, S>(base: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: base.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a bare token
    pub fn arg(&mut self, token: impl Into<String>) -> &mut Self {
        self.tokens.push(token.into());
        self
    }

    /// Append a double-quoted token
    pub fn quoted(&mut self, token: &str) -> &mut Self {
        self.tokens.push(quote(token));
        self
    }

    /// Append stderr redirection to a log file
    pub fn redirect_stderr(&mut self, log_file: &str) -> &mut Self {
        self.tokens.push(format!("2>>{}", log_file));
        self
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Render onto wrapped lines of at most [`wrap::LINE_WIDTH`] columns
    pub fn render(&self) -> String {
        wrap::render(&self.tokens)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_does_not_escape() {
        assert_eq!(quote("/home/me"), "\"/home/me\"");
        assert_eq!(quote("a\"b"), "\"a\"b\"");
    }

    #[test]
    fn test_build_tokens() {
        let mut cmd = Command::new(["rclone", "sync"]);
        cmd.arg("--dry-run").quoted("/a").quoted("/b");
        assert_eq!(cmd.tokens(), ["rclone", "sync", "--dry-run", "\"/a\"", "\"/b\""]);
        assert_eq!(cmd.to_string(), "rclone sync --dry-run \"/a\" \"/b\"");
    }

    #[test]
    fn test_redirect_stderr() {
        let mut cmd = Command::new(["rclone"]);
        cmd.redirect_stderr("/var/log/sync.log");
        assert_eq!(cmd.tokens().last().unwrap(), "2>>/var/log/sync.log");
    }
}
