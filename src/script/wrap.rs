//! Line wrapping for generated commands
//!
//! Renders a token sequence onto lines no wider than a fixed column limit.
//! Wrapped lines end in ` \` and continuation lines are indented, so the
//! result is still one shell command.
//!
//! Tokens are never split, so a token that cannot fit is put on a line of
//! its own and that line exceeds the limit. On a continuation line followed
//! by more tokens, this happens to any token wider than
//! [`MAX_FITTING_TOKEN`] columns, because the indent and the trailing ` \`
//! take up room too.

/// Maximum rendered line width in columns
pub const LINE_WIDTH: usize = 80;

/// Indent for continuation lines
pub const CONTINUATION_INDENT: &str = "    ";

const CONTINUATION: &str = " \\";

/// Widest token that always fits within [`LINE_WIDTH`], wherever it lands
pub const MAX_FITTING_TOKEN: usize =
    LINE_WIDTH - CONTINUATION_INDENT.len() - CONTINUATION.len();

fn width(s: &str) -> usize {
    s.chars().count()
}

/// Wrap tokens into lines of at most `max_width` columns
pub fn wrap_tokens<S: AsRef<str>>(tokens: &[S], max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut fresh = true;

    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        let is_last = i + 1 == tokens.len();
        // Room for the trailing backslash unless nothing follows
        let reserve = if is_last { 0 } else { width(CONTINUATION) };

        if !fresh && width(&current) + 1 + width(token) + reserve > max_width {
            current.push_str(CONTINUATION);
            lines.push(std::mem::take(&mut current));
            current.push_str(CONTINUATION_INDENT);
            fresh = true;
        }

        if !fresh {
            current.push(' ');
        }
        current.push_str(token);
        fresh = false;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap tokens and join the lines into a single command string
pub fn render(tokens: &[String]) -> String {
    wrap_tokens(tokens, LINE_WIDTH).join("\n")
}
