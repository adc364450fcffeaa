//! Final argument-vector synthesis from a matched command template.

use crate::error::{Error, Result};
use std::ffi::{OsStr, OsString};

/// Template token replaced by the dispatch target.
pub const PLACEHOLDER: &str = "<>";

/// Expand a command template into the argv to spawn.
///
/// The template is split on whitespace; the first `<>` token (and only the
/// first, a second occurrence stays literal) becomes `target`. Without a
/// placeholder, `target` is appended when `append_target` is set and
/// dropped otherwise. Forwarded caller arguments always come last, in
/// order and byte-exact.
///
/// The first token of the result is the program to spawn; a template that
/// yields no tokens at all is an error.
pub fn build_argv(
    command: &str,
    target: &OsStr,
    append_target: bool,
    forwarded: impl IntoIterator<Item = OsString>,
) -> Result<Vec<OsString>> {
    let mut argv: Vec<OsString> = Vec::new();
    let mut substituted = false;

    for token in command.split_whitespace() {
        if !substituted && token == PLACEHOLDER {
            argv.push(target.to_os_string());
            substituted = true;
        } else {
            argv.push(OsString::from(token));
        }
    }

    if !substituted && append_target {
        argv.push(target.to_os_string());
    }
    if argv.is_empty() {
        return Err(Error::EmptyTemplate);
    }

    argv.extend(forwarded);
    Ok(argv)
}
