//! First-match dispatch over extension and pattern rules.
//!
//! Extension rules are always tried first, probing the filesystem for
//! `base_dir/name + ext`. Pattern rules only see the invoked name. Within
//! each list, declaration order is precedence order.

use crate::error::{Error, Result};
use crate::locate::Invocation;
use regex::Regex;
use std::ffi::OsString;
use std::path::Path;
use tracing::debug;
use veer_config::Rules;

/// A matched rule, ready for argv synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// The rule's command template, untokenized.
    pub command: String,
    /// Value the template's placeholder receives: the candidate path for
    /// extension matches, the invoked name for pattern matches.
    pub target: OsString,
    /// Append `target` as a trailing argument even when the template
    /// carries no placeholder.
    pub append_target: bool,
}

/// Find the first rule matching this invocation.
pub fn dispatch(invocation: &Invocation, rules: &Rules) -> Result<Dispatch> {
    let stem = invocation.base_dir.join(&invocation.name);

    for rule in &rules.extensions {
        let mut candidate = stem.clone().into_os_string();
        candidate.push(&rule.ext);
        // Existence only, never executability. A directory counts.
        if Path::new(&candidate).exists() {
            debug!(ext = %rule.ext, candidate = %Path::new(&candidate).display(), "extension rule matched");
            return Ok(Dispatch {
                command: rule.command.clone(),
                target: candidate,
                append_target: true,
            });
        }
    }

    for rule in &rules.patterns {
        let matcher = name_matcher(&rule.pattern)?;
        if matcher.is_match(&invocation.name) {
            debug!(pattern = %rule.pattern, name = %invocation.name, "pattern rule matched");
            return Ok(Dispatch {
                command: rule.command.clone(),
                target: OsString::from(&invocation.name),
                append_target: false,
            });
        }
    }

    debug!(name = %invocation.name, "no rule matched");
    Err(Error::NoRule(invocation.name.clone()))
}

/// Compile a pattern-rule key into a name matcher.
///
/// `/.../` keys are verbatim regular expressions searched within the name
/// (authors supply their own anchors; the closing `/` is optional).
/// Anything else is a wildcard where `?` matches one character and `*` any
/// sequence; wildcards must cover the whole name.
pub fn name_matcher(pattern: &str) -> Result<Regex> {
    let compile = |re: &str| {
        Regex::new(re).map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })
    };

    if let Some(inner) = pattern.strip_prefix('/') {
        return compile(inner.strip_suffix('/').unwrap_or(inner));
    }

    let mut re = String::with_capacity(pattern.len() * 2 + 8);
    re.push_str("^(?:");
    for c in pattern.chars() {
        match c {
            '?' => re.push('.'),
            '*' => re.push_str(".*"),
            _ => re.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    re.push_str(")$");
    compile(&re)
}
