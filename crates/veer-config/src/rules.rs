//! Ordered dispatch rules parsed from a declaration file.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static LINE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\S+)\s*=\s*(.*)").unwrap());

/// Maps a file suffix to a command template. Matched by candidate-file
/// existence, so the suffix keeps its leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRule {
    pub ext: String,
    pub command: String,
}

/// Maps a wildcard or `/regex/` key to a command template, matched against
/// the invoked base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRule {
    pub pattern: String,
    pub command: String,
}

/// The full rule set, partitioned by rule kind.
///
/// Declaration order is preserved within each list and decides precedence.
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rules {
    pub extensions: Vec<ExtensionRule>,
    pub patterns: Vec<PatternRule>,
}

impl Rules {
    /// Read and parse a declaration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse declaration text.
    ///
    /// Blank lines and `#` comments are skipped. Every other line must be
    /// `KEY = VALUE`; a key starting with `.` declares an extension rule,
    /// anything else a pattern rule. The value is kept verbatim (no
    /// unquoting), trailing whitespace trimmed.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rules = Self::default();
        for (n, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let caps = LINE_REGEX
                .captures(line)
                .ok_or(Error::Syntax { line: n + 1 })?;
            let key = caps[1].to_string();
            let command = caps[2].to_string();
            if key.starts_with('.') {
                rules.extensions.push(ExtensionRule { ext: key, command });
            } else {
                rules.patterns.push(PatternRule {
                    pattern: key,
                    command,
                });
            }
        }
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_by_leading_dot() {
        let rules = Rules::parse(".py = python3 <>\nls* = /bin/ls\n.sh = sh <>\n").unwrap();
        assert_eq!(rules.extensions.len(), 2);
        assert_eq!(rules.patterns.len(), 1);
        assert_eq!(rules.extensions[0].ext, ".py");
        assert_eq!(rules.patterns[0].pattern, "ls*");
    }

    #[test]
    fn test_declaration_order_preserved() {
        let rules = Rules::parse(".b = two\n.a = one\nz* = four\na* = three\n").unwrap();
        let exts: Vec<_> = rules.extensions.iter().map(|r| r.ext.as_str()).collect();
        let ptns: Vec<_> = rules.patterns.iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(exts, [".b", ".a"]);
        assert_eq!(ptns, ["z*", "a*"]);
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        let rules = Rules::parse("# header\n\n   \n.py = python3 <>\n  # indented comment\n").unwrap();
        assert_eq!(rules.extensions.len(), 1);
        assert!(rules.patterns.is_empty());
    }

    #[test]
    fn test_whitespace_around_equals() {
        let rules = Rules::parse(".py=python3\n.rb   =   ruby <>\n").unwrap();
        assert_eq!(rules.extensions[0].command, "python3");
        assert_eq!(rules.extensions[1].command, "ruby <>");
    }

    #[test]
    fn test_crlf_lines() {
        let rules = Rules::parse(".py = python3 <>\r\nfoo = bar\r\n").unwrap();
        assert_eq!(rules.extensions[0].command, "python3 <>");
        assert_eq!(rules.patterns[0].command, "bar");
    }

    #[test]
    fn test_empty_value_accepted() {
        let rules = Rules::parse(".sh =\n").unwrap();
        assert_eq!(rules.extensions[0].command, "");
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let err = Rules::parse("# fine\n.py = python3\nnot a rule line\n").unwrap_err();
        match err {
            Error::Syntax { line } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = Rules::load("/nonexistent/veer.cfg").unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("veer.cfg");
        std::fs::write(&path, ".py = python3 <>\n").unwrap();
        let rules = Rules::load(&path).unwrap();
        assert_eq!(rules.extensions[0].ext, ".py");
    }
}
