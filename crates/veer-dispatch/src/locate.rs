//! Self-location: where the running binary lives and what name invoked it.
//!
//! The directory comes from the OS's path-to-self, the name from argv0.
//! The two deliberately differ under symlinks and aliases: one physical
//! binary copied under many names selects a different dispatch target per
//! name, while configuration lookup always anchors to the binary's own
//! directory.

use crate::error::{Error, Result};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// How a process finds itself. Split out so tests can substitute fixed
/// paths for the running-process lookup.
pub trait SelfLocate {
    /// Canonical path to the running executable, if the OS reports one.
    fn exe_path(&self) -> Option<PathBuf>;

    /// The zeroth invocation argument.
    fn argv0(&self) -> Option<OsString>;
}

/// [`SelfLocate`] for the real process.
pub struct ProcessLocator;

impl SelfLocate for ProcessLocator {
    fn exe_path(&self) -> Option<PathBuf> {
        env::current_exe().ok()
    }

    fn argv0(&self) -> Option<OsString> {
        env::args_os().next()
    }
}

/// The resolved identity of this run: the binary's directory and the base
/// name it was invoked under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub base_dir: PathBuf,
    pub name: String,
}

impl Invocation {
    pub fn locate(locator: &impl SelfLocate) -> Result<Self> {
        let argv0 = locator.argv0();
        let self_path = locator
            .exe_path()
            .or_else(|| argv0.clone().map(PathBuf::from))
            .ok_or(Error::Unlocatable)?;

        let base_dir = match self_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };

        // The name always comes from argv0, never from the resolved path.
        let named = argv0.map(PathBuf::from).unwrap_or(self_path);
        let name = named
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or(Error::Unlocatable)?;

        Ok(Self {
            base_dir,
            name: strip_exe(name),
        })
    }
}

/// Drop a case-insensitive `.exe` suffix so one config serves both Unix
/// and Windows invocation naming.
fn strip_exe(mut name: String) -> String {
    let n = name.len();
    if n >= 4 && name.is_char_boundary(n - 4) && name[n - 4..].eq_ignore_ascii_case(".exe") {
        name.truncate(n - 4);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLocator {
        exe: Option<&'static str>,
        argv0: Option<&'static str>,
    }

    impl SelfLocate for FixedLocator {
        fn exe_path(&self) -> Option<PathBuf> {
            self.exe.map(PathBuf::from)
        }

        fn argv0(&self) -> Option<OsString> {
            self.argv0.map(OsString::from)
        }
    }

    #[test]
    fn test_dir_from_exe_name_from_argv0() {
        let inv = Invocation::locate(&FixedLocator {
            exe: Some("/opt/veer/veer"),
            argv0: Some("/usr/local/bin/greet"),
        })
        .unwrap();
        assert_eq!(inv.base_dir, PathBuf::from("/opt/veer"));
        assert_eq!(inv.name, "greet");
    }

    #[test]
    fn test_argv0_fallback_when_exe_unknown() {
        let inv = Invocation::locate(&FixedLocator {
            exe: None,
            argv0: Some("/home/u/bin/run-me"),
        })
        .unwrap();
        assert_eq!(inv.base_dir, PathBuf::from("/home/u/bin"));
        assert_eq!(inv.name, "run-me");
    }

    #[test]
    fn test_bare_name_gets_dot_dir() {
        let inv = Invocation::locate(&FixedLocator {
            exe: None,
            argv0: Some("greet"),
        })
        .unwrap();
        assert_eq!(inv.base_dir, PathBuf::from("."));
        assert_eq!(inv.name, "greet");
    }

    #[test]
    fn test_exe_suffix_stripped_case_insensitively() {
        for argv0 in ["greet.exe", "greet.EXE", "greet.Exe"] {
            let inv = Invocation::locate(&FixedLocator {
                exe: Some("/opt/veer/veer.exe"),
                argv0: Some(argv0),
            })
            .unwrap();
            assert_eq!(inv.name, "greet", "argv0 {argv0}");
        }
    }

    #[test]
    fn test_non_exe_suffix_kept() {
        let inv = Invocation::locate(&FixedLocator {
            exe: None,
            argv0: Some("greet.executable"),
        })
        .unwrap();
        assert_eq!(inv.name, "greet.executable");
    }

    #[test]
    fn test_nothing_to_locate() {
        let err = Invocation::locate(&FixedLocator {
            exe: None,
            argv0: None,
        })
        .unwrap_err();
        assert!(matches!(err, Error::Unlocatable));
    }
}
