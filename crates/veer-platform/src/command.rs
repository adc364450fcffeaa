//! Blocking child-process launch with inherited standard streams.

use crate::error::{Error, Result};
use std::ffi::{OsStr, OsString};
use std::process::Command as StdCommand;
use tracing::debug;

/// Exit code reported when the target cannot be spawned at all.
pub const CODE_UNSPAWNABLE: i32 = 127;

/// Exit code reported when the child dies without a conventional exit
/// code, e.g. killed by a signal.
pub const CODE_ABNORMAL: i32 = 128;

/// One child process, run to completion.
///
/// Standard input, output, and error are inherited from the launcher, so
/// the child talks to the caller's terminal directly. There is no capture,
/// no timeout, and no way to abort the child once spawned.
#[derive(Debug)]
pub struct Launch {
    inner: StdCommand,
    program: OsString,
}

impl Launch {
    pub fn new(program: impl Into<OsString>) -> Self {
        let program = program.into();
        Self {
            inner: StdCommand::new(&program),
            program,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Spawn, wait unboundedly, and classify the outcome.
    ///
    /// Returns the child's own exit code, [`CODE_ABNORMAL`] when no code is
    /// available, or [`Error::Spawn`] when the OS refuses to start the
    /// program (the caller maps that to [`CODE_UNSPAWNABLE`]).
    pub fn run(mut self) -> Result<i32> {
        debug!(program = %self.program.to_string_lossy(), "handing off to child");
        let status = self.inner.status().map_err(|source| Error::Spawn {
            program: self.program.clone(),
            source,
        })?;
        Ok(status.code().unwrap_or(CODE_ABNORMAL))
    }
}
