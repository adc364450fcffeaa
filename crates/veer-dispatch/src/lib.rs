//! Dispatch logic for the veer launcher.
//!
//! # Architecture
//!
//! Three steps, all pure except for the extension probe:
//!
//! 1. [`Invocation::locate`] answers "where is the binary and what name was
//!    it invoked under" through the [`SelfLocate`] capability.
//! 2. [`dispatch`] walks the rule lists (extensions first, then patterns)
//!    and returns the first matching rule's command template.
//! 3. [`build_argv`] expands the template into the final argument vector.
//!
//! Matching policy lives in the caller's declaration file; this crate only
//! implements the mechanism.

pub use argv::{PLACEHOLDER, build_argv};
pub use error::{Error, Result};
pub use locate::{Invocation, ProcessLocator, SelfLocate};
pub use matcher::{Dispatch, dispatch, name_matcher};

mod argv;
mod error;
mod locate;
mod matcher;
