//! veer: a dispatching launcher.
//!
//! Copy or symlink the binary under any name. When invoked, veer looks
//! that name up in `veer.cfg` next to its own binary, expands the matched
//! command template, hands stdin/stdout/stderr straight to the child, and
//! exits with the child's status.
//!
//! There are no flags: everything after argv0 is forwarded to the target
//! verbatim.

use std::env;
use std::process;

use thiserror::Error;
use veer_config::Rules;
use veer_dispatch::{Invocation, ProcessLocator, build_argv, dispatch};
use veer_platform::{CODE_UNSPAWNABLE, Launch};

/// Program name. Also names the config file, so every alias of one binary
/// shares one `veer.cfg`.
const NAME: &str = "veer";

/// Exit code for internal fatal errors: missing or malformed config,
/// malformed pattern, no dispatch match.
const CODE_FATAL: i32 = 1;

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    match launch() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{NAME}: {err}");
            err.exit_code()
        }
    }
}

fn launch() -> Result<i32, Fatal> {
    let invocation = Invocation::locate(&ProcessLocator)?;
    let rules = Rules::load(invocation.base_dir.join(format!("{NAME}.cfg")))?;
    let matched = dispatch(&invocation, &rules)?;

    let mut argv = build_argv(
        &matched.command,
        &matched.target,
        matched.append_target,
        env::args_os().skip(1),
    )?
    .into_iter();
    let Some(program) = argv.next() else {
        return Err(veer_dispatch::Error::EmptyTemplate.into());
    };

    Ok(Launch::new(program).args(argv).run()?)
}

/// Everything that aborts the launcher before or instead of a clean child
/// exit. One line on stderr, then the mapped exit code.
#[derive(Debug, Error)]
enum Fatal {
    #[error(transparent)]
    Config(#[from] veer_config::Error),

    #[error(transparent)]
    Dispatch(#[from] veer_dispatch::Error),

    #[error(transparent)]
    Spawn(#[from] veer_platform::Error),
}

impl Fatal {
    fn exit_code(&self) -> i32 {
        match self {
            Fatal::Spawn(_) => CODE_UNSPAWNABLE,
            Fatal::Config(_) | Fatal::Dispatch(_) => CODE_FATAL,
        }
    }
}
