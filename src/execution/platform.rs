//! Per-platform shell lookup table.
//!
//! Keyed by `std::env::consts::OS`; a missing row is the single unsupported
//! path.

use crate::error::ExecError;

/// How to hand a command string to the platform's default shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellInvocation {
    pub program: &'static str,
    pub flag: &'static str,
}

const POSIX_SHELL: ShellInvocation = ShellInvocation {
    program: "/bin/sh",
    flag: "-c",
};

const WINDOWS_SHELL: ShellInvocation = ShellInvocation {
    program: "cmd",
    flag: "/c",
};

const SHELLS: &[(&str, ShellInvocation)] = &[
    ("linux", POSIX_SHELL),
    ("macos", POSIX_SHELL),
    ("freebsd", POSIX_SHELL),
    ("openbsd", POSIX_SHELL),
    ("netbsd", POSIX_SHELL),
    ("windows", WINDOWS_SHELL),
];

/// Resolve the shell used to run command strings on `os`.
pub fn shell_for(os: &str) -> Result<ShellInvocation, ExecError> {
    SHELLS
        .iter()
        .find(|(name, _)| *name == os)
        .map(|(_, shell)| *shell)
        .ok_or_else(|| ExecError::UnsupportedPlatform(os.to_string()))
}
