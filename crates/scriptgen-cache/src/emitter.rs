//! Shell commands that install and drive the casher tool.

use crate::escape::shell_escape;
use serde::Serialize;
use std::fmt;

/// Ruby selector casher runs under.
pub const RUNTIME_PREFIX: &str = "rvm 1.9.3 --fuzzy do";

/// Installed casher executable.
pub const CASHER_BIN: &str = "$CASHER_DIR/bin/casher";

/// Distribution channel of the casher tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CasherBranch {
    Production,
    /// Edge channel.
    Master,
}

impl CasherBranch {
    pub fn as_str(&self) -> &'static str {
        match self {
            CasherBranch::Production => "production",
            CasherBranch::Master => "master",
        }
    }
}

impl fmt::Display for CasherBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Commands that download casher into `$HOME/.casher/bin`.
///
/// A failed download leaves an empty script behind, which turns every later
/// casher call into a no-op instead of failing the build.
pub fn install_commands(branch: CasherBranch) -> Vec<String> {
    vec![
        "export CASHER_DIR=$HOME/.casher".to_string(),
        "mkdir -p $CASHER_DIR/bin".to_string(),
        format!(
            "curl https://raw.githubusercontent.com/travis-ci/casher/{}/bin/casher -L -o {} -s --fail",
            branch, CASHER_BIN
        ),
        format!(
            "[ $? -ne 0 ] && echo 'Failed to fetch casher from GitHub, disabling cache.' && echo > {}",
            CASHER_BIN
        ),
        format!("chmod +x {}", CASHER_BIN),
    ]
}

/// One casher invocation, every argument shell-escaped.
pub fn casher_command<S: AsRef<str>>(subcommand: &str, args: &[S]) -> String {
    let args: Vec<String> = args.iter().map(|a| shell_escape(a.as_ref())).collect();
    format!(
        "{} {} {} {}",
        RUNTIME_PREFIX,
        CASHER_BIN,
        subcommand,
        args.join(" ")
    )
}
