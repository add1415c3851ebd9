//! Output mode selection and terminal color detection.
//!
//! Whether escape sequences are emitted at all is decided once, from an
//! [`OutputMode`]. The `Auto` mode inspects the process environment through
//! [`EnvSnapshot`], which captures everything the decision depends on so the
//! rules can be tested without touching real environment variables.
//!
//! # Detection rules
//!
//! The first matching rule wins:
//!
//! | Condition | Colors |
//! |-----------|--------|
//! | `NO_COLOR` is non-empty, or `--no-color` was passed | off |
//! | `FORCE_COLOR` is `0` or `false` | off |
//! | `FORCE_COLOR` is any other non-empty value | on |
//! | `--color` was passed | on |
//! | stdout is a Windows console | on |
//! | stdout is a terminal and `TERM` is not `dumb` | on |
//! | `CI` is set by a provider whose logs render ANSI | on |
//! | Anything else | off |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// CI providers whose log viewers render ANSI colors.
const COLOR_CI_PROVIDERS: &[&str] = &[
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "CIRCLECI",
    "TRAVIS",
    "APPVEYOR",
    "DRONE",
];

/// Controls whether style functions emit escape sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputMode {
    /// Detect from the environment.
    #[default]
    Auto,
    /// Always emit escape sequences.
    Term,
    /// Never emit escape sequences.
    Text,
}

impl OutputMode {
    /// Resolves the mode to a yes/no answer, detecting when in `Auto`.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => detect_color_support(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

/// The inputs color detection looks at.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
    args: Vec<String>,
    is_terminal: bool,
    is_windows: bool,
}

/// The rule that decided color support, reported in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reason {
    NoColor,
    ForceColor,
    ColorFlag,
    Windows,
    Terminal,
    Ci,
    Fallback,
}

impl EnvSnapshot {
    /// Creates an empty snapshot: no variables, no arguments, no terminal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(name, value)| {
                    Some((name.into_string().ok()?, value.into_string().ok()?))
                })
                .collect(),
            args: std::env::args_os()
                .skip(1)
                .filter_map(|arg| arg.into_string().ok())
                .collect(),
            is_terminal: console::Term::stdout().is_term(),
            is_windows: cfg!(windows),
        }
    }

    /// Sets an environment variable.
    pub fn var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    /// Adds a command-line argument.
    pub fn arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }

    /// Sets whether stdout is attached to a terminal.
    pub fn terminal(mut self, is_terminal: bool) -> Self {
        self.is_terminal = is_terminal;
        self
    }

    /// Sets whether the platform is Windows.
    pub fn windows(mut self, is_windows: bool) -> Self {
        self.is_windows = is_windows;
        self
    }

    /// Applies the detection rules to this snapshot.
    pub fn supports_color(&self) -> bool {
        self.decide().0
    }

    fn non_empty(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    fn has_arg(&self, flag: &str) -> bool {
        self.args.iter().any(|arg| arg == flag)
    }

    fn decide(&self) -> (bool, Reason) {
        if self.non_empty("NO_COLOR").is_some() || self.has_arg("--no-color") {
            return (false, Reason::NoColor);
        }
        if let Some(force) = self.non_empty("FORCE_COLOR") {
            return (!matches!(force, "0" | "false"), Reason::ForceColor);
        }
        if self.has_arg("--color") {
            return (true, Reason::ColorFlag);
        }
        // Windows consoles render ANSI regardless of `TERM`.
        if self.is_windows && self.is_terminal {
            return (true, Reason::Windows);
        }
        if self.is_terminal && self.vars.get("TERM").map(String::as_str) != Some("dumb") {
            return (true, Reason::Terminal);
        }
        if self.vars.contains_key("CI")
            && COLOR_CI_PROVIDERS
                .iter()
                .any(|provider| self.vars.contains_key(*provider))
        {
            return (true, Reason::Ci);
        }
        (false, Reason::Fallback)
    }
}

/// Detects whether the current process should emit colors.
pub fn detect_color_support() -> bool {
    let (supported, reason) = EnvSnapshot::from_process().decide();
    tracing::debug!(supported, reason = ?reason, "resolved terminal color support");
    supported
}
