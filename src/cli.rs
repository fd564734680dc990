//! CLI argument parsing via clap.

use clap::Parser;
use idk::build_info;

/// Turn a plain-English prompt into a confirmed shell command, script, or alias.
#[derive(Debug, Parser)]
#[command(
    name = "idk",
    version = build_info::VERSION,
    long_version = build_info::LONG_VERSION,
    after_help = build_info::HELP_BUILD_METADATA
)]
pub struct Args {
    /// Prompt in plain English, e.g. `idk show disk usage`.
    pub prompt: Vec<String>,

    /// Log in through the browser.
    #[arg(long = "login")]
    pub login: bool,

    /// Forget the saved login.
    #[arg(long = "logout")]
    pub logout: bool,

    /// Document (README, runbook) whose commands the prompt refers to.
    #[arg(long = "readme", value_name = "PATH")]
    pub readme: Option<String>,

    /// Save the resulting command or script as a shell alias.
    #[arg(long = "alias", value_name = "NAME")]
    pub alias: Option<String>,

    /// Update idk to the latest release.
    #[arg(long = "update")]
    pub update: bool,

    /// Path to config file (default: ~/.idk/config.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Enable debug logging on stderr (overridden by IDK_LOG).
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Args {
    /// Prompt words joined with single spaces.
    pub fn prompt_text(&self) -> String {
        self.prompt.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn prompt_words_are_joined() {
        let args = Args::parse_from(["idk", "show", "disk", "usage"]);
        assert_eq!(args.prompt_text(), "show disk usage");
        assert!(!args.login && !args.logout && !args.update);
    }

    #[test]
    fn alias_and_readme_take_values() {
        let args = Args::parse_from([
            "idk", "--alias", "du", "--readme", "README.md", "run", "tests",
        ]);
        assert_eq!(args.alias.as_deref(), Some("du"));
        assert_eq!(args.readme.as_deref(), Some("README.md"));
        assert_eq!(args.prompt_text(), "run tests");
    }

    #[test]
    fn flags_parse_without_prompt() {
        let args = Args::parse_from(["idk", "--login", "-v", "--no-color"]);
        assert!(args.login && args.verbose && args.no_color);
        assert!(args.prompt.is_empty());
    }
}
