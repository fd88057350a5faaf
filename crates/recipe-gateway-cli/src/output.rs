use console::{Style, Term};

use crate::cli::GlobalOpts;
use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

/// How the binary talks to the terminal.
///
/// Payloads (SDL, completion scripts, JSON results) go to stdout. Notices and
/// errors go to stderr so they never mix into piped output.
pub struct OutputContext {
    pub mode: OutputMode,
    pub verbose: u8,
    pub quiet: bool,
    pub use_color: bool,
}

impl OutputContext {
    pub fn from_global(global: &GlobalOpts) -> Self {
        let mode = match global.format.as_str() {
            "json" => OutputMode::Json,
            "plain" => OutputMode::Plain,
            _ => OutputMode::Human,
        };
        let dumb_term = std::env::var("TERM").is_ok_and(|t| t == "dumb");

        Self {
            mode,
            verbose: global.verbose,
            quiet: global.quiet,
            use_color: !global.no_color && !dumb_term && Term::stderr().is_term(),
        }
    }

    /// Human-mode notices are suppressed by `--quiet` and by machine formats.
    fn shows_notices(&self) -> bool {
        !self.quiet && self.mode == OutputMode::Human
    }

    /// One stderr notice, optionally prefixed with a styled tag.
    fn notice(&self, tag: Option<(&str, Style)>, msg: &str) {
        if !self.shows_notices() {
            return;
        }
        match tag {
            Some((tag, style)) if self.use_color => eprintln!("{} {msg}", style.apply_to(tag)),
            Some((tag, _)) => eprintln!("{tag} {msg}"),
            None => eprintln!("{msg}"),
        }
    }

    pub fn status(&self, msg: &str) {
        self.notice(None, msg);
    }

    pub fn success(&self, msg: &str) {
        self.notice(Some(("ok", Style::new().green().bold())), msg);
    }

    /// Errors are printed in every mode, `--quiet` included.
    pub fn print_error(&self, err: &CliError) {
        match self.mode {
            OutputMode::Json => eprintln!("{}", err.to_json()),
            OutputMode::Plain => eprintln!("error\t{err}"),
            OutputMode::Human if self.use_color => {
                eprintln!("{} {err}", Style::new().red().bold().apply_to("error:"))
            }
            OutputMode::Human => eprintln!("error: {err}"),
        }
    }

    pub fn print_json(&self, value: &serde_json::Value) {
        if let Ok(rendered) = serde_json::to_string_pretty(value) {
            println!("{rendered}");
        }
    }
}
