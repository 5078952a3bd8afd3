//! Argument parsing via clap.

use batt_core::DisplayOptions;
use clap::{ArgAction, Parser};

/// One-shot battery status line for status bars and prompts.
///
/// The auto help/version flags are disabled: the CLI surface is `-c`
/// and `-s`, and anything else must be a silent no-op so the binary
/// keeps working inside status-bar configs that pass extra switches.
#[derive(Parser, Debug)]
#[command(name = "battbar", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Colorize the label with ANSI escapes.
    #[arg(short = 'c', long = "color")]
    pub color: bool,

    /// Use one-letter labels (repeatable; presence is what matters).
    #[arg(short = 's', long = "short", action = ArgAction::Count)]
    pub short: u8,
}

impl Args {
    /// Parse getopt-style: unknown flags are dropped rather than
    /// rejected, and recognized letters inside a mixed short cluster
    /// still apply (`-xc` turns color on). `raw` is the argument list
    /// without the program name.
    pub fn parse_lenient(raw: impl Iterator<Item = String>) -> Self {
        let tokens = std::iter::once("battbar".to_string()).chain(recognized_flags(raw));
        Self::parse_from(tokens)
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            color: self.color,
            short_labels: self.short > 0,
        }
    }
}

/// Keep only the tokens clap knows about: `--color`, `--short`, and
/// short clusters reduced to their recognized letters. Everything else
/// (unknown flags, `-h`, positionals) is dropped without comment.
fn recognized_flags(raw: impl Iterator<Item = String>) -> Vec<String> {
    let mut kept = Vec::new();
    for arg in raw {
        match arg.as_str() {
            "--color" | "--short" => kept.push(arg),
            long if long.starts_with("--") => {}
            cluster if cluster.starts_with('-') && cluster.len() > 1 => {
                let letters: String = cluster[1..]
                    .chars()
                    .filter(|letter| matches!(letter, 'c' | 's'))
                    .collect();
                if !letters.is_empty() {
                    kept.push(format!("-{letters}"));
                }
            }
            _ => {}
        }
    }
    kept
}
