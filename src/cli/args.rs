//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bitfn")]
#[command(about = "Slugs, ASCII folding and escape decoding for text")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path (must end in .json)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands. Text commands read standard input line by line when no TEXT
/// is given; otherwise the TEXT arguments are joined with spaces.
#[derive(Subcommand)]
pub enum Commands {
    /// Convert text into a URL-safe slug
    Slug {
        /// Text to convert
        text: Vec<String>,

        /// Lowercase the slug
        #[arg(short, long)]
        lowercase: bool,

        /// Keep brackets as balanced parentheses
        #[arg(short, long)]
        parenthetical: bool,

        /// Fail on characters that have no slug handling
        #[arg(short, long)]
        strict: bool,
    },

    /// Remove diacritics and transliterate letters, keeping everything else
    Ascii {
        /// Text to convert
        text: Vec<String>,
    },

    /// Remove diacritics only
    Strip {
        /// Text to convert
        text: Vec<String>,
    },

    /// Print the UTF-16 code units of the text as four-digit hex
    Hex {
        /// Text to convert
        text: Vec<String>,
    },

    /// Decode string-literal escape sequences
    Unescape {
        /// Text to decode
        text: Vec<String>,

        /// Decode verbatim literal quoting ("" for ") instead of backslash escapes
        #[arg(long)]
        verbatim: bool,
    },

    /// Show or update persistent slug defaults
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,

    /// Print the config file path
    Path,

    /// Reset the configuration to defaults
    Reset,

    /// Set one or more defaults
    Set {
        /// Default for --lowercase
        #[arg(long, action = ArgAction::Set)]
        lowercase: Option<bool>,

        /// Default for --parenthetical
        #[arg(long, action = ArgAction::Set)]
        parenthetical: Option<bool>,

        /// Default for --strict
        #[arg(long, action = ArgAction::Set)]
        strict: Option<bool>,
    },
}

impl Commands {
    /// Short name used in log output
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Slug { .. } => "slug",
            Commands::Ascii { .. } => "ascii",
            Commands::Strip { .. } => "strip",
            Commands::Hex { .. } => "hex",
            Commands::Unescape { .. } => "unescape",
            Commands::Config { .. } => "config",
        }
    }
}
