//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::text::hex::utf16_hex;
use crate::text::{remove_diacritics, to_ascii, to_slug, unescape, unescape_verbatim};

use super::args::{Commands, ConfigAction};
use super::paths::{config_file_path_with_override, PersistentConfig};

/// Execute a CLI command against standard input and output
pub fn execute(command: Commands, config: Option<PathBuf>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(command, config.as_deref(), stdin.lock(), &mut out)?;
    out.flush().context("Failed to flush standard output")
}

/// Execute a CLI command with explicit input and output
///
/// `input` is only read by text commands given no TEXT arguments.
pub fn run<R: BufRead, W: Write>(
    command: Commands,
    config: Option<&Path>,
    input: R,
    out: &mut W,
) -> Result<()> {
    debug!("Running {} command", command.name());
    match command {
        Commands::Slug {
            text,
            lowercase,
            parenthetical,
            strict,
        } => {
            let merged = PersistentConfig::load_from(config)?.merge_with_cli(
                lowercase.then_some(true),
                parenthetical.then_some(true),
                strict.then_some(true),
            );
            let options = merged.slug_options();
            debug!("Slug options: {:?}", options);
            for_each_text(text, input, out, |line| to_slug(line, options))
        }
        Commands::Ascii { text } => for_each_text(text, input, out, |line| Ok(to_ascii(line))),
        Commands::Strip { text } => {
            for_each_text(text, input, out, |line| Ok(remove_diacritics(line)))
        }
        Commands::Hex { text } => for_each_text(text, input, out, |line| {
            Ok(line.chars().flat_map(utf16_hex).collect::<Vec<_>>().join(" "))
        }),
        Commands::Unescape { text, verbatim } => {
            if verbatim {
                for_each_text(text, input, out, unescape_verbatim)
            } else {
                for_each_text(text, input, out, unescape)
            }
        }
        Commands::Config { action } => cmd_config(action, config, out),
    }
}

/// Transform the joined TEXT arguments, or every input line when there are none
fn for_each_text<R, W, F>(text: Vec<String>, input: R, out: &mut W, mut transform: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> crate::Result<String>,
{
    if !text.is_empty() {
        let joined = text.join(" ");
        writeln!(out, "{}", transform(&joined)?)?;
        return Ok(());
    }

    for (index, line) in input.lines().enumerate() {
        let line_num = index + 1;
        let line = line
            .with_context(|| format!("Failed to read line {} from standard input", line_num))?;
        let result = transform(&line).with_context(|| format!("Line {}", line_num))?;
        writeln!(out, "{}", result)?;
    }
    Ok(())
}

/// Config command
fn cmd_config<W: Write>(action: ConfigAction, custom_path: Option<&Path>, out: &mut W) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = PersistentConfig::load_from(custom_path)?;
            print_config(out, &config, custom_path)
        }
        ConfigAction::Path => {
            let path = config_file_path_with_override(custom_path)?;
            writeln!(out, "{}", path.display())?;
            Ok(())
        }
        ConfigAction::Reset => {
            let config = PersistentConfig::default();
            config.save_to(custom_path)?;
            writeln!(out, "{}", "Configuration reset to defaults".green().bold())?;
            writeln!(out)?;
            print_config(out, &config, custom_path)
        }
        ConfigAction::Set {
            lowercase,
            parenthetical,
            strict,
        } => {
            let mut config = PersistentConfig::load_from(custom_path)?;
            let mut changed = false;

            for (name, value, slot) in [
                ("lowercase", lowercase, &mut config.lowercase),
                ("parenthetical", parenthetical, &mut config.parenthetical),
                ("strict", strict, &mut config.strict),
            ] {
                if let Some(value) = value {
                    *slot = Some(value);
                    writeln!(out, "  Set default {}: {}", name, value.to_string().green())?;
                    changed = true;
                }
            }

            if changed {
                config.save_to(custom_path)?;
                writeln!(out)?;
                writeln!(out, "{}", "Configuration saved".green().bold())?;
            }

            writeln!(out)?;
            print_config(out, &config, custom_path)
        }
    }
}

fn print_config<W: Write>(
    out: &mut W,
    config: &PersistentConfig,
    custom_path: Option<&Path>,
) -> Result<()> {
    writeln!(out, "{}", "Current Configuration:".bold().underline())?;
    writeln!(out)?;
    for (name, value) in [
        ("Lowercase:    ", config.lowercase),
        ("Parenthetical:", config.parenthetical),
        ("Strict:       ", config.strict),
    ] {
        let shown = if value.unwrap_or(false) {
            "enabled".green()
        } else {
            "disabled".red()
        };
        writeln!(out, "  {} {}", name, shown)?;
    }

    writeln!(out)?;
    let path = config_file_path_with_override(custom_path)?;
    writeln!(out, "  Config file: {}", path.display().to_string().cyan())?;
    Ok(())
}
