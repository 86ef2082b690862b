//! Command dispatch and the extract pipeline driver.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::{Arguments, Command, ExtractArgs};
use super::exit_status::ExitStatus;
use crate::catalog::build_catalog;
use crate::config::{CONFIG_FILE_NAME, default_config_json, load_config};
use crate::render::render;

/// Success mark for consistent output formatting.
const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn run(Arguments { command, extract }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Extract(args)) => run_extract(&args),
        None => run_extract(&extract),
        Some(Command::Init) => init(),
    }
}

fn run_extract(args: &ExtractArgs) -> Result<ExitStatus> {
    let loaded = load_config(&args.base_dir)?;
    let config = loaded.config;

    let outcome = build_catalog(&args.base_dir, &config);

    if args.verbose {
        for warning in &outcome.warnings {
            eprintln!("{} {}", "warning:".bold().yellow(), warning);
        }
    }

    let document = render(&outcome.catalog);

    let output = match &args.output {
        Some(path) => path.clone(),
        None => args.base_dir.join(&config.output),
    };
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(&output, &document)
        .with_context(|| format!("Failed to write catalog: {}", output.display()))?;

    let message_count: usize = outcome
        .catalog
        .areas
        .iter()
        .map(|a| a.messages.len())
        .sum();
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} {}, cataloged {} distinct {} -> {}",
            outcome.files_scanned,
            if outcome.files_scanned == 1 { "file" } else { "files" },
            message_count,
            if message_count == 1 { "message" } else { "messages" },
            output.display()
        )
        .green()
    );
    if !outcome.warnings.is_empty() && !args.verbose {
        eprintln!(
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            outcome.warnings.len(),
            "-v".cyan()
        );
    }

    Ok(ExitStatus::Success)
}

fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    println!("{} Created {}", SUCCESS_MARK.green(), CONFIG_FILE_NAME);
    Ok(ExitStatus::Success)
}
