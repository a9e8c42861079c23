use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use pocketcalc::cli::{Cli, Command};
use pocketcalc::config::Config;
use pocketcalc::engine::Severity;
use pocketcalc::{logging, script, ui};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };
    cli.apply_overrides(&mut config);

    match cli.command {
        Some(Command::Eval { json, keys }) => eval(&keys.join(" "), json),
        None => {
            let log_path = logging::init_file_tracing(&config.logging)
                .context("failed to open log file")?;
            tracing::info!(path = %log_path.display(), "logging initialized");
            ui::runtime::run(&config).context("terminal UI failed")
        }
    }
}

fn eval(keys: &str, json: bool) -> anyhow::Result<()> {
    logging::init_stderr_tracing();
    let intents = script::parse_keys(keys)?;
    let outcome = script::run(intents);

    if json {
        println!("{}", serde_json::to_string(&outcome)?);
        return Ok(());
    }

    for notification in &outcome.notifications {
        let prefix = match notification.severity {
            Severity::Info => "info",
            Severity::Error => "error",
        };
        eprintln!("{prefix}: {}", notification.message);
    }
    if !outcome.expression.is_empty() {
        println!("{}", outcome.expression);
    }
    println!("{}", outcome.display);
    Ok(())
}
