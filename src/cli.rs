use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, KeypadLayout};

#[derive(Debug, Parser)]
#[command(name = "pocketcalc", version, about = "A pocket calculator for the terminal")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the keypad layout shown at startup
    #[arg(long, value_enum)]
    pub layout: Option<KeypadLayout>,

    /// Override the log file path
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Press a sequence of keys without the terminal UI and print the display
    Eval {
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Keys to press, e.g. `12 + 3 =` or `2 sqrt`
        #[arg(required = true, allow_hyphen_values = true, value_name = "KEYS")]
        keys: Vec<String>,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(layout) = self.layout {
            config.display.layout = layout;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}
