//! Unitform
//!
//! Unit conversion across eight categories with a CSV history log.
//!
//! Commands:
//! - convert: Convert one value between two units
//! - quick: Convert quick text such as "100 km to mi"
//! - categories / units: List what can be converted
//! - history: Print the persisted conversion log
//! - export: Write one conversion to the single-row export file
//! - form: Interactive line-based form (default)

mod commands;
mod form;
mod logging;
mod settings;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use clap::{Parser, Subcommand};
use tracing::debug;
use unitform_core::FormError;
use unitform_history::Session;
use unitform_units::{parse_value, standard_registry};

use form::Form;
use settings::Settings;

#[derive(Parser)]
#[command(name = "unitform", version)]
#[command(about = "Convert values between units and keep a CSV history", long_about = None)]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one value
    Convert {
        /// Value to convert
        #[arg(allow_hyphen_values = true, value_parser = value_arg)]
        value: f64,

        /// Source unit (name or alias)
        from: String,

        /// Target unit (name or alias)
        to: String,

        /// Category (inferred from the source unit when omitted)
        #[arg(short, long)]
        category: Option<String>,

        /// Append the result to the history log
        #[arg(long)]
        save: bool,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert quick text, e.g. "100 km to mi" or "32 F -> C"
    Quick {
        /// Conversion text (words are joined with spaces)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,

        /// Append the result to the history log
        #[arg(long)]
        save: bool,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories with their reference units
    Categories {
        #[arg(long)]
        json: bool,
    },

    /// List the units of a category
    Units {
        /// Category name (e.g. "length", "temp")
        category: String,

        #[arg(long)]
        json: bool,
    },

    /// Print the persisted conversion log
    History {
        /// Print raw CSV instead of a table
        #[arg(long)]
        csv: bool,
    },

    /// Convert one value and write the single-row export file
    Export {
        #[arg(allow_hyphen_values = true, value_parser = value_arg)]
        value: f64,

        from: String,

        to: String,

        #[arg(short, long)]
        category: Option<String>,

        /// Output file (default: conversion_result.csv in the data directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interactive form on stdin (default)
    Form {
        /// Append every conversion to the history log as it happens
        #[arg(long)]
        autosave: bool,
    },
}

fn value_arg(s: &str) -> Result<f64, String> {
    parse_value(s).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.settings.log_level);
    debug!(settings = ?cli.settings, "starting");

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), FormError> {
    let settings = cli.settings;
    let registry = standard_registry();
    let ctx = settings.context();
    let log = settings.log();
    let mut out = io::stdout().lock();

    match cli.command.unwrap_or(Commands::Form { autosave: false }) {
        Commands::Convert { value, from, to, category, save, json } => {
            let request = commands::request(&registry, value, &from, &to, category.as_deref())?;
            commands::convert(&registry, &ctx, &request, save.then_some(&log), json, &mut out)?;
        }
        Commands::Quick { text, save, json } => {
            commands::quick(&registry, &ctx, &text.join(" "), save.then_some(&log), json, &mut out)?;
        }
        Commands::Categories { json } => commands::categories(&registry, json, &mut out)?,
        Commands::Units { category, json } => commands::units(&registry, &category, json, &mut out)?,
        Commands::History { csv } => commands::history(&log, &ctx, csv, &mut out)?,
        Commands::Export { value, from, to, category, output } => {
            let request = commands::request(&registry, value, &from, &to, category.as_deref())?;
            commands::export(&registry, &ctx, &request, settings.export_path(output), &mut out)?;
        }
        Commands::Form { autosave } => {
            let mut form = Form::new(&registry, ctx, log, settings.export_path(None))?
                .with_autosave(autosave);
            let mut session = Session::new();
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            form.run(&mut session, stdin.lock(), &mut out, prompt)?;
        }
    }

    out.flush().map_err(|e| FormError::io_error(e.to_string()))
}
