//! # Variable Pitch Propeller CLI
//!
//! Terminal front end for the propeller model formulas.
//!
//! ```text
//! prop_cli                          interactive menu
//! prop_cli list                     list formulas
//! prop_cli show <name>              one formula with its variables
//! prop_cli eval <name> [--json] var=value ...
//! prop_cli glossary                 symbol descriptions
//! prop_cli json                     catalog as JSON
//! ```

mod interactive;

use std::env::args;
use std::io::{self, Write};
use std::process::ExitCode;

use pretty_env_logger::formatted_builder;
use thiserror::Error;

use prop_core::formulas::catalog_json;
use prop_core::glossary::MODEL_TITLE;
use prop_core::{evaluate, CalcError, Formula, FormulaCatalog, InputSet};

fn usage_string() -> String {
    format!(
        "Usage: {} [command]

command:
    interactive                         - menu-driven session (default)
    list                                - list the formulas
    show <name>                         - show one formula and its variables
    eval <name> [--json] var=value ...  - evaluate a formula
    glossary                            - describe the model's symbols
    json                                - print the catalog as JSON",
        args().next().unwrap_or_else(|| "prop_cli".to_string())
    )
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Unknown command '{name}'\n\n{usage}", usage = usage_string())]
    UnknownCommand { name: String },
    #[error("Required argument does not exist\n\n{usage}", usage = usage_string())]
    MissingArgument,
    #[error(transparent)]
    Calc(#[from] CalcError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn list() {
    println!("{}", MODEL_TITLE);
    println!();
    for def in FormulaCatalog::global() {
        let variables: Vec<_> = def.variable_names().collect();
        println!("{:<13} {}", def.name, def.formula_plain);
        println!("{:<13} variables: {}", "", variables.join(", "));
    }
}

fn show(name: &str) -> Result<(), CliError> {
    let def = Formula::parse(name)?.definition();
    println!("{}: {}", def.name, def.description);
    println!();
    println!("  {}", def.formula_plain);
    println!("  TeX: {}", def.display_expression);
    println!();
    for var in &def.variables {
        println!("  {:<11} {}", var.name, var.description);
    }
    Ok(())
}

/// Warning text when some of the formula's variables were not given
fn missing_warning(inputs: &InputSet) -> Option<String> {
    let missing = inputs.missing();
    if missing.is_empty() {
        None
    } else {
        Some(format!("{}: no value for {}", inputs.formula(), missing.join(", ")))
    }
}

fn eval<W: Write>(args: &[String], out: &mut W) -> Result<(), CliError> {
    let name = args.first().ok_or(CliError::MissingArgument)?;
    let formula = Formula::parse(name)?;

    let mut json = false;
    let mut inputs = InputSet::new(formula);
    for arg in &args[1..] {
        if arg == "--json" {
            json = true;
        } else {
            inputs.assign(arg)?;
        }
    }

    if let Some(warning) = missing_warning(&inputs) {
        log::warn!("{}", warning);
    }

    let result = evaluate(formula.definition(), &inputs);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result).map_err(CalcError::from)?)?;
    } else {
        writeln!(out, "Result: {}", result)?;
    }
    Ok(())
}

fn dispatch_command(args: Vec<String>) -> Result<(), CliError> {
    match args.first().map(|s| s.as_str()) {
        None | Some("interactive") => interactive::run(io::stdin().lock(), io::stdout().lock())?,
        Some("list") => list(),
        Some("show") => show(args.get(1).ok_or(CliError::MissingArgument)?)?,
        Some("eval") => eval(&args[1..], &mut io::stdout().lock())?,
        Some("glossary") => interactive::print_glossary(&mut io::stdout().lock())?,
        Some("json") => println!("{}", catalog_json()?),
        Some(name) => {
            return Err(CliError::UnknownCommand {
                name: name.to_owned(),
            })
        }
    }
    Ok(())
}

fn init_logger() {
    let mut builder = formatted_builder();

    if let Ok(s) = ::std::env::var("RUST_LOG") {
        builder.parse_filters(&s);
    } else if cfg!(debug_assertions) {
        builder.parse_filters("prop_core=debug,prop_cli=debug");
    } else {
        builder.parse_filters("warn");
    }

    // A second init (e.g. from tests) is harmless
    let _ = builder.try_init();
}

fn main() -> ExitCode {
    init_logger();

    match dispatch_command(args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let CliError::Calc(calc) = &e {
                if let Ok(json) = serde_json::to_string_pretty(calc) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}
