//! Menu-driven session: pick a formula to open its panel (pick it again to
//! close it), type each coefficient, read the result.

use std::io::{self, BufRead, Write};

use log::debug;
use prop_core::glossary::{GLOSSARY, MODEL_TITLE};
use prop_core::{FormulaCatalog, FormulaPanel, ALL_FORMULAS};

/// Read one line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn print_menu<W: Write>(out: &mut W, panel: &FormulaPanel) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", MODEL_TITLE)?;
    for (i, def) in FormulaCatalog::global().iter().enumerate() {
        let marker = if panel.is_open(def.formula) { '*' } else { ' ' };
        writeln!(out, " {}{}) Calculate {:<13} {}", marker, i + 1, def.name, def.formula_plain)?;
    }
    writeln!(out, "  g) Variable's descriptions")?;
    writeln!(out, "  q) Quit")?;
    write!(out, "Select: ")?;
    out.flush()
}

pub fn print_glossary<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Variable's Descriptions")?;
    for entry in GLOSSARY {
        writeln!(out, "  {}: {}", entry.plain, entry.description)?;
    }
    Ok(())
}

/// Prompt for every field of the open panel, then compute.
///
/// Returns `false` when input ran out mid-panel.
fn fill_panel<R: BufRead, W: Write>(input: &mut R, out: &mut W, panel: &mut FormulaPanel) -> io::Result<bool> {
    let Some(formula) = panel.active_formula() else {
        return Ok(true);
    };
    let definition = formula.definition();
    writeln!(out, "Input Values for {}", definition.name)?;

    for variable in &definition.variables {
        write!(out, "  {}: ", variable.name)?;
        out.flush()?;
        let Some(text) = read_line(input)? else {
            return Ok(false);
        };
        if let Err(e) = panel.edit(variable.name, text) {
            // Field names come from the definition itself
            writeln!(out, "Error: {}", e)?;
        }
    }

    if let Some(result) = panel.compute() {
        writeln!(out, "Result: {}", result)?;
    }
    Ok(true)
}

/// Run the session until `q` or end of input.
pub fn run<R: BufRead, W: Write>(mut input: R, mut out: W) -> io::Result<()> {
    let mut panel = FormulaPanel::default();

    loop {
        print_menu(&mut out, &panel)?;
        let Some(choice) = read_line(&mut input)? else {
            writeln!(out)?;
            return Ok(());
        };

        match choice.trim() {
            "q" | "Q" => return Ok(()),
            "g" | "G" => print_glossary(&mut out)?,
            "" => {}
            other => {
                let formula = other
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| ALL_FORMULAS.get(i).copied());
                match formula {
                    Some(formula) => {
                        panel.select(formula);
                        if panel.is_open(formula) {
                            if !fill_panel(&mut input, &mut out, &mut panel)? {
                                writeln!(out)?;
                                return Ok(());
                            }
                        } else {
                            writeln!(out, "Closed {}", formula)?;
                        }
                    }
                    None => {
                        debug!("ignoring menu choice {:?}", other);
                        writeln!(out, "Unknown choice '{}'", other)?;
                    }
                }
            }
        }
    }
}
