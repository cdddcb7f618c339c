//! # Formula Reference Export
//!
//! Renders the catalog and the symbol glossary as a Markdown reference
//! (written to `FORMULAS.md` by the `gen-formulas` binary) or as JSON.

use crate::errors::CalcResult;
use crate::formulas::FormulaCatalog;
use crate::glossary::{GLOSSARY, MODEL_TITLE};

/// Generate the Markdown reference for every catalog formula.
pub fn generate_formulas_markdown() -> String {
    let catalog = FormulaCatalog::global();
    let mut output = String::with_capacity(8_000);

    output.push_str(&format!("# {}: Formula Reference\n\n", MODEL_TITLE));
    output.push_str(
        r#"> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-formulas`

Inputs are parsed from their leading numeric prefix. Empty or non-numeric
inputs evaluate to `NaN`.

---

"#,
    );

    for def in catalog {
        output.push_str(&format!("## {}\n\n", def.name));
        output.push_str(&format!("{}\n\n", def.description));
        output.push_str(&format!("**Formula:** `{}`\n\n", def.formula_plain));
        output.push_str(&format!("**TeX:** `{}`\n\n", def.display_expression));

        output.push_str("**Variables:**\n\n");
        output.push_str("| Input | Symbol | Description |\n");
        output.push_str("|-------|--------|-------------|\n");
        for var in &def.variables {
            output.push_str(&format!(
                "| `{}` | `{}` | {} |\n",
                var.name, var.symbol, var.description
            ));
        }
        output.push('\n');
        output.push_str("---\n\n");
    }

    output.push_str("## Variable Descriptions\n\n");
    for entry in GLOSSARY {
        output.push_str(&format!("- **{}**: {}\n", entry.plain, entry.description));
    }
    output.push('\n');

    output.push_str(&format!(
        "## Statistics\n\n- **Total Formulas:** {}\n",
        catalog.len()
    ));

    output
}

/// The catalog as pretty-printed JSON
pub fn catalog_json() -> CalcResult<String> {
    let definitions: Vec<_> = FormulaCatalog::global().iter().collect();
    Ok(serde_json::to_string_pretty(&definitions)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_formulas_markdown() {
        let md = generate_formulas_markdown();
        assert!(md.starts_with("# Modeling of Variable Pitch Propeller"));
        for def in FormulaCatalog::global() {
            assert!(md.contains(&format!("## {}\n", def.name)), "missing {}", def.name);
        }
        assert!(md.contains("| `d_omega_dt` |"));
        assert!(md.contains("- **Total Formulas:** 6"));
        assert!(md.contains("Coulomb friction torque."));
    }

    #[test]
    fn test_catalog_json() {
        let json = catalog_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[5]["name"], "Alpha Opt");
        assert_eq!(entries[0]["variables"][1]["name"], "alpha");
    }
}
