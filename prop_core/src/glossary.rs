//! Descriptions of the symbols used by the propeller model.

use serde::Serialize;

/// Title of the model, as shown by the shells
pub const MODEL_TITLE: &str = "Modeling of Variable Pitch Propeller";

/// One described symbol (or group of symbols).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    /// TeX notation
    pub symbol: &'static str,
    /// Plain-text notation for terminals
    pub plain: &'static str,
    pub description: &'static str,
}

impl GlossaryEntry {
    const fn new(symbol: &'static str, plain: &'static str, description: &'static str) -> Self {
        Self { symbol, plain, description }
    }
}

/// Symbols in the order they are presented.
pub const GLOSSARY: &[GlossaryEntry] = &[
    GlossaryEntry::new(r"\rho", "rho", "Air density (constant)."),
    GlossaryEntry::new("r", "r", "Radial distance from the propeller center."),
    GlossaryEntry::new(r"\omega", "omega", "Rotational speed of the propeller."),
    GlossaryEntry::new("C", "C", "Chord length of the blade element."),
    GlossaryEntry::new(
        "C_L, C_D",
        "C_L, C_D",
        "Lift and drag coefficients, determined by the aerodynamic properties of the propeller.",
    ),
    GlossaryEntry::new(r"\alpha", "alpha", "Pitch angle of the propeller blade."),
    GlossaryEntry::new(
        "a_{L0}, a_{L1}, a_{D0}, a_{D1}, a_{D2}",
        "aL0, aL1, aD0, aD1, aD2",
        "Aerodynamic coefficients for lift and drag polynomials.",
    ),
    GlossaryEntry::new("F", "F", "Thrust force generated by the propeller."),
    GlossaryEntry::new("Q", "Q", "Counter-torque generated by the propeller."),
    GlossaryEntry::new(
        "b_{F0}, b_{F1}, b_{Q0}, b_{Q1}, b_{Q2}",
        "bF0, bF1, bQ0, bQ1, bQ2",
        "Model coefficients for thrust and torque equations.",
    ),
    GlossaryEntry::new("P", "P", "Power input to the propeller."),
    GlossaryEntry::new("T", "T", "Motor torque."),
    GlossaryEntry::new(r"B_\omega", "B_omega", "Viscosity coefficient of the motor."),
    GlossaryEntry::new("J", "J", "Moment of inertia of the motor-propeller system."),
    GlossaryEntry::new("T_C", "T_C", "Coulomb friction torque."),
    GlossaryEntry::new(r"\alpha_{opt}", "alpha_opt", "Optimal pitch angle for efficiency."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glossary_covers_formula_symbols() {
        let plain: Vec<_> = GLOSSARY.iter().map(|e| e.plain).collect();
        for symbol in ["omega", "alpha", "T", "J", "T_C", "B_omega", "alpha_opt"] {
            assert!(plain.contains(&symbol), "missing {}", symbol);
        }
    }

    #[test]
    fn test_glossary_descriptions_not_empty() {
        assert!(GLOSSARY.iter().all(|e| !e.description.is_empty()));
    }
}
