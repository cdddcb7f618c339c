//! # Formula Evaluator
//!
//! Turns a formula definition plus the text entered for its variables into
//! an [`EvaluationResult`].
//!
//! Evaluation never fails. Unparsable or missing inputs become NaN and
//! propagate through the arithmetic; the only explicit invalid outcome is a
//! negative discriminant for [`Formula::AlphaOpt`].
//!
//! ## Example
//!
//! ```rust
//! use prop_core::evaluator::{evaluate, EvaluationResult};
//! use prop_core::formulas::Formula;
//! use prop_core::inputs::InputSet;
//!
//! let inputs = InputSet::from_pairs(
//!     Formula::LiftCoefficient,
//!     [("aL1", "2"), ("alpha", "3"), ("aL0", "1")],
//! ).unwrap();
//!
//! let result = evaluate(Formula::LiftCoefficient.definition(), &inputs);
//! assert_eq!(result, EvaluationResult::Number(7.0));
//! assert_eq!(result.to_string(), "7");
//! ```

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::formulas::propeller::{
    counter_torque, drag_coefficient, input_power, lift_coefficient, optimal_pitch_angle, thrust,
};
use crate::formulas::{Formula, FormulaDefinition};
use crate::inputs::InputSet;

// ============================================================================
// Result Types
// ============================================================================

/// Why a formula produced no numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidReason {
    /// The optimal pitch angle quadratic has no real root
    NegativeDiscriminant,
}

impl InvalidReason {
    /// Text shown in place of a result
    pub fn message(&self) -> &'static str {
        match self {
            InvalidReason::NegativeDiscriminant => "Invalid: Discriminant < 0",
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of evaluating a formula.
///
/// `Number` may hold NaN or an infinity; those are ordinary results here.
/// In JSON they are written as the strings `"NaN"`, `"Infinity"` and
/// `"-Infinity"`, since JSON numbers cannot hold them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum EvaluationResult {
    Number(#[serde(with = "number_repr")] f64),
    Invalid(InvalidReason),
}

impl EvaluationResult {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            EvaluationResult::Number(v) => Some(*v),
            EvaluationResult::Invalid(_) => None,
        }
    }

    /// True for a finite number
    pub fn is_finite(&self) -> bool {
        self.as_number().is_some_and(f64::is_finite)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, EvaluationResult::Invalid(_))
    }

    /// Bitwise equality, so NaN results compare equal to themselves
    pub fn same_as(&self, other: &EvaluationResult) -> bool {
        match (self, other) {
            (EvaluationResult::Number(a), EvaluationResult::Number(b)) => a.to_bits() == b.to_bits(),
            (EvaluationResult::Invalid(a), EvaluationResult::Invalid(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationResult::Number(v) => f.write_str(&format_number(*v)),
            EvaluationResult::Invalid(reason) => reason.fmt(f),
        }
    }
}

/// Serde form of a result number: finite values as JSON numbers, the rest
/// as their display text.
mod number_repr {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&super::format_number(*value))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(v),
            Repr::Text(text) => match text.as_str() {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::invalid_value(
                    Unexpected::Str(other),
                    &"a number, \"NaN\", \"Infinity\" or \"-Infinity\"",
                )),
            },
        }
    }
}

/// Format a number the way a browser prints it.
///
/// Integers print without a fraction, `-0` prints as `0`, non-finite values
/// print as `NaN`, `Infinity` and `-Infinity`, and magnitudes outside
/// `[1e-6, 1e21)` use exponent notation with an explicit sign.
///
/// ```rust
/// use prop_core::evaluator::format_number;
///
/// assert_eq!(format_number(20.0), "20");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
        _ => formatted,
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Evaluate a formula against the text entered for its variables.
///
/// Each variable is parsed with [`parse_float`](crate::inputs::parse_float);
/// absent entries read as NaN. Pure and idempotent.
pub fn evaluate(definition: &FormulaDefinition, inputs: &InputSet) -> EvaluationResult {
    let result = evaluate_values(definition.formula, |name| inputs.value(name));
    debug!("evaluated {} -> {}", definition.name, result);
    result
}

/// Evaluate a formula from already parsed values.
///
/// `value` is asked for each variable the rule reads, by declared name.
pub fn evaluate_values<F>(formula: Formula, mut value: F) -> EvaluationResult
where
    F: FnMut(&'static str) -> f64,
{
    match formula {
        Formula::LiftCoefficient => EvaluationResult::Number(lift_coefficient(
            value("aL1"),
            value("alpha"),
            value("aL0"),
        )),
        Formula::DragCoefficient => EvaluationResult::Number(drag_coefficient(
            value("aD2"),
            value("alpha"),
            value("aD1"),
            value("aD0"),
        )),
        Formula::Thrust => EvaluationResult::Number(thrust(
            value("bF1"),
            value("alpha"),
            value("bF0"),
            value("omega"),
        )),
        Formula::CounterTorque => EvaluationResult::Number(counter_torque(
            value("bQ2"),
            value("alpha"),
            value("bQ1"),
            value("bQ0"),
            value("omega"),
        )),
        Formula::EnergyInput => EvaluationResult::Number(input_power(
            value("T"),
            value("omega"),
            value("B_omega"),
            value("J"),
            value("d_omega_dt"),
            value("T_C"),
        )),
        Formula::AlphaOpt => {
            match optimal_pitch_angle(value("bQ2"), value("bF0"), value("bF1"), value("bQ1"), value("bQ0")) {
                Some(alpha) => EvaluationResult::Number(alpha),
                None => {
                    debug!("alpha opt: negative discriminant");
                    EvaluationResult::Invalid(InvalidReason::NegativeDiscriminant)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulas::{FormulaCatalog, ALL_FORMULAS};
    use std::collections::HashSet;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    fn eval(formula: Formula, pairs: &[(&str, &str)]) -> EvaluationResult {
        let inputs = InputSet::from_pairs(formula, pairs.iter().copied()).unwrap();
        evaluate(formula.definition(), &inputs)
    }

    #[test]
    fn test_lift_coefficient_example() {
        let r = eval(Formula::LiftCoefficient, &[("aL1", "2"), ("alpha", "3"), ("aL0", "1")]);
        assert_eq!(r, EvaluationResult::Number(7.0));
    }

    #[test]
    fn test_thrust_example() {
        let r = eval(Formula::Thrust, &[("bF1", "2"), ("alpha", "1"), ("bF0", "3"), ("omega", "2")]);
        assert_eq!(r, EvaluationResult::Number(20.0));
    }

    #[test]
    fn test_every_formula_matches_hand_computation() {
        let (a, b, c, d, e, g): (f64, f64, f64, f64, f64, f64) = (1.25, -0.5, 2.0, 0.75, 3.5, 0.1);
        let values = [a, b, c, d, e, g];

        for def in FormulaCatalog::global() {
            let mut inputs = InputSet::new(def.formula);
            for (name, v) in def.variable_names().zip(values) {
                inputs.set(name, v.to_string()).unwrap();
            }
            let got = evaluate(def, &inputs);

            let expected = match def.formula {
                Formula::LiftCoefficient => a * b + c,
                Formula::DragCoefficient => a * b * b + c * b + d,
                Formula::Thrust => (a * b + c) * d * d,
                Formula::CounterTorque => (a * b * b + c * b + d) * e * e,
                Formula::EnergyInput => a * b + c * b * b + (d * b * e + g) * b,
                Formula::AlphaOpt => {
                    let (bq2, bf0, bf1, bq1, bq0) = (a, b, c, d, e);
                    let disc = (bq2 * bf0) * (bq2 * bf0) - bq2 * bf1 * (-bf1 * bq0 + bq1 * bf0);
                    assert!(disc >= 0.0);
                    (-bq2 * bf0 + disc.sqrt()) / (bq2 * bf1)
                }
            };

            let v = got.as_number().unwrap();
            assert!(approx_eq(v, expected), "{}: {} (expected {})", def.name, v, expected);
        }
    }

    #[test]
    fn test_alpha_opt_boundary() {
        let r = eval(
            Formula::AlphaOpt,
            &[("bQ2", "1"), ("bF0", "1"), ("bF1", "1"), ("bQ1", "1"), ("bQ0", "1")],
        );
        assert_eq!(r, EvaluationResult::Number(0.0));
    }

    #[test]
    fn test_alpha_opt_negative_discriminant() {
        // Δ = 0 - 1·1·(-1·(-5) + 5·0) = -5
        let r = eval(
            Formula::AlphaOpt,
            &[("bQ2", "1"), ("bF0", "0"), ("bF1", "1"), ("bQ1", "5"), ("bQ0", "-5")],
        );
        assert_eq!(r, EvaluationResult::Invalid(InvalidReason::NegativeDiscriminant));
        assert_eq!(r.to_string(), "Invalid: Discriminant < 0");
    }

    #[test]
    fn test_alpha_opt_positive_bq0_has_real_root() {
        // Δ = 0 - 1·1·(-1·5 + 5·0) = 5, α = √5
        let r = eval(
            Formula::AlphaOpt,
            &[("bQ2", "1"), ("bF0", "0"), ("bF1", "1"), ("bQ1", "5"), ("bQ0", "5")],
        );
        assert_eq!(r, EvaluationResult::Number(5.0_f64.sqrt()));
    }

    #[test]
    fn test_alpha_opt_zero_divisor_is_numeric() {
        let r = eval(
            Formula::AlphaOpt,
            &[("bQ2", "0"), ("bF0", "1"), ("bF1", "1"), ("bQ1", "1"), ("bQ0", "1")],
        );
        assert!(matches!(r, EvaluationResult::Number(v) if v.is_nan()));
        assert_eq!(r.to_string(), "NaN");
    }

    #[test]
    fn test_alpha_opt_unparsable_input_is_invalid() {
        let r = eval(Formula::AlphaOpt, &[("bQ2", "1"), ("bF0", "x")]);
        assert!(r.is_invalid());
    }

    #[test]
    fn test_missing_inputs_propagate_nan() {
        for formula in ALL_FORMULAS.iter().filter(|f| **f != Formula::AlphaOpt) {
            let r = evaluate(formula.definition(), &InputSet::new(*formula));
            assert!(matches!(r, EvaluationResult::Number(v) if v.is_nan()), "{}", formula);
        }
        let r = eval(Formula::LiftCoefficient, &[("aL1", "2"), ("alpha", "abc"), ("aL0", "1")]);
        assert_eq!(r.to_string(), "NaN");
    }

    #[test]
    fn test_prefix_parsing_in_evaluation() {
        let r = eval(Formula::LiftCoefficient, &[("aL1", "2 per rad"), ("alpha", "3deg"), ("aL0", " 1")]);
        assert_eq!(r, EvaluationResult::Number(7.0));
    }

    #[test]
    fn test_idempotent() {
        for formula in ALL_FORMULAS {
            let inputs = InputSet::from_pairs(
                formula,
                formula.definition().variable_names().map(|n| (n, "1.5")),
            )
            .unwrap();
            let first = evaluate(formula.definition(), &inputs);
            let second = evaluate(formula.definition(), &inputs);
            assert!(first.same_as(&second), "{}", formula);
        }
    }

    #[test]
    fn test_rules_read_exactly_declared_variables() {
        for def in FormulaCatalog::global() {
            let mut read = HashSet::new();
            evaluate_values(def.formula, |name| {
                read.insert(name);
                1.0
            });
            let declared: HashSet<_> = def.variable_names().collect();
            assert_eq!(read, declared, "{}", def.name);
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-2.25), "-2.25");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-2e22), "-2e+22");
        assert_eq!(format_number(123456.0), "123456");
    }

    #[test]
    fn test_result_serialization() {
        let json = serde_json::to_string(&EvaluationResult::Number(7.0)).unwrap();
        assert_eq!(json, r#"{"kind":"Number","value":7.0}"#);
        let invalid = EvaluationResult::Invalid(InvalidReason::NegativeDiscriminant);
        let json = serde_json::to_string(&invalid).unwrap();
        assert_eq!(json, r#"{"kind":"Invalid","value":"NegativeDiscriminant"}"#);
        let roundtrip: EvaluationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, invalid);
        let number: EvaluationResult = serde_json::from_str(r#"{"kind":"Number","value":7}"#).unwrap();
        assert_eq!(number, EvaluationResult::Number(7.0));
    }

    #[test]
    fn test_non_finite_result_serialization() {
        let cases = [
            (f64::NAN, r#"{"kind":"Number","value":"NaN"}"#),
            (f64::INFINITY, r#"{"kind":"Number","value":"Infinity"}"#),
            (f64::NEG_INFINITY, r#"{"kind":"Number","value":"-Infinity"}"#),
        ];
        for (value, expected) in cases {
            let result = EvaluationResult::Number(value);
            let json = serde_json::to_string(&result).unwrap();
            assert_eq!(json, expected);
            let roundtrip: EvaluationResult = serde_json::from_str(&json).unwrap();
            assert!(roundtrip.same_as(&result), "{} -> {:?}", json, roundtrip);
        }
    }

    #[test]
    fn test_unknown_number_text_is_rejected() {
        let err = serde_json::from_str::<EvaluationResult>(r#"{"kind":"Number","value":"inf"}"#);
        assert!(err.is_err());
    }
}
