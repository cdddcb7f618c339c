//! # Formula Inputs
//!
//! Raw text entered for a formula's variables, and the number parsing that
//! turns it into `f64`.
//!
//! Parsing takes the longest numeric *prefix* of the text and ignores the
//! rest (`"3.5 rad"` reads as `3.5`). Text with no numeric prefix, or a
//! variable that was never entered, reads as NaN, which then flows through
//! the formula arithmetic unchanged.

use log::trace;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::formulas::{Formula, FormulaDefinition};

// =============================================================================
// NUMBER PARSING
// =============================================================================

/// Whitespace skipped before a number: the ECMAScript `WhiteSpace` and
/// `LineTerminator` sets. Unlike `char::is_whitespace`, U+0085 (NEL) is not
/// included.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{b}'
            | '\u{c}'
            | ' '
            | '\u{a0}'
            | '\u{feff}'
            | '\n'
            | '\r'
            | '\u{2028}'
            | '\u{2029}'
            // Unicode Zs
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
    )
}

/// Parse the leading numeric prefix of `text`.
///
/// Accepted prefix, after leading whitespace:
/// `[+-]? (Infinity | digits [. digits] [e [+-] digits] | . digits [e [+-] digits])`.
/// An exponent marker only counts when at least one exponent digit follows.
/// Returns NaN when no prefix matches.
///
/// # Example
/// ```rust
/// use prop_core::inputs::parse_float;
///
/// assert_eq!(parse_float("  3.5abc"), 3.5);
/// assert_eq!(parse_float("1e"), 1.0);
/// assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
/// assert!(parse_float("abc").is_nan());
/// ```
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start_matches(is_js_whitespace);
    let bytes = s.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        if has_digits || frac_end > frac_start {
            end = frac_end;
            has_digits = true;
        }
    }

    if !has_digits {
        trace!("no numeric prefix in {:?}", text);
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = exp;
        while is_digit(exp) {
            exp += 1;
        }
        if exp > exp_digits {
            end = exp;
        }
    }

    // Only ASCII was consumed, so `end` is a char boundary
    s[..end].parse().unwrap_or(f64::NAN)
}

// =============================================================================
// INPUT SET
// =============================================================================

/// Text entered for each declared variable of one formula.
///
/// Keys are fixed to the formula's variables; there is no way to store a
/// value under any other name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputSet {
    formula: Formula,
    entries: Vec<Option<String>>,
}

impl InputSet {
    /// Empty input set for a formula
    pub fn new(formula: Formula) -> Self {
        let count = formula.definition().variables.len();
        Self {
            formula,
            entries: vec![None; count],
        }
    }

    /// Build from `(variable, text)` pairs
    ///
    /// # Example
    /// ```rust
    /// use prop_core::formulas::Formula;
    /// use prop_core::inputs::InputSet;
    ///
    /// let inputs = InputSet::from_pairs(Formula::LiftCoefficient, [("aL1", "2"), ("alpha", "3")]).unwrap();
    /// assert_eq!(inputs.get("alpha"), Some("3"));
    /// assert_eq!(inputs.get("aL0"), None);
    /// ```
    pub fn from_pairs<K, V, I>(formula: Formula, pairs: I) -> CalcResult<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut inputs = InputSet::new(formula);
        for (name, text) in pairs {
            inputs.set(name.as_ref(), text)?;
        }
        Ok(inputs)
    }

    pub fn formula(&self) -> Formula {
        self.formula
    }

    fn definition(&self) -> &'static FormulaDefinition {
        self.formula.definition()
    }

    /// Store the text for a declared variable
    pub fn set(&mut self, variable: &str, text: impl Into<String>) -> CalcResult<()> {
        let index = self
            .definition()
            .variable_index(variable)
            .ok_or_else(|| CalcError::unknown_variable(self.formula.name(), variable))?;
        self.entries[index] = Some(text.into());
        Ok(())
    }

    /// Apply a `variable=value` assignment
    pub fn assign(&mut self, assignment: &str) -> CalcResult<()> {
        let (name, text) = assignment
            .split_once('=')
            .ok_or_else(|| CalcError::malformed_assignment(assignment))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(CalcError::malformed_assignment(assignment));
        }
        self.set(name, text)
    }

    /// Raw text for a variable, if entered
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.definition()
            .variable_index(variable)
            .and_then(|i| self.entries[i].as_deref())
    }

    /// Parsed value for a variable; NaN when absent or non-numeric
    pub fn value(&self, variable: &str) -> f64 {
        self.get(variable).map(parse_float).unwrap_or(f64::NAN)
    }

    /// Declared variables with their current text, in field order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        self.definition()
            .variable_names()
            .zip(self.entries.iter().map(|e| e.as_deref()))
    }

    /// Variables without any entered text
    pub fn missing(&self) -> Vec<&'static str> {
        self.iter()
            .filter(|(_, text)| text.is_none())
            .map(|(name, _)| name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_float("3"), 3.0);
        assert_eq!(parse_float("+2"), 2.0);
        assert_eq!(parse_float("-.5"), -0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("5.e2"), 500.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("2.5E-1"), 0.25);
    }

    #[test]
    fn test_parse_prefix_only() {
        assert_eq!(parse_float("  3.5abc"), 3.5);
        assert_eq!(parse_float("\t\n42 rad/s"), 42.0);
        assert_eq!(parse_float("1.2.3"), 1.2);
        assert_eq!(parse_float("0x10"), 0.0);
        assert_eq!(parse_float("7-3"), 7.0);
    }

    #[test]
    fn test_parse_incomplete_exponent() {
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("1e+"), 1.0);
        assert_eq!(parse_float("1.5e-x"), 1.5);
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("+Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinityx"), f64::NEG_INFINITY);
        assert_eq!(parse_float("1e400"), f64::INFINITY);
    }

    #[test]
    fn test_parse_no_prefix() {
        for text in ["", "   ", ".", "-", "+.", "abc", "inf", "NaN", "e5", "infinity"] {
            assert!(parse_float(text).is_nan(), "{:?} should parse to NaN", text);
        }
    }

    #[test]
    fn test_parse_leading_whitespace_set() {
        for text in ["\u{a0}5", "\u{2028}5", "\u{3000}5", "\u{b}\u{c}5", "\u{feff}5"] {
            assert_eq!(parse_float(text), 5.0, "{:?} should parse to 5", text);
        }
        // Next line is whitespace for `char` but not before a number
        assert!(parse_float("\u{85}5").is_nan());
    }

    #[test]
    fn test_parse_negative_zero() {
        let z = parse_float("-0");
        assert_eq!(z, 0.0);
        assert!(z.is_sign_negative());
    }

    #[test]
    fn test_input_set_rejects_unknown_variable() {
        let mut inputs = InputSet::new(Formula::Thrust);
        let err = inputs.set("aL1", "1").unwrap_err();
        assert_eq!(err, CalcError::unknown_variable("F", "aL1"));
        assert_eq!(err.error_code(), "UNKNOWN_VARIABLE");
    }

    #[test]
    fn test_input_set_values() {
        let mut inputs = InputSet::new(Formula::Thrust);
        inputs.set("bF1", "2").unwrap();
        inputs.set("omega", "3x").unwrap();
        assert_eq!(inputs.value("bF1"), 2.0);
        assert_eq!(inputs.value("omega"), 3.0);
        assert!(inputs.value("alpha").is_nan());
        assert!(inputs.value("not_declared").is_nan());
        assert_eq!(inputs.missing(), vec!["alpha", "bF0"]);
    }

    #[test]
    fn test_input_set_overwrite() {
        let mut inputs = InputSet::new(Formula::LiftCoefficient);
        inputs.set("alpha", "1").unwrap();
        inputs.set("alpha", "12").unwrap();
        assert_eq!(inputs.get("alpha"), Some("12"));
    }

    #[test]
    fn test_input_set_iter_in_field_order() {
        let inputs = InputSet::from_pairs(Formula::AlphaOpt, [("bQ0", "5"), ("bQ2", "1")]).unwrap();
        let fields: Vec<_> = inputs.iter().collect();
        assert_eq!(
            fields,
            vec![
                ("bQ2", Some("1")),
                ("bF0", None),
                ("bF1", None),
                ("bQ1", None),
                ("bQ0", Some("5")),
            ]
        );
    }

    #[test]
    fn test_assign() {
        let mut inputs = InputSet::new(Formula::EnergyInput);
        inputs.assign("d_omega_dt=0.5").unwrap();
        inputs.assign(" T = 2").unwrap();
        assert_eq!(inputs.value("d_omega_dt"), 0.5);
        assert_eq!(inputs.value("T"), 2.0);
        assert_eq!(
            inputs.assign("omega").unwrap_err(),
            CalcError::malformed_assignment("omega")
        );
        assert_eq!(
            inputs.assign("=3").unwrap_err(),
            CalcError::malformed_assignment("=3")
        );
    }
}
