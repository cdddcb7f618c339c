//! # Formula Panel State
//!
//! At most one formula's input panel is open at a time. Selecting the open
//! formula again closes it; selecting another one replaces it and drops the
//! previous inputs and result.
//!
//! ```rust
//! use prop_core::formulas::Formula;
//! use prop_core::panel::FormulaPanel;
//!
//! let mut panel = FormulaPanel::default();
//! panel.select(Formula::Thrust);
//! assert!(panel.is_open(Formula::Thrust));
//!
//! panel.select(Formula::Thrust);
//! assert_eq!(panel, FormulaPanel::Closed);
//! ```

use log::debug;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::evaluator::{evaluate, EvaluationResult};
use crate::formulas::Formula;
use crate::inputs::InputSet;

/// Which formula panel is open, with its inputs and last result.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum FormulaPanel {
    #[default]
    Closed,
    Open {
        inputs: InputSet,
        result: Option<EvaluationResult>,
    },
}

impl FormulaPanel {
    /// Toggle `formula`: close it if open, otherwise open it with empty inputs
    pub fn select(&mut self, formula: Formula) {
        if self.is_open(formula) {
            debug!("closing {} panel", formula);
            *self = FormulaPanel::Closed;
        } else {
            debug!("opening {} panel", formula);
            *self = FormulaPanel::Open {
                inputs: InputSet::new(formula),
                result: None,
            };
        }
    }

    pub fn close(&mut self) {
        *self = FormulaPanel::Closed;
    }

    /// Formula whose panel is open
    pub fn active_formula(&self) -> Option<Formula> {
        match self {
            FormulaPanel::Closed => None,
            FormulaPanel::Open { inputs, .. } => Some(inputs.formula()),
        }
    }

    pub fn is_open(&self, formula: Formula) -> bool {
        self.active_formula() == Some(formula)
    }

    pub fn inputs(&self) -> Option<&InputSet> {
        match self {
            FormulaPanel::Closed => None,
            FormulaPanel::Open { inputs, .. } => Some(inputs),
        }
    }

    /// Last computed result of the open panel
    pub fn result(&self) -> Option<&EvaluationResult> {
        match self {
            FormulaPanel::Closed => None,
            FormulaPanel::Open { result, .. } => result.as_ref(),
        }
    }

    /// Record the text typed into one field of the open panel.
    ///
    /// The previous result stays on display until the next [`compute`](Self::compute).
    pub fn edit(&mut self, variable: &str, text: impl Into<String>) -> CalcResult<()> {
        match self {
            FormulaPanel::Closed => Err(CalcError::NoOpenFormula),
            FormulaPanel::Open { inputs, .. } => inputs.set(variable, text),
        }
    }

    /// Evaluate the open formula and keep the result; `None` when closed
    pub fn compute(&mut self) -> Option<EvaluationResult> {
        match self {
            FormulaPanel::Closed => None,
            FormulaPanel::Open { inputs, result } => {
                let value = evaluate(inputs.formula().definition(), inputs);
                *result = Some(value);
                Some(value)
            }
        }
    }
}
