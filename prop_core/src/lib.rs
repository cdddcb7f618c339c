//! # prop_core - Variable Pitch Propeller Formula Engine
//!
//! `prop_core` holds the formulas of a variable pitch propeller model and
//! evaluates them from user-entered text. Presentation shells (the CLI and
//! the GUI) only render what this crate produces.
//!
//! ## Design Philosophy
//!
//! - **Stateless evaluation**: Pure functions from inputs to a result
//! - **Closed formula set**: One enum variant per formula, matched exhaustively
//! - **Lenient parsing**: Leading numeric prefix, NaN for everything else
//! - **JSON-friendly**: Results and errors round-trip through serde; inputs and panels serialize
//!
//! ## Quick Start
//!
//! ```rust
//! use prop_core::{evaluate, Formula, InputSet};
//!
//! let mut inputs = InputSet::new(Formula::AlphaOpt);
//! for (name, text) in [("bQ2", "1"), ("bF0", "0"), ("bF1", "1"), ("bQ1", "5"), ("bQ0", "-5")] {
//!     inputs.set(name, text).unwrap();
//! }
//!
//! let result = evaluate(Formula::AlphaOpt.definition(), &inputs);
//! assert_eq!(result.to_string(), "Invalid: Discriminant < 0");
//! ```
//!
//! ## Modules
//!
//! - [`formulas`] - Formula catalog and propeller equations
//! - [`inputs`] - Number parsing and per-formula input sets
//! - [`evaluator`] - Formula evaluation and result formatting
//! - [`panel`] - Open/closed state of the formula input panel
//! - [`glossary`] - Descriptions of the model's symbols
//! - [`errors`] - Structured error types

pub mod errors;
pub mod evaluator;
pub mod formulas;
pub mod glossary;
pub mod inputs;
pub mod panel;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use evaluator::{evaluate, format_number, EvaluationResult, InvalidReason};
pub use formulas::{Formula, FormulaCatalog, FormulaDefinition, ALL_FORMULAS};
pub use inputs::{parse_float, InputSet};
pub use panel::FormulaPanel;
