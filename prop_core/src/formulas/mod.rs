//! # Propeller Model Formulas
//!
//! The fixed set of formulas the calculator can evaluate.
//!
//! ## Modules
//!
//! - [`catalog`] - Formula identification, metadata and the ordered catalog
//! - [`propeller`] - The closed-form equations behind each formula
//! - [`reference`] - Markdown/JSON export of the catalog
//!
//! ## Conventions
//!
//! - **Angles**: pitch angle `alpha` in whatever unit the coefficients were fitted in
//! - **Units**: none; every quantity is a bare `f64`

pub mod catalog;
pub mod propeller;
pub mod reference;

pub use catalog::{Formula, FormulaCatalog, FormulaDefinition, Variable, ALL_FORMULAS};

pub use propeller::{
    counter_torque,
    drag_coefficient,
    input_power,
    lift_coefficient,
    optimal_pitch_angle,
    optimal_pitch_discriminant,
    thrust,
};

pub use reference::{catalog_json, generate_formulas_markdown};
