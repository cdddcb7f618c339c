//! UI module for the propeller formula explorer
//!
//! # Panel Structure
//! - `formula_list` - Left column: one "Calculate" button and expression per formula
//! - `formula_panel` - Input fields, Compute button and result for the open formula
//! - `descriptions` - Right column: "Variable's Descriptions"

pub mod descriptions;
pub mod formula_list;
pub mod formula_panel;
