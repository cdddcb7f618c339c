//! # Formula Catalog
//!
//! Central registry of the propeller model formulas, in display order.
//! Each formula has a definition with its display expression, its ordered
//! input variables and descriptions.
//!
//! ## Architecture
//!
//! - Type-safe formula identification via the [`Formula`] enum
//! - Static [`FormulaDefinition`] metadata per formula
//! - [`FormulaCatalog`] for ordered iteration and lookup by name
//!
//! ## Usage
//!
//! ```rust
//! use prop_core::formulas::{Formula, FormulaCatalog};
//!
//! let catalog = FormulaCatalog::global();
//! let names: Vec<_> = catalog.iter().map(|d| d.name).collect();
//! assert_eq!(names, ["C_L", "C_D", "F", "Q", "Energy Input", "Alpha Opt"]);
//!
//! let thrust = catalog.get("F").unwrap();
//! assert_eq!(thrust.formula, Formula::Thrust);
//! assert_eq!(thrust.variable_names().collect::<Vec<_>>(), ["bF1", "alpha", "bF0", "omega"]);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Variable Definition
// ============================================================================

/// An input variable of a formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    /// Key used for input fields (e.g., "aL1", "d_omega_dt")
    pub name: &'static str,
    /// TeX symbol (e.g., "a_{L1}")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
}

impl Variable {
    pub const fn new(name: &'static str, symbol: &'static str, description: &'static str) -> Self {
        Self { name, symbol, description }
    }
}

// ============================================================================
// Formula Enum
// ============================================================================

/// The formulas of the propeller model.
///
/// Each variant maps to one fixed evaluation rule; adding a variant forces
/// every dispatch site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    /// C_L = a_L1·α + a_L0
    LiftCoefficient,
    /// C_D = a_D2·α² + a_D1·α + a_D0
    DragCoefficient,
    /// F = (b_F1·α + b_F0)·ω²
    Thrust,
    /// Q = (b_Q2·α² + b_Q1·α + b_Q0)·ω²
    CounterTorque,
    /// P = T·ω + B_ω·ω² + (J·ω·dω/dt + T_C)·ω
    EnergyInput,
    /// Positive root of the optimal pitch angle quadratic
    AlphaOpt,
}

/// All formulas in display order.
pub const ALL_FORMULAS: [Formula; 6] = [
    Formula::LiftCoefficient,
    Formula::DragCoefficient,
    Formula::Thrust,
    Formula::CounterTorque,
    Formula::EnergyInput,
    Formula::AlphaOpt,
];

impl Formula {
    /// Catalog name, as shown on the formula's button
    pub fn name(&self) -> &'static str {
        match self {
            Formula::LiftCoefficient => "C_L",
            Formula::DragCoefficient => "C_D",
            Formula::Thrust => "F",
            Formula::CounterTorque => "Q",
            Formula::EnergyInput => "Energy Input",
            Formula::AlphaOpt => "Alpha Opt",
        }
    }

    /// Look up a formula by its exact catalog name
    pub fn from_name(name: &str) -> Option<Formula> {
        ALL_FORMULAS.iter().copied().find(|f| f.name() == name)
    }

    /// Like [`Formula::from_name`], but reports unknown names as an error
    pub fn parse(name: &str) -> CalcResult<Formula> {
        Formula::from_name(name).ok_or_else(|| CalcError::unknown_formula(name))
    }

    /// Static definition for this formula
    pub fn definition(&self) -> &'static FormulaDefinition {
        FormulaCatalog::global().definition(*self)
    }

    /// Position in display order
    pub fn index(&self) -> usize {
        match self {
            Formula::LiftCoefficient => 0,
            Formula::DragCoefficient => 1,
            Formula::Thrust => 2,
            Formula::CounterTorque => 3,
            Formula::EnergyInput => 4,
            Formula::AlphaOpt => 5,
        }
    }

    fn build_definition(self) -> FormulaDefinition {
        match self {
            Formula::LiftCoefficient => FormulaDefinition {
                formula: self,
                name: self.name(),
                description: "Lift coefficient as a linear function of pitch angle",
                display_expression: r"C_L = a_{L1}\alpha + a_{L0}",
                formula_plain: "C_L = aL1*alpha + aL0",
                variables: vec![
                    Variable::new("aL1", "a_{L1}", "Linear lift coefficient"),
                    Variable::new("alpha", r"\alpha", "Pitch angle of the propeller blade"),
                    Variable::new("aL0", "a_{L0}", "Constant lift coefficient"),
                ],
            },

            Formula::DragCoefficient => FormulaDefinition {
                formula: self,
                name: self.name(),
                description: "Drag coefficient as a quadratic in pitch angle",
                display_expression: r"C_D = a_{D2}\alpha^2 + a_{D1}\alpha + a_{D0}",
                formula_plain: "C_D = aD2*alpha^2 + aD1*alpha + aD0",
                variables: vec![
                    Variable::new("aD2", "a_{D2}", "Quadratic drag coefficient"),
                    Variable::new("alpha", r"\alpha", "Pitch angle of the propeller blade"),
                    Variable::new("aD1", "a_{D1}", "Linear drag coefficient"),
                    Variable::new("aD0", "a_{D0}", "Constant drag coefficient"),
                ],
            },

            Formula::Thrust => FormulaDefinition {
                formula: self,
                name: self.name(),
                description: "Thrust force generated by the propeller",
                display_expression: r"F = (b_{F1}\alpha + b_{F0}) \omega^2",
                formula_plain: "F = (bF1*alpha + bF0) * omega^2",
                variables: vec![
                    Variable::new("bF1", "b_{F1}", "Linear thrust coefficient"),
                    Variable::new("alpha", r"\alpha", "Pitch angle of the propeller blade"),
                    Variable::new("bF0", "b_{F0}", "Constant thrust coefficient"),
                    Variable::new("omega", r"\omega", "Rotational speed of the propeller"),
                ],
            },

            Formula::CounterTorque => FormulaDefinition {
                formula: self,
                name: self.name(),
                description: "Counter-torque generated by the propeller",
                display_expression: r"Q = (b_{Q2}\alpha^2 + b_{Q1}\alpha + b_{Q0}) \omega^2",
                formula_plain: "Q = (bQ2*alpha^2 + bQ1*alpha + bQ0) * omega^2",
                variables: vec![
                    Variable::new("bQ2", "b_{Q2}", "Quadratic torque coefficient"),
                    Variable::new("alpha", r"\alpha", "Pitch angle of the propeller blade"),
                    Variable::new("bQ1", "b_{Q1}", "Linear torque coefficient"),
                    Variable::new("bQ0", "b_{Q0}", "Constant torque coefficient"),
                    Variable::new("omega", r"\omega", "Rotational speed of the propeller"),
                ],
            },

            Formula::EnergyInput => FormulaDefinition {
                formula: self,
                name: self.name(),
                description: "Power input to the motor-propeller system",
                display_expression: r"P = T\omega = Q\omega + B_\omega \omega^2 + (J \omega \frac{d\omega}{dt} + T_C) \omega",
                formula_plain: "P = T*omega + B_omega*omega^2 + (J*omega*d_omega_dt + T_C) * omega",
                variables: vec![
                    Variable::new("T", "T", "Motor torque"),
                    Variable::new("omega", r"\omega", "Rotational speed of the propeller"),
                    Variable::new("B_omega", r"B_\omega", "Viscosity coefficient of the motor"),
                    Variable::new("J", "J", "Moment of inertia of the motor-propeller system"),
                    Variable::new("d_omega_dt", r"\frac{d\omega}{dt}", "Angular acceleration"),
                    Variable::new("T_C", "T_C", "Coulomb friction torque"),
                ],
            },

            Formula::AlphaOpt => FormulaDefinition {
                formula: self,
                name: self.name(),
                description: "Optimal pitch angle for efficiency",
                display_expression: r"\alpha_{opt} = \frac{-b_{Q2}b_{F0} + \sqrt{(b_{Q2}b_{F0})^2 - b_{Q2}b_{F1}(-b_{F1}b_{Q0} + b_{Q1}b_{F0})}}{b_{Q2}b_{F1}}",
                formula_plain: "alpha_opt = (-bQ2*bF0 + sqrt((bQ2*bF0)^2 - bQ2*bF1*(-bF1*bQ0 + bQ1*bF0))) / (bQ2*bF1)",
                variables: vec![
                    Variable::new("bQ2", "b_{Q2}", "Quadratic torque coefficient"),
                    Variable::new("bF0", "b_{F0}", "Constant thrust coefficient"),
                    Variable::new("bF1", "b_{F1}", "Linear thrust coefficient"),
                    Variable::new("bQ1", "b_{Q1}", "Linear torque coefficient"),
                    Variable::new("bQ0", "b_{Q0}", "Constant torque coefficient"),
                ],
            },
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Formula Definition
// ============================================================================

/// Complete metadata for one catalog formula.
///
/// Immutable; built once with the global catalog and never modified.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaDefinition {
    /// Which evaluation rule applies
    pub formula: Formula,
    /// Catalog name (e.g., "C_L")
    pub name: &'static str,
    /// Brief description of what this formula calculates
    pub description: &'static str,
    /// The formula in TeX notation for rendering
    pub display_expression: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Input variables, in input-field order
    pub variables: Vec<Variable>,
}

impl FormulaDefinition {
    /// Variable names in declaration order
    pub fn variable_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variables.iter().map(|v| v.name)
    }

    /// Position of a declared variable
    pub fn variable_index(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|v| v.name == name)
    }

    /// Whether the formula declares this variable
    pub fn has_variable(&self, name: &str) -> bool {
        self.variable_index(name).is_some()
    }
}

// ============================================================================
// Catalog
// ============================================================================

static CATALOG: Lazy<FormulaCatalog> = Lazy::new(|| FormulaCatalog {
    definitions: ALL_FORMULAS.iter().map(|f| f.build_definition()).collect(),
});

/// Ordered, read-only collection of every formula definition.
#[derive(Debug)]
pub struct FormulaCatalog {
    definitions: Vec<FormulaDefinition>,
}

impl FormulaCatalog {
    /// The process-wide catalog
    pub fn global() -> &'static FormulaCatalog {
        &CATALOG
    }

    /// Definitions in display order
    pub fn iter(&self) -> std::slice::Iter<'_, FormulaDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Look up a definition by catalog name
    pub fn get(&self, name: &str) -> Option<&FormulaDefinition> {
        Formula::from_name(name).map(|f| self.definition(f))
    }

    /// Definition for a formula
    pub fn definition(&self, formula: Formula) -> &FormulaDefinition {
        &self.definitions[formula.index()]
    }
}

impl<'a> IntoIterator for &'a FormulaCatalog {
    type Item = &'a FormulaDefinition;
    type IntoIter = std::slice::Iter<'a, FormulaDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
