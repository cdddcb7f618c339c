//! # Propeller Model Equations
//!
//! Closed-form relations of the variable pitch propeller model. Each function
//! is a direct transcription of one catalog rule and takes its arguments in
//! the same order the catalog lists the variables.
//!
//! ## Notation
//!
//! - `alpha` = Blade pitch angle
//! - `omega` = Rotational speed of the propeller
//! - `a_L*`, `a_D*` = Lift and drag polynomial coefficients
//! - `b_F*`, `b_Q*` = Thrust and torque model coefficients
//!
//! All arithmetic is plain IEEE-754 `f64`. Nothing here checks for NaN or
//! infinities; they propagate like any other value.

// =============================================================================
// AERODYNAMIC COEFFICIENTS
// =============================================================================

/// Lift coefficient as a linear function of pitch angle
///
/// # Formula
/// C_L = a_L1·α + a_L0
///
/// # Example
/// ```rust
/// use prop_core::formulas::propeller::lift_coefficient;
///
/// assert_eq!(lift_coefficient(2.0, 3.0, 1.0), 7.0);
/// ```
#[inline]
pub fn lift_coefficient(a_l1: f64, alpha: f64, a_l0: f64) -> f64 {
    a_l1 * alpha + a_l0
}

/// Drag coefficient as a quadratic in pitch angle
///
/// # Formula
/// C_D = a_D2·α² + a_D1·α + a_D0
#[inline]
pub fn drag_coefficient(a_d2: f64, alpha: f64, a_d1: f64, a_d0: f64) -> f64 {
    a_d2 * alpha.powi(2) + a_d1 * alpha + a_d0
}

// =============================================================================
// FORCES AND TORQUES
// =============================================================================

/// Thrust force generated by the propeller
///
/// # Formula
/// F = (b_F1·α + b_F0)·ω²
///
/// # Arguments
/// * `b_f1` - Linear thrust coefficient
/// * `alpha` - Pitch angle
/// * `b_f0` - Constant thrust coefficient
/// * `omega` - Rotational speed
///
/// # Example
/// ```rust
/// use prop_core::formulas::propeller::thrust;
///
/// // (2·1 + 3)·2² = 20
/// assert_eq!(thrust(2.0, 1.0, 3.0, 2.0), 20.0);
/// ```
#[inline]
pub fn thrust(b_f1: f64, alpha: f64, b_f0: f64, omega: f64) -> f64 {
    (b_f1 * alpha + b_f0) * omega.powi(2)
}

/// Counter-torque generated by the propeller
///
/// # Formula
/// Q = (b_Q2·α² + b_Q1·α + b_Q0)·ω²
#[inline]
pub fn counter_torque(b_q2: f64, alpha: f64, b_q1: f64, b_q0: f64, omega: f64) -> f64 {
    (b_q2 * alpha.powi(2) + b_q1 * alpha + b_q0) * omega.powi(2)
}

// =============================================================================
// POWER
// =============================================================================

/// Power delivered to the motor-propeller system
///
/// Motor torque times speed, plus viscous loss, plus the inertial and
/// Coulomb friction torques times speed.
///
/// # Formula
/// P = T·ω + B_ω·ω² + (J·ω·dω/dt + T_C)·ω
///
/// # Arguments
/// * `t` - Motor torque
/// * `omega` - Rotational speed
/// * `b_omega` - Viscosity coefficient of the motor
/// * `j` - Moment of inertia of the motor-propeller system
/// * `d_omega_dt` - Angular acceleration
/// * `t_c` - Coulomb friction torque
#[inline]
pub fn input_power(t: f64, omega: f64, b_omega: f64, j: f64, d_omega_dt: f64, t_c: f64) -> f64 {
    t * omega + b_omega * omega.powi(2) + (j * omega * d_omega_dt + t_c) * omega
}

// =============================================================================
// OPTIMAL PITCH ANGLE
// Positive root of the quadratic obtained by maximising F/Q over α
// =============================================================================

/// Quantity under the square root of the optimal pitch angle solution
///
/// # Formula
/// Δ = (b_Q2·b_F0)² − b_Q2·b_F1·(−b_F1·b_Q0 + b_Q1·b_F0)
#[inline]
pub fn optimal_pitch_discriminant(b_q2: f64, b_f0: f64, b_f1: f64, b_q1: f64, b_q0: f64) -> f64 {
    (b_q2 * b_f0).powi(2) - b_q2 * b_f1 * (-b_f1 * b_q0 + b_q1 * b_f0)
}

/// Optimal pitch angle for efficiency
///
/// # Formula
/// α_opt = (−b_Q2·b_F0 + √Δ) / (b_Q2·b_F1)
///
/// # Returns
/// `None` when Δ < 0 (no real solution). A NaN discriminant also yields
/// `None`, since it does not compare `>= 0`. A zero divisor is not
/// special-cased: the result is then NaN or infinite.
///
/// # Example
/// ```rust
/// use prop_core::formulas::propeller::optimal_pitch_angle;
///
/// assert_eq!(optimal_pitch_angle(1.0, 1.0, 1.0, 1.0, 1.0), Some(0.0));
/// assert_eq!(optimal_pitch_angle(1.0, 0.0, 1.0, 5.0, -5.0), None);
/// ```
pub fn optimal_pitch_angle(b_q2: f64, b_f0: f64, b_f1: f64, b_q1: f64, b_q0: f64) -> Option<f64> {
    let discriminant = optimal_pitch_discriminant(b_q2, b_f0, b_f1, b_q1, b_q0);
    if discriminant >= 0.0 {
        Some((-b_q2 * b_f0 + discriminant.sqrt()) / (b_q2 * b_f1))
    } else {
        None
    }
}
