// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Global configuration constants controlling kernel behaviour and accuracy
//! thresholds. These values are compile-time constants chosen for IEEE 754
//! double precision.

/// Pseudorelative tolerance handed to the quadrature engine by the
/// noncentral-t CDF when it evaluates Owen's T.
///
/// Ten times the `1e-15` precision floor: tight enough that the integral
/// contributes no visible error to the CDF, loose enough to stay clear of
/// the unit-roundoff regime where the engine's own round-off accounting
/// dominates.
pub const OWEN_T_TOL: f64 = 1.0e-14;

/// Maximum number of bracket-expansion steps the noncentral-t quantile
/// performs on either side of its initial estimate.
///
/// Each step moves by at least `sqrt(delta^2/(2*dof) + 1) >= 1`, so 200
/// steps cover any quantile reachable in double precision. Exhausting the
/// budget reports `KernelError::BracketingFailed` rather than looping on a
/// CDF that is no longer strictly monotone at working precision.
pub const MAX_BRACKET_STEPS: usize = 200;

/// Relative convergence tolerance for the quantile root refinement.
pub const QUANTILE_REL_TOL: f64 = 1.0e-6;

/// Absolute convergence tolerance for the quantile root refinement.
pub const QUANTILE_ABS_TOL: f64 = 1.0e-5;
