// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants Module** - *High-Precision Constants for Statistical Computing*
//!
//! Mathematical constants for the distribution kernels, hard-coded at full
//! double precision. These support the normal-distribution collaborators and
//! the noncentral-t recurrence seeds.

// ******** Constants ***********************************************/
/// The square root of 2: √2 ≈ 1.414213562373095.
///
/// Used in the error-function arguments of the normal CDF and in the
/// Owen's T argument reduction.
pub(crate) const SQRT_2: f64 = 1.4142135623730951_f64;

/// The square root of 2π: √(2π) ≈ 2.506628274631000.
///
/// Normalisation constant of the normal density; scales the even-degrees
/// noncentral-t series.
pub(crate) const SQRT_2PI: f64 = 2.5066282746310002_f64;

/// Reciprocal of √(2π) ≈ 0.398942280401433.
///
/// The standard normal density at zero; seeds the noncentral-t recurrence
/// terms without a division on the hot path.
pub(crate) const INV_SQRT_2PI: f64 = 3.9894228040143268e-1_f64;

/// Acklam's inverse normal CDF approximation coefficients (numerator polynomial).
///
/// High-precision rational function coefficients for computing the inverse standard
/// normal cumulative distribution function Φ⁻¹(p) using Peter John Acklam's
/// minimax rational approximation. Provides near-machine precision accuracy
/// across the central probability region 0.02425 < p < 0.97575.
pub(crate) const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];

/// Acklam's inverse normal CDF approximation coefficients (denominator polynomial).
///
/// Used in conjunction with the A array coefficients to form a complete
/// minimax rational approximation for normal quantile computation.
pub(crate) const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];

/// Acklam's inverse normal CDF approximation coefficients (tail region numerator).
///
/// Specialised rational function coefficients for inverse normal quantiles
/// in the extreme tail regions where p < 0.02425 or p > 0.97575.
pub(crate) const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];

/// Acklam's inverse normal CDF approximation coefficients (tail region denominator).
pub(crate) const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Lower probability threshold for Acklam's inverse normal CDF approximation.
///
/// Breakpoint separating the central rational approximation from the tail
/// approximation; corresponds to roughly ±2σ.
pub(crate) const P_LOW: f64 = 0.02425; // lower & upper break-points (≈ 2 σ) ; P_HIGH: f64 = 1.0 - P_LOW;
