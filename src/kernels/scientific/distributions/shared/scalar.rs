// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Scalar Distribution Utilities Module** - *High-Precision Scalar Statistical Functions*
//!
//! Normal-distribution collaborators for the noncentral-t kernels: the
//! cumulative normal seeds every recurrence branch of the CDF, and the
//! normal quantile supplies the starting estimate for the quantile
//! inversion.

use crate::kernels::scientific::erf::{erfc, erfc_inv};

use super::constants::*;

/// Core inverse standard normal function for left tail probabilities.
///
/// Computes Φ⁻¹(p) for probabilities p ∈ (0, 0.5] using Acklam's rational
/// approximation, switching to the tail polynomial below `P_LOW`.
#[inline(always)]
pub fn inv_std_normal_core(p: f64) -> f64 {
    debug_assert!(p > 0.0 && p <= 0.5);

    if p > P_LOW {
        // central region
        let r = p - 0.5;
        let s = r * r;
        let num = (((((A[0] * s + A[1]) * s + A[2]) * s + A[3]) * s + A[4]) * s + A[5]) * r;
        let den = ((((B[0] * s + B[1]) * s + B[2]) * s + B[3]) * s + B[4]) * s + 1.0;
        num / den
    } else {
        // lower tail; num is already negative, so no extra sign flip
        let r = (-2.0 * p.ln()).sqrt();
        let num = ((((C[0] * r + C[1]) * r + C[2]) * r + C[3]) * r + C[4]) * r + C[5];
        let den = (((D[0] * r + D[1]) * r + D[2]) * r + D[3]) * r + 1.0;
        num / den
    }
}

/// Inverse standard normal CDF Φ⁻¹(p) (quantile function).
///
/// Symmetry-reduces to the left tail and evaluates
/// [`inv_std_normal_core`]. Domain p ∈ (0, 1); values outside return NaN.
#[inline(always)]
pub fn inv_std_normal(p: f64) -> f64 {
    if !(p > 0.0 && p < 1.0) {
        return f64::NAN;
    }
    if p <= 0.5 {
        inv_std_normal_core(p)
    } else {
        -inv_std_normal_core(1.0 - p)
    }
}

/// Standard normal cumulative distribution function Φ(z).
///
/// Evaluated as `0.5·erfc(∓z/√2)` split at zero, which keeps full relative
/// accuracy in both tails.
#[inline(always)]
pub fn normal_cdf_scalar(z: f64) -> f64 {
    if z < 0.0 {
        0.5 * erfc(-z / SQRT_2)
    } else {
        1.0 - 0.5 * erfc(z / SQRT_2)
    }
}

/// Standard normal probability density function φ(z).
#[inline(always)]
pub fn normal_pdf_scalar(z: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * z * z).exp()
}

/// Inverse CDF Φ⁻¹(q) for the normal distribution.
///
/// Accuracy:
/// - Centre and bulk (e.g. 0.025 ≤ q ≤ 0.975): |err| < 1e-14 (equivalent to scipy.stats.norm.ppf, confirmed by unit tests).
/// - Extreme tails (q ≲ 1e-10 or q ≳ 1–1e-10): |err| < 1e-12 compared to SciPy reference values.
/// - **Reciprocal symmetry:** |Φ⁻¹(q) + Φ⁻¹(1–q)| is only guaranteed < 1e-7 in the extreme tails,
///   due to inherent limitations of the underlying algorithms and double-precision arithmetic.
pub fn normal_quantile_scalar(q: f64, mean: f64, std: f64) -> f64 {
    if !q.is_finite() || !mean.is_finite() || !std.is_finite() || std <= 0.0 {
        return f64::NAN;
    }
    if q < 0.0 || q > 1.0 {
        return f64::NAN;
    }
    if q == 0.0 {
        return f64::NEG_INFINITY;
    }
    if q == 1.0 {
        return f64::INFINITY;
    }
    if q == 0.5 {
        return mean;
    }

    // symmetry reduction to the left tail
    let (p_left, sign) = if q < 0.5 { (q, -1.0) } else { (1.0 - q, 1.0) };

    // sub-epsilon tail: Φ⁻¹(p) = −√2·erfc⁻¹(2p) for p ≤ 0.5
    const EPS_DBL: f64 = 1.110_223_024_625_156_5e-16;
    if p_left < EPS_DBL {
        let z_tail = -SQRT_2 * erfc_inv(2.0 * p_left);
        return mean + std * sign * -z_tail;
    }

    // Acklam seed, then one Halley step:
    //   z <- z - u (1 + z u / 2)  with  u = (Φ(z) - p) / φ(z)
    let mut z = inv_std_normal_core(p_left);
    let f = normal_cdf_scalar(z) - p_left;
    let u = f / normal_pdf_scalar(z);
    z -= u * (1.0 + 0.5 * z * u);

    mean + std * sign * -z
}
