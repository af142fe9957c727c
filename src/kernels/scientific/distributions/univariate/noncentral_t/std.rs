// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Noncentral t-Distribution Scalar Implementations**
//!
//! Scalar cores and array kernels for the noncentral Student-t CDF and
//! quantile. The CDF evaluates finite sums whose first terms contain the
//! cumulative normal and/or Owen's T integral, split on the parity of the
//! integer part of the degrees of freedom; the quantile inverts the CDF by
//! expanding a bracket from a normal-approximation estimate and refining it
//! with the safeguarded bisection/secant search.

use minarrow::{Bitmask, FloatArray, Vec64};

use crate::config::{MAX_BRACKET_STEPS, OWEN_T_TOL, QUANTILE_ABS_TOL, QUANTILE_REL_TOL};
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::constants::{INV_SQRT_2PI, SQRT_2PI};
use crate::kernels::scientific::distributions::shared::scalar::{
    normal_cdf_scalar, normal_quantile_scalar,
};
use crate::kernels::scientific::distributions::univariate::common::std::{
    dense_univariate_kernel_f64_std, masked_univariate_kernel_f64_std,
};
use crate::kernels::scientific::owen_t::owen_t;
use crate::kernels::scientific::roots::{RootStatus, fzero};
use crate::utils::has_nulls;

#[inline(always)]
fn invalid_dof(dof: f64) -> bool {
    dof < 1.0 || !dof.is_finite()
}

/// CDF core for `P(T <= x)` where `T = U / sqrt(V/dof)`, `U ~ N(delta, 1)`,
/// `V ~ ChiSquare(dof)`.
///
/// Assumes `dof >= 1` was validated by the caller. The recurrence advances
/// two positions per loop pass; only every second term contributes for a
/// given parity, and `ak` must be refreshed from the pre-increment `fk`
/// before the state shift.
pub(crate) fn nct_cdf_unchecked(x: f64, delta: f64, dof: f64) -> f64 {
    // Past ~1e7 degrees of freedom the recurrence length is pure cost; the
    // distribution is Normal(delta, 1) to below evaluation accuracy.
    if dof > 1e7 {
        return normal_cdf_scalar(x - delta);
    }

    let a = x / dof.sqrt();
    let b = dof / (dof + x * x);
    let srb = b.sqrt();
    let ndof = dof as i64;

    if ndof % 2 == 1 {
        // odd degrees of freedom
        let x1 = delta * srb;
        let t1 = normal_cdf_scalar(-x1);
        let t2 = owen_t(x1, a, OWEN_T_TOL);

        if ndof == 1 {
            return t1 + t2 + t2;
        }

        let asrb = a * srb;
        let x2 = x1 * a;
        let x3 = delta * a;

        let g2 = normal_cdf_scalar(x2);
        let mut gprime = INV_SQRT_2PI * (-x1 * x1 / 2.0).exp();
        let cm0 = asrb * gprime * g2;
        gprime = INV_SQRT_2PI * (-delta * delta / 2.0).exp();
        let mut cm1 = b * (x3 * cm0 + (a / SQRT_2PI) * gprime);
        let mut cm2 = 0.5 * b * (x3 * cm1 + cm0);

        let n = (ndof - 3) / 2;
        if n < 1 {
            return t1 + t2 + t2 + cm1 + cm1;
        }
        if n == 1 {
            let third = b / 3.0;
            let term = cm1 + (third + third) * (x3 * cm2 + cm1);
            return t1 + t2 + t2 + term + term;
        }

        let mut fk = 3.0_f64;
        let mut ak = 1.0_f64;
        let mut ss = cm1;
        for _ in 0..n {
            let mut cmk = ((fk - 1.0) / fk) * b * (ak * x3 * cm2 + cm1);
            ss += cmk;
            fk += 1.0;
            ak = 1.0 / ((fk - 2.0) * ak);

            // second advance: the even-indexed term is not summed
            cm1 = cm2;
            cm2 = cmk;
            cmk = ((fk - 1.0) / fk) * b * (ak * x3 * cm2 + cm1);
            fk += 1.0;
            ak = 1.0 / ((fk - 2.0) * ak);

            cm1 = cm2;
            cm2 = cmk;
        }
        t1 + t2 + t2 + ss + ss
    } else {
        // even degrees of freedom
        let t1 = normal_cdf_scalar(-delta);

        let x1 = a * srb;
        let x2 = delta * x1;
        let x3 = delta * a;

        let g2 = normal_cdf_scalar(x2);
        let arg = -delta * delta * srb * srb / 2.0;
        let mut gprime = INV_SQRT_2PI * arg.exp();
        let cm0 = x1 * gprime * g2;

        let n = ndof / 2;
        if n == 1 {
            return t1 + SQRT_2PI * cm0;
        }

        gprime = INV_SQRT_2PI * (-delta * delta / 2.0).exp();
        let mut cm1 = b * (x3 * cm0 + (a / SQRT_2PI) * gprime);
        let mut cm2 = (b / 2.0) * (x3 * cm1 + cm0);

        if n == 2 {
            return t1 + SQRT_2PI * (cm0 + cm2);
        }

        let mut fk = 3.0_f64;
        let mut ak = 1.0_f64;
        let mut ss = cm0 + cm2;
        for _ in 0..(n - 2) {
            // first advance: the odd-indexed term is not summed
            let mut cmk = ((fk - 1.0) / fk) * b * (ak * x3 * cm2 + cm1);
            fk += 1.0;
            ak = 1.0 / ((fk - 2.0) * ak);
            cm1 = cm2;
            cm2 = cmk;

            cmk = ((fk - 1.0) / fk) * b * (ak * x3 * cm2 + cm1);
            ss += cmk;
            fk += 1.0;
            ak = 1.0 / ((fk - 2.0) * ak);
            cm1 = cm2;
            cm2 = cmk;
        }
        t1 + SQRT_2PI * ss
    }
}

/// Quantile core: finds `x` with `cdf(x) = p` for `0 < p < 1`.
///
/// Assumes `dof` was validated. Expands a bracket outward from the normal
/// approximation in steps of `sqrt(delta^2/(2 dof) + 1)`, then refines with
/// the bracket-preserving bisection/secant search. Relies on the CDF being
/// non-decreasing in `x`; if that fails at working precision the capped
/// expansion reports `BracketingFailed` instead of looping.
pub(crate) fn nct_quantile_core(p: f64, delta: f64, dof: f64) -> Result<f64, KernelError> {
    let z = normal_quantile_scalar(p, 0.0, 1.0);
    let add = (delta * delta / (2.0 * dof) + 1.0).sqrt();
    let mut xx = delta + z * add;
    let p0 = nct_cdf_unchecked(xx, delta, dof);

    let (b_low, c_high, p_low, p_high);
    if p0 < p {
        p_low = p0;
        b_low = xx;
        let mut crossed = None;
        for _ in 0..MAX_BRACKET_STEPS {
            xx += add;
            let pn = nct_cdf_unchecked(xx, delta, dof);
            if pn >= p {
                crossed = Some(pn);
                break;
            }
        }
        p_high = match crossed {
            Some(pn) => pn,
            None => {
                return Err(KernelError::BracketingFailed(format!(
                    "noncentral_t_quantile: no upper bracket for p={} within {} steps",
                    p, MAX_BRACKET_STEPS
                )));
            }
        };
        c_high = xx;
    } else {
        p_high = p0;
        c_high = xx;
        let mut crossed = None;
        for _ in 0..MAX_BRACKET_STEPS {
            xx -= add;
            let pn = nct_cdf_unchecked(xx, delta, dof);
            if pn <= p {
                crossed = Some(pn);
                break;
            }
        }
        p_low = match crossed {
            Some(pn) => pn,
            None => {
                return Err(KernelError::BracketingFailed(format!(
                    "noncentral_t_quantile: no lower bracket for p={} within {} steps",
                    p, MAX_BRACKET_STEPS
                )));
            }
        };
        b_low = xx;
    }

    // Linear interpolation within the bracket seeds the refinement.
    let guess = if p_high > p_low {
        b_low + ((p - p_low) / (p_high - p_low)) * (c_high - b_low)
    } else {
        0.5 * (b_low + c_high)
    };

    let rf = fzero(
        |t| p - nct_cdf_unchecked(t, delta, dof),
        b_low,
        c_high,
        guess,
        QUANTILE_REL_TOL,
        QUANTILE_ABS_TOL,
    );

    match rf.status {
        RootStatus::Converged | RootStatus::ExactRoot | RootStatus::PossiblySpurious => Ok(rf.root),
        RootStatus::NoSignChange => Err(KernelError::BracketingFailed(format!(
            "noncentral_t_quantile: sign change lost refining p={}",
            p
        ))),
        RootStatus::EvaluationLimit => Err(KernelError::BracketingFailed(format!(
            "noncentral_t_quantile: refinement budget exhausted for p={}",
            p
        ))),
    }
}

/// Noncentral-t CDF, scalar form.
///
/// Returns error if dof < 1.
#[inline(always)]
pub fn noncentral_t_cdf_scalar(x: f64, delta: f64, dof: f64) -> Result<f64, KernelError> {
    if invalid_dof(dof) {
        return Err(KernelError::InvalidArguments(
            "noncentral_t_cdf: invalid dof".into(),
        ));
    }
    Ok(nct_cdf_unchecked(x, delta, dof))
}

/// Noncentral-t quantile, scalar form.
///
/// `p == 0` and `p == 1` return the exact distribution limits; `p` outside
/// `[0, 1]` or NaN is an error, as is a bracketing failure in the search.
pub fn noncentral_t_quantile_scalar(p: f64, delta: f64, dof: f64) -> Result<f64, KernelError> {
    if invalid_dof(dof) {
        return Err(KernelError::InvalidArguments(
            "noncentral_t_quantile: invalid dof".into(),
        ));
    }
    if !(p >= 0.0 && p <= 1.0) {
        return Err(KernelError::InvalidArguments(
            "noncentral_t_quantile: p outside [0, 1]".into(),
        ));
    }
    if p == 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    if p == 1.0 {
        return Ok(f64::INFINITY);
    }
    nct_quantile_core(p, delta, dof)
}

/// Noncentral-t CDF, bulk array form.
#[inline(always)]
pub fn noncentral_t_cdf_std(
    x: &[f64],
    delta: f64,
    dof: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    if invalid_dof(dof) {
        return Err(KernelError::InvalidArguments(
            "noncentral_t_cdf: invalid dof".into(),
        ));
    }
    if x.is_empty() {
        return Ok(FloatArray::from_slice(&[]));
    }

    let scalar_body = move |xi: f64| nct_cdf_unchecked(xi, delta, dof);

    // Dense fast path (no nulls)
    if !has_nulls(null_count, null_mask) {
        let has_mask = null_mask.is_some();
        let (data, mask) = dense_univariate_kernel_f64_std(x, has_mask, scalar_body);
        return Ok(FloatArray {
            data: data.into(),
            null_mask: mask,
        });
    }

    // Null-aware masked path
    let mask_ref = null_mask.expect("noncentral_t_cdf: null_count > 0 requires null_mask");
    let (data, out_mask) = masked_univariate_kernel_f64_std(x, mask_ref, scalar_body);

    Ok(FloatArray {
        data: data.into(),
        null_mask: Some(out_mask),
    })
}

/// Noncentral-t quantile, bulk array form.
///
/// Per-lane probability edges follow the vectorised quantile conventions:
/// `0` maps to `-inf`, `1` to `inf`, out-of-range or non-finite lanes to
/// `NaN`. A bracketing failure anywhere aborts the call with a typed error
/// rather than planting a silent sentinel in the output.
#[inline(always)]
pub fn noncentral_t_quantile_std(
    p: &[f64],
    delta: f64,
    dof: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    if invalid_dof(dof) {
        return Err(KernelError::InvalidArguments(
            "noncentral_t_quantile: invalid dof".into(),
        ));
    }
    if p.is_empty() {
        return Ok(FloatArray::from_slice(&[]));
    }

    let len = p.len();
    let mut out = Vec64::with_capacity(len);

    let compute_quantile = |prob: f64| -> Result<f64, KernelError> {
        if !(prob >= 0.0 && prob <= 1.0) {
            Ok(f64::NAN)
        } else if prob == 0.0 {
            Ok(f64::NEG_INFINITY)
        } else if prob == 1.0 {
            Ok(f64::INFINITY)
        } else {
            nct_quantile_core(prob, delta, dof)
        }
    };

    if !has_nulls(null_count, null_mask) {
        for &prob in p {
            out.push(compute_quantile(prob)?);
        }
        Ok(FloatArray::from_vec64(out, null_mask.cloned()))
    } else {
        let mask = null_mask.expect("noncentral_t_quantile: null path requires a mask");
        for idx in 0..len {
            if !unsafe { mask.get_unchecked(idx) } {
                out.push(f64::NAN);
            } else {
                let prob = unsafe { *p.get_unchecked(idx) };
                out.push(compute_quantile(prob)?);
            }
        }
        Ok(FloatArray {
            data: out.into(),
            null_mask: Some(mask.clone()),
        })
    }
}
