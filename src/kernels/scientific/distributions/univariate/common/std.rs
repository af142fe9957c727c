// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, Vec64};

/// Dense kernel helper: applies `scalar_body` to every lane.
///
/// ### Null handling
/// Reaching the dense path with `has_mask == true` means a mask was supplied
/// together with a null count of `0` (the caller knew the window held no
/// nulls); an all-valid mask of the right length is emitted so the output
/// stays self-describing. `NaN` / `inf` lanes produced by `scalar_body` are
/// kept verbatim rather than nulled: they carry signal (domain edges,
/// saturated tails) and masking them would cost cycles on the hot path.
#[inline(always)]
pub fn dense_univariate_kernel_f64_std<FScalar>(
    x: &[f64],
    has_mask: bool,
    scalar_body: FScalar,
) -> (Vec64<f64>, Option<Bitmask>)
where
    FScalar: Fn(f64) -> f64,
{
    let mut out = Vec64::with_capacity(x.len());
    for &xi in x {
        out.push(scalar_body(xi));
    }
    let out_mask = has_mask.then(|| Bitmask::new_set_all(x.len(), true));
    (out, out_mask)
}

/// Null-aware kernel helper: null lanes yield `NaN` plus an unset validity
/// bit; valid lanes run `scalar_body`.
///
/// The same keep-`NaN`/`inf`-verbatim policy as the dense path applies to
/// values the kernel itself produces on valid lanes.
#[inline(always)]
pub fn masked_univariate_kernel_f64_std<FScalar>(
    x: &[f64],
    mask: &Bitmask,
    scalar_body: FScalar,
) -> (Vec64<f64>, Bitmask)
where
    FScalar: Fn(f64) -> f64,
{
    let len = x.len();
    let mut out = Vec64::with_capacity(len);
    let mut out_mask = mask.clone();

    for idx in 0..len {
        if !unsafe { mask.get_unchecked(idx) } {
            out.push(f64::NAN);
            unsafe { out_mask.set_unchecked(idx, false) };
        } else {
            let xi = unsafe { *x.get_unchecked(idx) };
            out.push(scalar_body(xi));
            unsafe { out_mask.set_unchecked(idx, true) };
        }
    }

    (out, out_mask)
}
