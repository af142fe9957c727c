// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Safeguarded Root Finding** - *Bracket-Preserving Bisection/Secant Search*
//!
//! Searches for a zero of `f(x)` between two points `b` and `c` whose
//! function values ideally differ in sign. Each iterate is chosen by the
//! secant rule when that makes satisfactory progress, falling back to
//! bisection otherwise, so convergence is superlinear near simple roots yet
//! never slower than halving the bracket. The bracket `[b, c]` is maintained
//! throughout; on return `b` is the best approximation to the root and the
//! interval satisfies
//!
//! ```text
//! |b - c| <= 2 * (rel_tol * |b| + abs_tol)
//! ```
//!
//! The quantile kernels drive this against `p - cdf(x)`; the routine itself
//! is generic over any `FnMut(f64) -> f64` objective.

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootStatus {
    /// `b` is within the requested tolerance of a sign change.
    Converged,
    /// `f(b)` evaluated to exactly zero.
    ExactRoot,
    /// The interval shrank below tolerance but `|f(b)|` grew beyond the
    /// magnitudes seen at the initial bracket; `b` may be near a pole of
    /// `f` rather than a root.
    PossiblySpurious,
    /// No sign change was found between `b` and `c`; the reported point
    /// merely minimises `|f|` along the search.
    NoSignChange,
    /// The evaluation budget was exhausted before the interval converged.
    EvaluationLimit,
}

/// Result of a root search: the refined abscissa, the number of objective
/// evaluations spent, and how the search ended.
#[derive(Debug, Clone, Copy)]
pub struct RootFind {
    pub root: f64,
    pub evaluations: usize,
    pub status: RootStatus,
}

/// Hard cap on objective evaluations.
const MAX_EVALUATIONS: usize = 500;

#[inline(always)]
fn sign(a: f64, b: f64) -> f64 {
    if b < 0.0 { -a.abs() } else { a.abs() }
}

#[inline(always)]
fn same_sign(a: f64, b: f64) -> bool {
    (a >= 0.0) == (b >= 0.0)
}

/// Finds a zero of `f` in the interval `[b, c]`, using `guess` as the first
/// iterate when it lies strictly inside the interval.
///
/// `rel_tol` and `abs_tol` form the mixed stopping criterion
/// `|b - c|/2 <= rel_tol * |b| + abs_tol`; `rel_tol` is floored at twice the
/// unit roundoff and `abs_tol` at zero, so passing zeros requests maximum
/// achievable precision.
pub fn fzero<F: FnMut(f64) -> f64>(
    mut f: F,
    b: f64,
    c: f64,
    guess: f64,
    rel_tol: f64,
    abs_tol: f64,
) -> RootFind {
    let er = 2.0 * f64::EPSILON;
    let rw = rel_tol.max(er);
    let aw = abs_tol.max(0.0);

    let mut b = b;
    let mut c = c;

    // First iterate: the caller's guess if interior, else c.
    let z = if guess <= b.min(c) || guess >= b.max(c) {
        c
    } else {
        guess
    };

    let fz = f(z);
    let mut fc = fz;
    let mut fb = f(b);
    let mut kount = 2_usize;

    if !same_sign(fz, fb) {
        c = z;
    } else if z != c {
        fc = f(c);
        kount = 3;
        if !same_sign(fz, fc) {
            b = z;
            fb = fz;
        }
    }

    let mut a = c;
    let mut fa = fc;
    let mut acbs = (b - c).abs();
    let fx = fb.abs().max(fc.abs());
    let mut ic = 0_usize;

    loop {
        // Keep the better endpoint in b.
        if fc.abs() < fb.abs() {
            a = b;
            fa = fb;
            b = c;
            fb = fc;
            c = a;
            fc = fa;
        }

        let cmb = 0.5 * (c - b);
        let acmb = cmb.abs();
        let tol = rw * b.abs() + aw;

        if acmb <= tol {
            let status = if same_sign(fb, fc) {
                RootStatus::NoSignChange
            } else if fb.abs() > fx {
                RootStatus::PossiblySpurious
            } else {
                RootStatus::Converged
            };
            return RootFind {
                root: b,
                evaluations: kount,
                status,
            };
        }
        if fb == 0.0 {
            return RootFind {
                root: b,
                evaluations: kount,
                status: RootStatus::ExactRoot,
            };
        }
        if kount >= MAX_EVALUATIONS {
            return RootFind {
                root: b,
                evaluations: kount,
                status: RootStatus::EvaluationLimit,
            };
        }

        // Secant step expressed as b + p/q with p >= 0 to dodge overflow.
        let mut p = (b - a) * fb;
        let mut q = fa - fb;
        if p < 0.0 {
            p = -p;
            q = -q;
        }

        a = b;
        fa = fb;
        ic += 1;

        // Force bisection if four iterations went by without the bracket
        // shrinking to an eighth of its recorded width.
        let mut bisect = false;
        if ic >= 4 {
            if 8.0 * acmb >= acbs {
                bisect = true;
            } else {
                ic = 0;
                acbs = acmb;
            }
        }

        if bisect {
            b += cmb;
        } else if p <= q.abs() * tol {
            // Secant change smaller than tolerance: nudge by tolerance.
            b += sign(tol, cmb);
        } else if p < cmb * q {
            // Secant lands between b and the midpoint: accept it.
            b += p / q;
        } else {
            b += cmb;
        }

        fb = f(b);
        kount += 1;

        // Keep the endpoints straddling the root.
        if same_sign(fb, fc) {
            c = a;
            fc = fa;
        }
    }
}
