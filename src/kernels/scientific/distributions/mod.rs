// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Noncentral-t Probability Computing*
//!
//! Distribution kernels built on the crate's numerical core: the adaptive
//! Gauss-Legendre integrator, Owen's T function, and the safeguarded root
//! finder. The noncentral Student-t CDF is evaluated through parity-split
//! finite recurrences whose leading terms contain the cumulative normal and
//! Owen's T integral; the quantile inverts that CDF by bracket expansion and
//! bisection/secant refinement.
//!
//! ## Core Statistical Functions
//! Each distribution provides:
//! - **Cumulative distribution functions**: scalar cores plus bulk array
//!   kernels with Arrow-compatible null handling
//! - **Quantile functions**: inverse CDF via robust bracketing and refinement
//!
//! ## Arrow Integration and Null Handling
//! Array entry points take `&[f64]` with an optional validity bitmask and
//! return `minarrow::FloatArray<f64>`; null lanes produce `NaN` plus an
//! unset validity bit.
//!
//! ### Null Value Philosophy
//! Rather than assume, we choose to recognise inf and NaN as valid float values
//! (consistent with Apache Arrow semantics), leaving it to the user to subsequently
//! treat them as nulls if they wish, given that there are numerical scenarios where
//! they represent information gain. This approach avoids computational overhead in
//! the hot path whilst preserving mathematical correctness for edge cases.
//!
//! ## Numerical Precision and Stability
//! Accuracy is pinned by the test suites under `./tests`, measured against
//! SciPy reference values where available and against exact identities
//! elsewhere. Platform-specific differences may perturb the last digits, so
//! keep the stated tolerances in mind when evaluating fit for your use case.

/// # **Shared Distribution Utilities** - *Common Infrastructure for Distribution Computing*
///
/// Foundational constants and scalar collaborators shared across the
/// distribution kernels.
///
/// ## Modules
/// - **`constants`**: Mathematical constants and rational-approximation tables
/// - **`scalar`**: Normal CDF / PDF / quantile scalar functions
pub mod shared {
    pub mod constants;
    pub mod scalar;
}

/// # **Univariate Distributions** - *Single-Variable Probability Distributions*
///
/// ## Modules
/// - **Continuous**: noncentral_t
/// - **Common utilities**: shared dense/masked kernel patterns
pub mod univariate {
    // common kernel patterns
    pub mod common;

    // distributions
    pub mod noncentral_t;
}
