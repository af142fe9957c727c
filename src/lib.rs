// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

// Numerical kernels for noncentral Student-t probabilities: an adaptive
// 8-point Gauss-Legendre integrator, Owen's T function, the noncentral-t
// CDF, and its quantile via bracketed root finding.
//
// All kernels are scalar-core; the distribution entry points additionally
// expose Arrow-compatible array forms with null-mask propagation via the
// upstream `Minarrow` crate.

pub mod errors;

pub mod kernels {
    pub mod scientific {
        #[cfg(feature = "probability_distributions")]
        pub mod distributions;
        #[cfg(feature = "special_functions")]
        pub mod erf;
        #[cfg(feature = "special_functions")]
        pub mod owen_t;
        pub mod quadrature;
        pub mod roots;
    }
}

pub mod config;

pub mod utils;
