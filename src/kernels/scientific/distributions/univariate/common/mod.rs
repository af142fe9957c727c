// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Distribution Utilities** - *Shared Kernel and Testing Infrastructure*
//!
//! Dense/masked kernel helpers shared by the distribution entry points,
//! plus small test utilities used by the colocated unit tests.

/// Scalar implementations of common distribution utilities.
pub mod std;

use minarrow::{Bitmask, Buffer, FloatArray};

// Common test helpers

/// Test Helper: unwrap `FloatArray`, assert *no* null mask, return data.
pub fn dense_data(arr: FloatArray<f64>) -> Buffer<f64> {
    assert!(arr.null_mask.is_none(), "unexpected mask on dense path");
    arr.data
}

/// Create a mask of given length with exactly the lane `idx` null.
pub fn single_null_mask(len: usize, idx: usize) -> Bitmask {
    let mut m = Bitmask::new_set_all(len, true);
    unsafe { m.set_unchecked(idx, false) };
    m
}

/// Assert absolute difference ≤ `tol`.
pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "assert_close failed: {} vs {} (tol={})",
        a,
        b,
        tol
    );
}
