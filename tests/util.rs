#![allow(unused)]

// Shared tolerance assertions for the integration suites. Tolerances are
// relative for |expected| > 1 and absolute below that, so reference values
// near zero do not demand impossible relative accuracy.

fn matches_special(actual: f64, expected: f64) -> Option<bool> {
    if expected.is_nan() {
        return Some(actual.is_nan());
    }
    if expected.is_infinite() {
        return Some(actual == expected);
    }
    None
}

pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    if let Some(ok) = matches_special(actual, expected) {
        assert!(ok, "expected {expected}, got {actual}");
        return;
    }
    let bound = tol * 1.0_f64.max(expected.abs());
    assert!(
        (actual - expected).abs() <= bound,
        "mismatch: got {actual}, expect {expected} (tol={tol})"
    );
}

pub fn assert_slice_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "len mismatch");
    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        if let Some(ok) = matches_special(a, e) {
            assert!(ok, "idx {i}: expected {e}, got {a}");
            continue;
        }
        let bound = tol * 1.0_f64.max(e.abs());
        assert!(
            (a - e).abs() <= bound,
            "idx {i}: got {a}, expect {e} (tol={tol})"
        );
    }
}
