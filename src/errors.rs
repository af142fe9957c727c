// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types for kernel operations with structured error reporting.
//! Fatal conditions always surface through these variants; they are never
//! folded into the numeric output range. Non-fatal precision diagnostics
//! travel separately as status enums bundled with a usable value (see
//! `kernels::scientific::quadrature` and `kernels::scientific::owen_t`).

use core::fmt;
use std::error::Error;

/// Error type for all kernel operations.
///
/// Each variant includes a contextual message string providing specific details
/// about the error condition, enabling precise debugging and error reporting.
#[derive(Debug, Clone)]
pub enum KernelError {
    /// Invalid arguments provided to a kernel function, e.g. degrees of
    /// freedom below one or a probability outside the unit interval.
    InvalidArguments(String),

    /// Array length mismatch between operands.
    LengthMismatch(String),

    /// A quantile search could not establish or hold a bracket around the
    /// target probability within its iteration budget.
    BracketingFailed(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::BracketingFailed(msg) => write!(f, "Bracketing failed: {}", msg),
        }
    }
}

impl Error for KernelError {}
