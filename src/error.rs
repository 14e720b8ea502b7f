//! Error conditions for the solvers and their configuration.
//!
//! * [`RootError`] is what a solver call returns on failure.
//! * [`ArithmeticFault`] is an undefined numeric step inside a solver.
//! * [`ConfigError`] is an invalid tolerance or iteration cap.

use thiserror::Error;

/// Root finding error conditions.
///
/// Only [`RootError::ConvergenceFailure`] is recoverable, and only inside the
/// hybrid solver where it triggers the bisection fallback.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RootError {
    /// Bracket endpoints do not straddle a sign change.
    #[error("no sign change on [{a}, {b}]: f(a)={f_a}, f(b)={f_b}")]
    InvalidBracket { a: f64, b: f64, f_a: f64, f_b: f64 },

    /// Iteration cap exhausted with |f(x)| still above tolerance.
    #[error("max iteration reached")]
    ConvergenceFailure,

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticFault),
}

impl RootError {
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, RootError::ConvergenceFailure)
    }

    pub fn is_arithmetic_fault(&self) -> bool {
        matches!(self, RootError::Arithmetic(_))
    }
}

/// Undefined numeric operations hit while iterating.
///
/// To help with diagnostics these carry the `x` position where the fault
/// occurred.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ArithmeticFault {
    /// Derivative went to zero, so the Newton step is undefined.
    #[error("derivative is zero at x={x}")]
    ZeroDerivative { x: f64 },

    /// The step from `x` produced a NaN or infinite iterate.
    #[error("iterated to non-finite value from x={x}")]
    NonFiniteIterate { x: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },
}

/// Invalid solver parameters.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got {got}")]
    InvalidMaxIter { got: usize },
}
