//! Scalar nonlinear equation solvers.
//!
//! Finds `x` with `|f(x)| <= eps` using Newton-Raphson, bisection, or a
//! hybrid that tries Newton-Raphson and falls back to bisection when it runs
//! out of iterations.
//!
//! # Examples
//! Using Newton-Raphson:
//!
//! ```
//! use nlsolve::config::SolverConfig;
//! use nlsolve::solver::newton_raphson;
//! use nlsolve::wrap::RealFnAndFirst;
//!
//! // function and its derivative
//! let in_f = |x: f64| x * x - 2.0;
//! let in_df = |x: f64| 2.0 * x;
//! let f = RealFnAndFirst::new(&in_f, &in_df);
//!
//! // eps=1e-5 and 20 iterations by default
//! let root = newton_raphson(&f, 1.0, &SolverConfig::default()).expect("root");
//! assert!((root - 2f64.sqrt()).abs() < 1e-5);
//! ```
//!
//! Using Bisection Method:
//!
//! ```
//! use nlsolve::bracket::Bracket;
//! use nlsolve::config::SolverConfig;
//! use nlsolve::solver::bisection;
//! use nlsolve::wrap::RealFn;
//!
//! // function... no derivatives needed!
//! let in_f = |x: f64| x * x - 2.0;
//! let f = RealFn::new(&in_f);
//!
//! let config = SolverConfig::new(1e-9, 60).expect("valid config");
//! let root = bisection(&f, &Bracket::new(0.0, 2.0), &config).expect("root");
//! assert!(in_f(root).abs() <= 1e-9);
//! ```

pub mod bracket;
pub mod config;
pub mod convergence;
pub mod error;
pub mod observe;
pub mod solver;
pub mod wrap;

pub use error::{ArithmeticFault, ConfigError, RootError};
