//! Root finding algorithms.
//!
//! Functions have to be wrapped before use.  See the `wrap` module for how to
//! do this.
//!
//! Every solver converges on the residual: the returned `x` always satisfies
//! `|f(x)| <= eps`.  Anything else comes back as a [`RootError`].
//!
//! # Examples
//! Newton-Raphson falling back to bisection:
//!
//! ```
//! use nlsolve::config::HybridConfig;
//! use nlsolve::solver::solve;
//! use nlsolve::wrap::RealFnAndFirst;
//!
//! // Newton-Raphson cycles 0 -> 1 -> 0 on this cubic
//! let in_f = |x: f64| x * x * x - 2.0 * x + 2.0;
//! let in_df = |x: f64| 3.0 * x * x - 2.0;
//! let f = RealFnAndFirst::new(&in_f, &in_df);
//!
//! // ...so the bracket [0, -2] is what finds the root
//! let root = solve(&f, 0.0, -2.0, &HybridConfig::default()).expect("root");
//! assert!(in_f(root).abs() <= 1e-5);
//! ```

mod driver;

use crate::bracket::{is_same_sign, Bracket};
use crate::config::{HybridConfig, SolverConfig};
use crate::error::{ArithmeticFault, RootError};
use crate::observe::{Event, Method, Observer, TracingObserver};
use crate::wrap::{RealDfEval, RealFnEval};

use self::driver::{eval_finite, iterative_root_find};

/// Root finding using Newton-Raphson.
///
/// The `start` indicates the initial guess.  For guesses sufficiently close to
/// the root this algorithm has quadratic convergence.
///
/// This algorithm requires the first derivative of f(x).
pub fn newton_raphson<F>(f: &F, start: f64, config: &SolverConfig) -> Result<f64, RootError>
where
    F: RealFnEval + RealDfEval,
{
    newton_raphson_observed(f, start, config, &mut ())
}

/// Newton-Raphson reporting each step to `observer`.
pub fn newton_raphson_observed<F, O>(
    f: &F,
    start: f64,
    config: &SolverConfig,
    observer: &mut O,
) -> Result<f64, RootError>
where
    F: RealFnEval + RealDfEval,
    O: Observer,
{
    iterative_root_find(
        f,
        &nr_iteration,
        Method::NewtonRaphson,
        start,
        config,
        observer,
    )
}

/// Evaluate a single iteration for Newton's method.  Returns an error if the
/// derivative evaluates to zero or the step leaves the finite reals.
fn nr_iteration<F>(f: &F, x: f64, f_x: f64) -> Result<f64, RootError>
where
    F: RealFnEval + RealDfEval,
{
    let denom = f.eval_df(x);
    if denom == 0.0 {
        return Err(ArithmeticFault::ZeroDerivative { x }.into());
    }
    let x_new = x - f_x / denom;
    if !x_new.is_finite() {
        return Err(ArithmeticFault::NonFiniteIterate { x }.into());
    }
    Ok(x_new)
}

/// Root finding via Bisection Method.
///
/// The endpoints of `bracket` may come in either order but f must not have
/// the same strict sign at both.  Each iteration halves the bracket, so the
/// speed of convergence is linear.
pub fn bisection<F>(f: &F, bracket: &Bracket, config: &SolverConfig) -> Result<f64, RootError>
where
    F: RealFnEval,
{
    bisection_observed(f, bracket, config, &mut ())
}

/// Bisection reporting each narrowed bracket to `observer`.
pub fn bisection_observed<F, O>(
    f: &F,
    bracket: &Bracket,
    config: &SolverConfig,
    observer: &mut O,
) -> Result<f64, RootError>
where
    F: RealFnEval,
    O: Observer,
{
    let finish = config.tolerance();
    let mut window = *bracket;
    let mut f_a = eval_finite(f, window.a)?;
    let f_b = eval_finite(f, window.b)?;

    // ensure we started with valid bracket
    if is_same_sign(f_a, f_b) {
        return Err(RootError::InvalidBracket {
            a: window.a,
            b: window.b,
            f_a,
            f_b,
        });
    }

    let mut mid = window.middle();
    let mut f_mid = eval_finite(f, mid)?;
    let mut it = 1;

    while !finish.is_converged(f_mid) && it <= config.max_iter() {
        if is_same_sign(f_a, f_mid) {
            window.a = mid;
            f_a = f_mid;
        } else {
            window.b = mid;
        }

        mid = window.middle();
        f_mid = eval_finite(f, mid)?;

        observer.observe(&Event::BisectionStep {
            iteration: it,
            bracket: window,
            mid,
            f_mid,
        });
        it += 1;
    }

    if !finish.is_converged(f_mid) {
        return Err(RootError::ConvergenceFailure);
    }
    Ok(mid)
}

/// Solve f(x) = 0 by Newton-Raphson from `x0`, falling back to bisection on
/// `[x0, x1]` if Newton-Raphson runs out of iterations.
///
/// Progress goes to `tracing` at `info` level.  Only
/// [`RootError::ConvergenceFailure`] triggers the fallback; arithmetic faults
/// from Newton-Raphson are returned as is.
pub fn solve<F>(f: &F, x0: f64, x1: f64, config: &HybridConfig) -> Result<f64, RootError>
where
    F: RealFnEval + RealDfEval,
{
    solve_observed(f, x0, x1, config, &mut TracingObserver)
}

/// As [`solve`], reporting attempts and steps to `observer`.
pub fn solve_observed<F, O>(
    f: &F,
    x0: f64,
    x1: f64,
    config: &HybridConfig,
    observer: &mut O,
) -> Result<f64, RootError>
where
    F: RealFnEval + RealDfEval,
    O: Observer,
{
    observer.observe(&Event::Attempt {
        method: Method::NewtonRaphson,
    });
    match newton_raphson_observed(f, x0, &config.newton(), observer) {
        Err(RootError::ConvergenceFailure) => {}
        res => return res,
    }

    observer.observe(&Event::Attempt {
        method: Method::Bisection,
    });
    bisection_observed(f, &Bracket::new(x0, x1), &config.bisection(), observer)
}
