use crate::config::SolverConfig;
use crate::error::{ArithmeticFault, RootError};
use crate::observe::{Event, Method, Observer};
use crate::wrap::RealFnEval;

/// Evaluate f(x), faulting on NaN or infinite values so they can never pass
/// (or silently fail) the residual check.
pub(crate) fn eval_finite<F>(f: &F, x: f64) -> Result<f64, ArithmeticFault>
where
    F: RealFnEval,
{
    let fx = f.eval_f(x);
    if !fx.is_finite() {
        return Err(ArithmeticFault::NonFiniteEvaluation { x, fx });
    }
    Ok(fx)
}

/// Driver for iterative root finders.
///
/// Counts iterations from 1 and keeps stepping while `|f(x)| > eps` and the
/// count has not passed `max_iter`.  The `iterate` routine maps
/// `(f, x, f(x))` to the next estimate.  The user function 'f' is kept
/// compatible with the iteration routine using trait bounds defined in 'wrap'
/// module.
pub(crate) fn iterative_root_find<F, I, O>(
    f: &F,
    iterate: &I,
    method: Method,
    start: f64,
    config: &SolverConfig,
    observer: &mut O,
) -> Result<f64, RootError>
where
    F: RealFnEval,
    I: Fn(&F, f64, f64) -> Result<f64, RootError>,
    O: Observer,
{
    let finish = config.tolerance();

    let mut x_cur = start;
    let mut f_cur = eval_finite(f, x_cur)?;
    let mut it = 1;

    // stay inside maximum iteration count
    while !finish.is_converged(f_cur) && it <= config.max_iter() {
        x_cur = iterate(f, x_cur, f_cur)?;
        f_cur = eval_finite(f, x_cur)?;

        observer.observe(&Event::Step {
            method,
            iteration: it,
            x: x_cur,
            f_x: f_cur,
        });
        it += 1;
    }

    if !finish.is_converged(f_cur) {
        return Err(RootError::ConvergenceFailure);
    }
    Ok(x_cur)
}
