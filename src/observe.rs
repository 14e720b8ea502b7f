//! Progress reporting.
//!
//! Solvers report what they are doing through an [`Observer`] instead of
//! printing. [`TracingObserver`] forwards events to `tracing`; the unit type
//! `()` discards them.

use std::fmt;

use tracing::{info, trace};

use crate::bracket::Bracket;

/// Root finding method, as named in progress events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    NewtonRaphson,
    Bisection,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::NewtonRaphson => write!(f, "Newton-Raphson"),
            Method::Bisection => write!(f, "bisection"),
        }
    }
}

/// Something a solver did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// The hybrid solver is about to run `method`.
    Attempt { method: Method },

    /// An iterative `method` moved to `x` after `iteration` updates.
    Step {
        method: Method,
        iteration: usize,
        x: f64,
        f_x: f64,
    },

    /// Bisection narrowed to `bracket` after `iteration` updates; `mid` is the
    /// new estimate.
    BisectionStep {
        iteration: usize,
        bracket: Bracket,
        mid: f64,
        f_mid: f64,
    },
}

pub trait Observer {
    fn observe(&mut self, event: &Event);
}

impl Observer for () {
    fn observe(&mut self, _event: &Event) {}
}

impl<O> Observer for &mut O
where
    O: Observer + ?Sized,
{
    fn observe(&mut self, event: &Event) {
        (**self).observe(event)
    }
}

/// Logs attempts at `info` and individual steps at `trace`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn observe(&mut self, event: &Event) {
        match *event {
            Event::Attempt { method } => info!("attempting root finding by {}", method),
            Event::Step {
                method,
                iteration,
                x,
                f_x,
            } => trace!(%method, iteration, x, f_x, "step"),
            Event::BisectionStep {
                iteration,
                bracket,
                mid,
                f_mid,
            } => trace!(
                iteration,
                a = bracket.a(),
                b = bracket.b(),
                mid,
                f_mid,
                "bisection step"
            ),
        }
    }
}
