//! Solver parameters.
//!
//! [`SolverConfig`] carries the tolerance and iteration cap for a single
//! method. [`HybridConfig`] carries one shared tolerance and an independent
//! cap for each phase of [`crate::solver::solve`].
//!
//! Builders validate on every call, so a config value that exists is always
//! usable.

use crate::convergence::Residual;
use crate::error::ConfigError;

pub const DEFAULT_EPS: f64 = 1e-5;
pub const DEFAULT_MAX_ITER: usize = 20;

fn check_max_iter(v: usize) -> Result<usize, ConfigError> {
    if v == 0 {
        return Err(ConfigError::InvalidMaxIter { got: v });
    }
    Ok(v)
}

/// Tolerance and iteration cap for one method.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    tolerance: Residual,
    max_iter: usize,
}

impl SolverConfig {
    pub fn new(eps: f64, max_iter: usize) -> Result<SolverConfig, ConfigError> {
        Ok(SolverConfig {
            tolerance: Residual::new(eps)?,
            max_iter: check_max_iter(max_iter)?,
        })
    }

    pub fn with_eps(mut self, eps: f64) -> Result<SolverConfig, ConfigError> {
        self.tolerance = Residual::new(eps)?;
        Ok(self)
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Result<SolverConfig, ConfigError> {
        self.max_iter = check_max_iter(max_iter)?;
        Ok(self)
    }

    pub fn eps(&self) -> f64 {
        self.tolerance.eps()
    }

    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    pub(crate) fn tolerance(&self) -> &Residual {
        &self.tolerance
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            tolerance: Residual { eps: DEFAULT_EPS },
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

/// Parameters for the Newton-Raphson then bisection hybrid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HybridConfig {
    tolerance: Residual,
    max_iter_newton: usize,
    max_iter_bisection: usize,
}

impl HybridConfig {
    pub fn new(
        eps: f64,
        max_iter_newton: usize,
        max_iter_bisection: usize,
    ) -> Result<HybridConfig, ConfigError> {
        Ok(HybridConfig {
            tolerance: Residual::new(eps)?,
            max_iter_newton: check_max_iter(max_iter_newton)?,
            max_iter_bisection: check_max_iter(max_iter_bisection)?,
        })
    }

    pub fn with_eps(mut self, eps: f64) -> Result<HybridConfig, ConfigError> {
        self.tolerance = Residual::new(eps)?;
        Ok(self)
    }

    pub fn with_max_iter_newton(mut self, v: usize) -> Result<HybridConfig, ConfigError> {
        self.max_iter_newton = check_max_iter(v)?;
        Ok(self)
    }

    pub fn with_max_iter_bisection(mut self, v: usize) -> Result<HybridConfig, ConfigError> {
        self.max_iter_bisection = check_max_iter(v)?;
        Ok(self)
    }

    pub fn eps(&self) -> f64 {
        self.tolerance.eps()
    }

    pub fn max_iter_newton(&self) -> usize {
        self.max_iter_newton
    }

    pub fn max_iter_bisection(&self) -> usize {
        self.max_iter_bisection
    }

    /// Config for the Newton-Raphson phase.
    pub fn newton(&self) -> SolverConfig {
        SolverConfig {
            tolerance: self.tolerance,
            max_iter: self.max_iter_newton,
        }
    }

    /// Config for the bisection fallback.
    pub fn bisection(&self) -> SolverConfig {
        SolverConfig {
            tolerance: self.tolerance,
            max_iter: self.max_iter_bisection,
        }
    }
}

impl Default for HybridConfig {
    fn default() -> Self {
        HybridConfig {
            tolerance: Residual { eps: DEFAULT_EPS },
            max_iter_newton: DEFAULT_MAX_ITER,
            max_iter_bisection: DEFAULT_MAX_ITER,
        }
    }
}
