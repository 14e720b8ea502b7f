use crate::error::ConfigError;

/// Residual tolerance: an estimate `x` is a root once `|f(x)| <= eps`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Residual {
    pub(crate) eps: f64,
}

impl Residual {
    pub fn new(eps: f64) -> Result<Residual, ConfigError> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ConfigError::InvalidTolerance { got: eps });
        }
        Ok(Residual { eps })
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    pub fn is_converged(&self, f_cur: f64) -> bool {
        f_cur.abs() <= self.eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64;

    #[test]
    fn test_residual_convergence() {
        let c = Residual::new(1e-5).expect("valid tolerance");

        // too far off
        assert_eq!(false, c.is_converged(2e-5));
        assert_eq!(false, c.is_converged(-2e-5));

        // just right, boundary included
        assert_eq!(true, c.is_converged(1e-5));
        assert_eq!(true, c.is_converged(-5e-6));
        assert_eq!(true, c.is_converged(0.0));
    }

    #[test]
    fn test_residual_nan_never_converged() {
        let c = Residual::new(1e-5).expect("valid tolerance");
        assert_eq!(false, c.is_converged(f64::NAN));
    }

    #[test]
    fn test_residual_rejects_bad_tolerance() {
        for eps in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            match Residual::new(eps) {
                Err(ConfigError::InvalidTolerance { .. }) => {}
                other => panic!("eps={} should be rejected, got {:?}", eps, other),
            }
        }
    }
}
