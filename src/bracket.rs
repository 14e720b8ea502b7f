/// Bracket represents the interval between endpoints `a` and `b`.
///
/// Endpoints are kept in the order given; bisection does not need `a <= b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bracket {
    pub(crate) a: f64,
    pub(crate) b: f64,
}

impl Bracket {
    pub fn new(a: f64, b: f64) -> Bracket {
        Bracket { a, b }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn middle(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    pub fn width(&self) -> f64 {
        (self.b - self.a).abs()
    }
}

/// Whether both values are non-zero and share a sign, i.e. `lhs * rhs > 0`
/// without the product underflowing to zero.
pub fn is_same_sign(lhs: f64, rhs: f64) -> bool {
    lhs != 0.0 && rhs != 0.0 && lhs.is_sign_positive() == rhs.is_sign_positive()
}
