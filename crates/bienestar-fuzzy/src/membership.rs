//! Membership function shapes and named fuzzy sets

use crate::error::{FuzzyError, Result};

/// Piecewise-linear membership function
///
/// A triangle is a trapezoid whose plateau has collapsed to the single
/// point `b`. Zero-width ramps (`a == b` or `c == d`) behave as vertical
/// steps: the plateau is closed, so the breakpoint itself has degree 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MembershipFunction {
    /// Triangle with feet at `a` and `c`, peak at `b`
    Triangle {
        /// Left foot
        a: f64,
        /// Peak
        b: f64,
        /// Right foot
        c: f64,
    },
    /// Trapezoid with feet at `a` and `d`, plateau on `[b, c]`
    Trapezoid {
        /// Left foot
        a: f64,
        /// Plateau start
        b: f64,
        /// Plateau end
        c: f64,
        /// Right foot
        d: f64,
    },
}

impl MembershipFunction {
    /// Triangle `(a, b, c)`, validated
    pub fn triangle(a: f64, b: f64, c: f64) -> Result<Self> {
        let shape = MembershipFunction::Triangle { a, b, c };
        shape.validate()?;
        Ok(shape)
    }

    /// Trapezoid `(a, b, c, d)`, validated
    pub fn trapezoid(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        let shape = MembershipFunction::Trapezoid { a, b, c, d };
        shape.validate()?;
        Ok(shape)
    }

    /// Breakpoints as a trapezoid `(a, b, c, d)`
    pub fn breakpoints(&self) -> (f64, f64, f64, f64) {
        match *self {
            MembershipFunction::Triangle { a, b, c } => (a, b, b, c),
            MembershipFunction::Trapezoid { a, b, c, d } => (a, b, c, d),
        }
    }

    /// Check that breakpoints are finite and ordered `a <= b <= c <= d`
    pub fn validate(&self) -> Result<()> {
        let (a, b, c, d) = self.breakpoints();

        if ![a, b, c, d].iter().all(|p| p.is_finite()) {
            return Err(FuzzyError::Configuration(format!(
                "breakpoints must be finite: {:?}",
                self
            )));
        }
        if !(a <= b && b <= c && c <= d) {
            return Err(FuzzyError::Configuration(format!(
                "breakpoints out of order: {:?}",
                self
            )));
        }

        Ok(())
    }

    /// Degree of membership of `x`, always in `[0, 1]`
    ///
    /// Closed form on each segment, so breakpoints evaluate exactly.
    pub fn membership(&self, x: f64) -> f64 {
        let (a, b, c, d) = self.breakpoints();

        if x >= b && x <= c {
            1.0
        } else if x > a && x < b {
            (x - a) / (b - a)
        } else if x > c && x < d {
            (d - x) / (d - c)
        } else {
            0.0
        }
    }
}

/// A named fuzzy set owned by one variable
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzySet {
    /// Set name, unique within its variable
    pub name: String,
    /// Membership curve
    pub shape: MembershipFunction,
}

impl FuzzySet {
    /// Create a fuzzy set, validating its shape
    pub fn new(name: impl Into<String>, shape: MembershipFunction) -> Result<Self> {
        shape.validate()?;
        Ok(Self {
            name: name.into(),
            shape,
        })
    }

    /// Degree of membership of `x`
    pub fn membership(&self, x: f64) -> f64 {
        self.shape.membership(x)
    }
}
