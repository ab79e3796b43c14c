use crate::BpError;

/// Floating point type used throughout the workspace
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// `a > b` with values inside tolerance treated as equal.
pub fn definitely_greater(a: Real, b: Real, tol: Tolerances) -> bool {
    a > b && !nearly_equal(a, b, tol)
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, BpError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(BpError::NonFinite { what, value: v })
    }
}

/// Inclusive range membership, `lo <= v <= hi`.
#[inline]
pub fn within(v: Real, lo: Real, hi: Real) -> bool {
    lo <= v && v <= hi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn definitely_greater_ignores_noise() {
        let tol = Tolerances::default();
        assert!(definitely_greater(5.0, 3.0, tol));
        assert!(!definitely_greater(3.0 + 1e-12, 3.0, tol));
        assert!(!definitely_greater(2.0, 3.0, tol));
    }

    #[test]
    fn within_is_inclusive() {
        assert!(within(10.0, 10.0, 20.0));
        assert!(within(20.0, 10.0, 20.0));
        assert!(!within(20.5, 10.0, 20.0));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }
}
