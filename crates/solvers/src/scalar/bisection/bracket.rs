/// Current bracket bounds and the residual sign at the left bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
}

impl Bracket {
    /// Creates an ordered bracket from endpoints whose residual signs differ.
    ///
    /// Returns `None` if either endpoint is non-finite, the bracket has zero
    /// width, or the residual signs match.
    pub(super) fn new([a, b]: [f64; 2], f_a: f64, f_b: f64) -> Option<Self> {
        if !a.is_finite() || !b.is_finite() {
            return None;
        }

        #[allow(clippy::float_cmp)]
        if a == b || Sign::of(f_a) == Sign::of(f_b) {
            return None;
        }

        let (left, right, f_left) = if a < b { (a, b, f_a) } else { (b, a, f_b) };
        Some(Self {
            left,
            right,
            left_sign: Sign::of(f_left),
        })
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns true if `mid` lies on a bound, which happens once the bounds
    /// are adjacent floats and the bracket can shrink no further.
    pub(super) fn is_collapsed(&self, mid: f64) -> bool {
        mid <= self.left || mid >= self.right
    }

    pub(super) fn half_width(&self) -> f64 {
        0.5 * (self.right - self.left)
    }

    /// Replaces the bound whose residual shares the sign of `residual`.
    pub(super) fn shrink(&mut self, x: f64, residual: f64) {
        if Sign::of(residual) == self.left_sign {
            self.left = x;
        } else {
            self.right = x;
        }
    }
}

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    /// Residual is positive (or zero).
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}
