use std::fmt;

/// The closed set of scalar root-finding methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bisection,
    Chord,
    Newton,
    SimpleIteration,
}

impl Kind {
    /// Every method, in presentation order.
    pub const ALL: [Kind; 4] = [
        Kind::Bisection,
        Kind::Chord,
        Kind::Newton,
        Kind::SimpleIteration,
    ];

    /// Short machine-friendly name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Bisection => "bisection",
            Kind::Chord => "chord",
            Kind::Newton => "newton",
            Kind::SimpleIteration => "simple-iteration",
        }
    }

    /// Returns true for methods that search a bracket `[left, right]`.
    ///
    /// Newton works from a single seed instead.
    #[must_use]
    pub const fn is_bracketing(self) -> bool {
        !matches!(self, Kind::Newton)
    }

    /// Iteration cap used when the config does not set one.
    ///
    /// Simple iteration has no closed-form bound on its rate, so its cap is
    /// part of the method. The others only need a guard against runaway
    /// loops.
    #[must_use]
    pub const fn default_max_iters(self) -> usize {
        match self {
            Kind::Bisection | Kind::Chord | Kind::Newton => 10_000,
            Kind::SimpleIteration => 50_000,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
