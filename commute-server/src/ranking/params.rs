//! Query parameters and commuter weights.

/// Error returned when query parameters are out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidParams {
    #[error("ratio {0} out of range: must be between 0 and 100")]
    Ratio(f64),

    #[error("lambda {0} out of range: must be between 0 and 1")]
    Lambda(f64),
}

/// Validated tuning parameters for a ranking query.
///
/// Out-of-range values are rejected here rather than clamped later, so
/// scoring code can assume every field is in range.
///
/// # Examples
///
/// ```
/// use commute_server::ranking::RankParams;
///
/// let params = RankParams::new(50.0, 0.5, 1500).unwrap();
/// assert_eq!(params.budget(), 1500);
///
/// assert!(RankParams::new(101.0, 0.5, 1500).is_err());
/// assert!(RankParams::new(50.0, -0.1, 1500).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankParams {
    ratio: f64,
    lambda: f64,
    budget: u32,
}

impl RankParams {
    /// Validate and bundle query parameters.
    ///
    /// - `ratio` in `[0, 100]`: below 50 weights commuter A's time more
    ///   heavily, above 50 commuter B's.
    /// - `lambda` in `[0, 1]`: 0 minimises total time, 1 minimises the
    ///   worse-off commuter's time.
    /// - `budget`: monthly rent limit.
    pub fn new(ratio: f64, lambda: f64, budget: u32) -> Result<Self, InvalidParams> {
        // NaN fails both range checks
        if !(0.0..=100.0).contains(&ratio) {
            return Err(InvalidParams::Ratio(ratio));
        }
        if !(0.0..=1.0).contains(&lambda) {
            return Err(InvalidParams::Lambda(lambda));
        }
        Ok(Self {
            ratio,
            lambda,
            budget,
        })
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Commuter weights derived from the ratio.
    pub fn weights(&self) -> CommuterWeights {
        CommuterWeights::from_ratio(self.ratio)
    }
}

/// Multipliers applied to each commuter's travel time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommuterWeights {
    pub a: f64,
    pub b: f64,
}

impl CommuterWeights {
    /// The weight floor for the de-emphasised commuter.
    const FLOOR: f64 = 0.5;

    /// Piecewise-linear weights around the equal point `ratio = 50`.
    ///
    /// Moving the ratio away from 50 raises the favoured side's weight by
    /// 1 per 25 points and lowers the other by 1 per 50 points, never
    /// below 0.5. At the extremes the weights are 3 and 0.5.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 50.0 {
            let skew = 50.0 - ratio;
            Self {
                a: 1.0 + skew / 25.0,
                b: (1.0 - skew / 50.0).max(Self::FLOOR),
            }
        } else if ratio > 50.0 {
            let skew = ratio - 50.0;
            Self {
                a: (1.0 - skew / 50.0).max(Self::FLOOR),
                b: 1.0 + skew / 25.0,
            }
        } else {
            Self { a: 1.0, b: 1.0 }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn equal_point() {
        let w = CommuterWeights::from_ratio(50.0);
        assert_eq!(w, CommuterWeights { a: 1.0, b: 1.0 });
    }

    #[test]
    fn extremes() {
        let w = CommuterWeights::from_ratio(0.0);
        assert!(approx(w.a, 3.0));
        assert!(approx(w.b, 0.5));

        let w = CommuterWeights::from_ratio(100.0);
        assert!(approx(w.a, 0.5));
        assert!(approx(w.b, 3.0));
    }

    #[test]
    fn intermediate_values() {
        // skew 25: a = 2, b = max(0.5, 0.5)
        let w = CommuterWeights::from_ratio(25.0);
        assert!(approx(w.a, 2.0));
        assert!(approx(w.b, 0.5));

        // skew 10: a = 1.4, b = 0.8
        let w = CommuterWeights::from_ratio(40.0);
        assert!(approx(w.a, 1.4));
        assert!(approx(w.b, 0.8));

        let w = CommuterWeights::from_ratio(60.0);
        assert!(approx(w.a, 0.8));
        assert!(approx(w.b, 1.4));
    }

    #[test]
    fn accept_bounds() {
        assert!(RankParams::new(0.0, 0.0, 0).is_ok());
        assert!(RankParams::new(100.0, 1.0, u32::MAX).is_ok());
    }

    #[test]
    fn reject_out_of_range() {
        assert_eq!(
            RankParams::new(-1.0, 0.5, 0),
            Err(InvalidParams::Ratio(-1.0))
        );
        assert_eq!(
            RankParams::new(100.5, 0.5, 0),
            Err(InvalidParams::Ratio(100.5))
        );
        assert_eq!(
            RankParams::new(50.0, 1.5, 0),
            Err(InvalidParams::Lambda(1.5))
        );
    }

    #[test]
    fn reject_nan() {
        assert!(RankParams::new(f64::NAN, 0.5, 0).is_err());
        assert!(RankParams::new(50.0, f64::NAN, 0).is_err());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            InvalidParams::Ratio(120.0).to_string(),
            "ratio 120 out of range: must be between 0 and 100"
        );
        assert_eq!(
            InvalidParams::Lambda(2.0).to_string(),
            "lambda 2 out of range: must be between 0 and 1"
        );
    }
}
