/// Which end of the 0-100 scale demands attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Polarity {
    HigherIsWorse,
    LowerIsWorse,
}

impl Polarity {
    fn worst(self) -> f64 {
        match self {
            Polarity::HigherIsWorse => 100.0,
            Polarity::LowerIsWorse => 0.0,
        }
    }
}

/// Bring a percentage-scale reading into `[0, 100]`.
///
/// `NaN` resolves to the worst end of the scale so it can never land in a
/// reassuring tier.
pub(crate) fn percent(metric: &'static str, value: f64, polarity: Polarity) -> f64 {
    if value.is_nan() {
        tracing::warn!(metric, "non-numeric reading, classifying as most severe");
        return polarity.worst();
    }
    if !(0.0..=100.0).contains(&value) {
        tracing::warn!(metric, value, "reading outside [0, 100], clamping");
    }
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(percent("risk", 150.0, Polarity::HigherIsWorse), 100.0);
        assert_eq!(percent("risk", -5.0, Polarity::HigherIsWorse), 0.0);
        assert_eq!(percent("risk", f64::INFINITY, Polarity::HigherIsWorse), 100.0);
        assert_eq!(percent("risk", 42.5, Polarity::HigherIsWorse), 42.5);
    }

    #[test]
    fn nan_goes_to_the_worst_end() {
        assert_eq!(percent("risk", f64::NAN, Polarity::HigherIsWorse), 100.0);
        assert_eq!(percent("coverage", f64::NAN, Polarity::LowerIsWorse), 0.0);
    }
}
