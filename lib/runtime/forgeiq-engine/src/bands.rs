/// Threshold table of `N` floors, highest floor first.
///
/// A value belongs to the first band whose floor it reaches, so a value equal
/// to a floor lands in the upper band. Values below every floor fall into
/// `base`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Bands<T: Copy, const N: usize> {
    floors: [(f64, T); N],
    base: T,
}

impl<T: Copy, const N: usize> Bands<T, N> {
    pub(crate) fn new(floors: [(f64, T); N], base: T) -> Self {
        Self { floors, base }
    }

    pub(crate) fn classify(&self, value: f64) -> T {
        self.floors
            .iter()
            .find(|(floor, _)| value >= *floor)
            .map(|(_, tier)| *tier)
            .unwrap_or(self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_belongs_to_upper_band() {
        let bands = Bands::new([(10.0, 'c'), (5.0, 'b')], 'a');
        assert_eq!(bands.classify(10.0), 'c');
        assert_eq!(bands.classify(9.99), 'b');
        assert_eq!(bands.classify(5.0), 'b');
        assert_eq!(bands.classify(4.99), 'a');
        assert_eq!(bands.classify(f64::NEG_INFINITY), 'a');
    }
}
