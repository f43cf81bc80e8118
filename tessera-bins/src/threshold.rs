use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};
use tessera_scales::array;

/// How bin boundaries are placed over the domain
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ThresholdStrategy {
    /// Exactly `k` bins of width `(max - min) / k`
    #[default]
    ExactCount,
    /// Round-number boundaries; the domain is widened to the enclosing ticks
    /// and the bin count is approximately `k`
    NiceBoundaries,
}

/// Largest bin count a generator accepts
pub const MAX_THRESHOLD_COUNT: usize = 10_000;

/// Default bin count for `n` values (Sturges' formula)
pub fn sturges(n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    ((n as f64).log2().ceil() as usize + 1).max(1)
}

/// Bin boundaries `x0 < x1 < ... < xk` for a valid domain `min < max`.
///
/// The first and last boundaries are the (possibly widened) domain, so the
/// result always has at least two entries.
pub fn boundaries(domain: (f64, f64), count: usize, strategy: ThresholdStrategy) -> Vec<f64> {
    let (min, max) = domain;
    match strategy {
        ThresholdStrategy::ExactCount => {
            let width = (max - min) / count as f64;
            let mut bounds: Vec<f64> = (0..count).map(|i| min + width * i as f64).collect();
            bounds.push(max);
            bounds
        }
        ThresholdStrategy::NiceBoundaries => {
            let (lo, hi) = array::nice(min, max, count as f64);
            let mut bounds: Vec<f64> = array::ticks(lo, hi, count as f64)
                .into_iter()
                .filter(|t| *t > lo && *t < hi)
                .collect();
            bounds.insert(0, lo);
            bounds.push(hi);
            bounds
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(100, 8)]
    #[case(1000, 11)]
    fn test_sturges(#[case] n: usize, #[case] expected: usize) {
        assert_eq!(sturges(n), expected);
    }

    #[test]
    fn test_exact_count_boundaries() {
        let bounds = boundaries((0.0, 100.0), 5, ThresholdStrategy::ExactCount);
        assert_eq!(bounds, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);

        let bounds = boundaries((0.3, 0.9), 3, ThresholdStrategy::ExactCount);
        assert_eq!(bounds.len(), 4);
        assert_eq!(bounds[0], 0.3);
        assert_eq!(bounds[3], 0.9);
    }

    #[test]
    fn test_nice_boundaries_extend_domain() {
        let bounds = boundaries((0.13, 0.87), 5, ThresholdStrategy::NiceBoundaries);
        assert_eq!(bounds, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);

        let bounds = boundaries((-2.6, 21.8), 5, ThresholdStrategy::NiceBoundaries);
        assert_eq!(bounds, vec![-5.0, 0.0, 5.0, 10.0, 15.0, 20.0, 25.0]);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(ThresholdStrategy::NiceBoundaries.to_string(), "nice-boundaries");
        assert_eq!(
            ThresholdStrategy::from_str("exact-count").unwrap(),
            ThresholdStrategy::ExactCount
        );
        assert_eq!(
            serde_json::to_string(&ThresholdStrategy::NiceBoundaries).unwrap(),
            "\"nice-boundaries\""
        );
        assert_eq!(
            ThresholdStrategy::VARIANTS,
            &["exact-count", "nice-boundaries"]
        );
    }
}
