use crate::error::BinError;
use crate::threshold::{self, ThresholdStrategy};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use tessera_common::Accessor;
use tessera_scales::array;

/// A contiguous interval of the binned domain and the records that fall in it.
///
/// Members are positional indices into the dataset the bin was built from.
/// Every bin is half-open `[x0, x1)` except the last, which also holds `x1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub x0: f64,
    pub x1: f64,
    pub members: Vec<usize>,
}

impl Bin {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Resolves the members against the dataset the bin was built from
    pub fn records<'a, R>(&'a self, data: &'a [R]) -> impl Iterator<Item = &'a R> + 'a {
        self.members.iter().map(move |i| &data[*i])
    }

    /// Mean of another accessor over this bin's members
    pub fn mean<R>(&self, data: &[R], accessor: &impl Accessor<R>) -> Result<Option<f64>, BinError> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for record in self.records(data) {
            match accessor.value(record)? {
                Some(v) if !v.is_nan() => {
                    sum += v;
                    count += 1;
                }
                _ => {}
            }
        }
        Ok((count > 0).then(|| sum / count as f64))
    }
}

/// Ordered, contiguous bins plus the domain they cover
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub domain: (f64, f64),
    pub bins: Vec<Bin>,
    /// Records skipped because their value was undefined, NaN or outside the
    /// domain
    pub dropped: usize,
}

impl Histogram {
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bin> {
        self.bins.iter()
    }

    /// Number of records that landed in some bin
    pub fn total(&self) -> usize {
        self.bins.iter().map(Bin::len).sum()
    }

    /// Largest bin count, the natural top of the histogram's y domain
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(Bin::len).max().unwrap_or(0)
    }

    /// Mean of the accessor over the whole dataset, including records that
    /// fell outside the binned domain
    pub fn mean<R>(&self, data: &[R], accessor: &impl Accessor<R>) -> Result<Option<f64>, BinError> {
        Ok(array::mean(data, accessor)?)
    }

    /// Index of the bin a value would be assigned to
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        let (lo, hi) = self.domain;
        if value.is_nan() || value < lo || value > hi {
            return None;
        }
        let interior = self.bins.get(1..)?;
        Some(interior.partition_point(|bin| bin.x0 <= value))
    }
}

impl<'a> IntoIterator for &'a Histogram {
    type Item = &'a Bin;
    type IntoIter = std::slice::Iter<'a, Bin>;

    fn into_iter(self) -> Self::IntoIter {
        self.bins.iter()
    }
}

/// Configures and runs the binning of a dataset.
///
/// ```
/// use tessera_bins::BinGenerator;
/// use tessera_common::Infallible;
///
/// let data: Vec<f64> = (0..100).map(f64::from).collect();
/// let histogram = BinGenerator::new()
///     .domain((0.0, 100.0))
///     .thresholds(5)
///     .bin(&data, &Infallible(|v: &f64| Some(*v)))
///     .unwrap();
/// assert_eq!(histogram.len(), 5);
/// assert!(histogram.iter().all(|bin| bin.len() == 20));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BinGenerator {
    domain: Option<(f64, f64)>,
    count: Option<usize>,
    strategy: ThresholdStrategy,
}

impl BinGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the domain instead of deriving it from the data extent.
    /// Values outside it are dropped.
    pub fn domain(mut self, domain: (f64, f64)) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Target bin count. Defaults to Sturges' formula over the numeric values.
    pub fn thresholds(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn strategy(mut self, strategy: ThresholdStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn bin<R>(&self, data: &[R], accessor: &impl Accessor<R>) -> Result<Histogram, BinError> {
        if data.is_empty() {
            return Err(BinError::InvalidDomain("empty dataset".to_string()));
        }
        match self.count {
            Some(count) if count == 0 || count > threshold::MAX_THRESHOLD_COUNT => {
                return Err(BinError::InvalidThresholdCount(count));
            }
            _ => {}
        }

        let values = accessor.values(data)?;
        let (min, max) = match self.domain {
            Some(domain) => domain,
            None => values
                .iter()
                .fold(None, |acc: Option<(f64, f64)>, (_, v)| match acc {
                    None => Some((*v, *v)),
                    Some((lo, hi)) => Some((lo.min(*v), hi.max(*v))),
                })
                .ok_or_else(|| BinError::InvalidDomain("no numeric values".to_string()))?,
        };
        if !min.is_finite() || !max.is_finite() {
            return Err(BinError::InvalidDomain(format!(
                "non-finite bounds [{min}, {max}]"
            )));
        }
        if min >= max {
            return Err(BinError::InvalidDomain(format!(
                "lower bound {min} is not below upper bound {max}"
            )));
        }

        let count = self
            .count
            .unwrap_or_else(|| threshold::sturges(values.len()));
        let bounds = threshold::boundaries((min, max), count, self.strategy);
        if !bounds.windows(2).all(|w| w[0] < w[1]) {
            return Err(BinError::InvalidDomain(format!(
                "[{min}, {max}] is too narrow for {count} distinct bin boundaries"
            )));
        }
        let domain = (bounds[0], bounds[bounds.len() - 1]);

        let mut bins: Vec<Bin> = bounds
            .windows(2)
            .map(|w| Bin {
                x0: w[0],
                x1: w[1],
                members: Vec::new(),
            })
            .collect();

        let interior = &bounds[1..bounds.len() - 1];
        for (index, value) in values.iter().copied() {
            if value < domain.0 || value > domain.1 {
                trace!("record {index} value {value} outside bin domain {domain:?}");
                continue;
            }
            let bin = interior.partition_point(|t| *t <= value);
            bins[bin].members.push(index);
        }

        let histogram = Histogram {
            domain,
            bins,
            dropped: 0,
        };
        let dropped = data.len() - histogram.total();
        debug!(
            "binned {} of {} records into {} bins over {:?} ({})",
            histogram.total(),
            data.len(),
            histogram.len(),
            domain,
            self.strategy
        );
        Ok(Histogram { dropped, ..histogram })
    }
}
