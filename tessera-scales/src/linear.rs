use crate::array;

#[derive(Clone, Debug)]
pub struct LinearScaleConfig {
    pub domain: (f64, f64),
    pub range: (f64, f64),
    pub clamp: bool,
    pub nice: Option<usize>,
    pub round: bool,
}

impl Default for LinearScaleConfig {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
            nice: None,
            round: false,
        }
    }
}

/// A linear scale that maps numeric input values from a domain to a range.
/// Supports clamping, domain niceing, and tick generation.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    clamp: bool,
    round: bool,
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new(&LinearScaleConfig::default())
    }
}

impl LinearScale {
    pub fn new(config: &LinearScaleConfig) -> Self {
        let this = Self {
            domain_start: config.domain.0,
            domain_end: config.domain.1,
            range_start: config.range.0,
            range_end: config.range.1,
            clamp: config.clamp,
            round: config.round,
        };

        match config.nice {
            Some(count) => this.nice(Some(count)),
            None => this,
        }
    }

    /// Extends the domain to nice round numbers for better tick selection
    pub fn nice(mut self, count: Option<usize>) -> Self {
        if self.is_degenerate_domain() {
            return self;
        }
        let count = count.unwrap_or(10) as f64;
        let (start, end) = array::nice(self.domain_start, self.domain_end, count);
        self.domain_start = start;
        self.domain_end = end;
        self
    }

    pub fn with_domain(mut self, domain: (f64, f64)) -> Self {
        self.domain_start = domain.0;
        self.domain_end = domain.1;
        self
    }

    pub fn with_range(mut self, range: (f64, f64)) -> Self {
        self.range_start = range.0;
        self.range_end = range.1;
        self
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn clamp(&self) -> bool {
        self.clamp
    }

    fn is_degenerate_domain(&self) -> bool {
        self.domain_start == self.domain_end
            || self.domain_start.is_nan()
            || self.domain_end.is_nan()
    }

    fn is_degenerate(&self) -> bool {
        self.is_degenerate_domain()
            || self.range_start == self.range_end
            || self.range_start.is_nan()
            || self.range_end.is_nan()
    }

    /// Maps a domain value to the range
    pub fn scale(&self, value: f64) -> f64 {
        // Degenerate domain or range collapses onto the range start
        if self.is_degenerate() {
            return self.range_start;
        }

        let t = (value - self.domain_start) / (self.domain_end - self.domain_start);
        let t = if self.clamp { t.clamp(0.0, 1.0) } else { t };
        let v = self.range_start + t * (self.range_end - self.range_start);
        if self.round {
            v.round()
        } else {
            v
        }
    }

    /// Maps a slice of domain values to the range
    pub fn scale_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|v| self.scale(*v)).collect()
    }

    /// Maps a range value back to the domain
    pub fn invert(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.domain_start;
        }

        let t = (value - self.range_start) / (self.range_end - self.range_start);
        let t = if self.clamp { t.clamp(0.0, 1.0) } else { t };
        self.domain_start + t * (self.domain_end - self.domain_start)
    }

    pub fn ticks(&self, count: Option<f64>) -> Vec<f64> {
        array::ticks(self.domain_start, self.domain_end, count.unwrap_or(10.0))
    }
}
