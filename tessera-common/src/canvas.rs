#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Outer size of a chart and the margins reserved for axes and labels
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub margin: Margin,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, margin: Margin) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Square chart sized to the smaller window edge, as scatter plots are
    pub fn square(window_width: f64, window_height: f64, fraction: f64, margin: Margin) -> Self {
        let width = (window_width * fraction).min(window_height * fraction);
        Self::new(width, width, margin)
    }

    /// Width of the plotting area inside the margins
    pub fn bounded_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the plotting area inside the margins
    pub fn bounded_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// The plotting area as `[xmin, ymin, xmax, ymax]` in bounded coordinates
    pub fn bounded_rect(&self) -> [f64; 4] {
        [0.0, 0.0, self.bounded_width(), self.bounded_height()]
    }
}
