use crate::error::GeometryError;
use tessera_common::Dimensions;

/// Axis-aligned clip rectangle for Voronoi cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipBounds {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl ClipBounds {
    pub fn try_new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self, GeometryError> {
        let finite = [xmin, ymin, xmax, ymax].iter().all(|v| v.is_finite());
        if !finite || xmax <= xmin || ymax <= ymin {
            return Err(GeometryError::InvalidBounds {
                xmin,
                ymin,
                xmax,
                ymax,
            });
        }
        Ok(Self {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    /// The bounded (inner) chart area, in coordinates relative to its top-left
    /// corner
    pub fn from_dimensions(dimensions: &Dimensions) -> Result<Self, GeometryError> {
        Self::try_new(
            0.0,
            0.0,
            dimensions.bounded_width(),
            dimensions.bounded_height(),
        )
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.xmin && x <= self.xmax && y >= self.ymin && y <= self.ymax
    }

    /// Clips a convex ring with Sutherland–Hodgman, one half-plane at a time.
    ///
    /// The result is open (first vertex not repeated) and empty when fewer
    /// than three distinct vertices remain.
    pub fn clip(&self, ring: &[[f64; 2]]) -> Vec<[f64; 2]> {
        let mut output = ring.to_vec();
        if output.len() > 1 && output.first() == output.last() {
            output.pop();
        }

        for edge in [Edge::Left, Edge::Right, Edge::Bottom, Edge::Top] {
            if output.is_empty() {
                break;
            }
            let input = std::mem::take(&mut output);
            let mut prev = input[input.len() - 1];
            for &curr in &input {
                match (self.inside(edge, curr), self.inside(edge, prev)) {
                    (true, true) => output.push(curr),
                    (true, false) => {
                        output.push(self.intersect(edge, prev, curr));
                        output.push(curr);
                    }
                    (false, true) => output.push(self.intersect(edge, prev, curr)),
                    (false, false) => {}
                }
                prev = curr;
            }
        }

        output.dedup();
        while output.len() > 1 && output.first() == output.last() {
            output.pop();
        }
        if output.len() < 3 {
            output.clear();
        }
        output
    }

    fn inside(&self, edge: Edge, p: [f64; 2]) -> bool {
        match edge {
            Edge::Left => p[0] >= self.xmin,
            Edge::Right => p[0] <= self.xmax,
            Edge::Bottom => p[1] >= self.ymin,
            Edge::Top => p[1] <= self.ymax,
        }
    }

    /// Crossing of segment `ab` with the edge line. Only called when `a` and
    /// `b` lie on opposite sides, so the denominator is never zero.
    fn intersect(&self, edge: Edge, a: [f64; 2], b: [f64; 2]) -> [f64; 2] {
        match edge {
            Edge::Left | Edge::Right => {
                let x = if edge == Edge::Left { self.xmin } else { self.xmax };
                let t = (x - a[0]) / (b[0] - a[0]);
                [x, a[1] + t * (b[1] - a[1])]
            }
            Edge::Bottom | Edge::Top => {
                let y = if edge == Edge::Bottom { self.ymin } else { self.ymax };
                let t = (y - a[1]) / (b[1] - a[1]);
                [a[0] + t * (b[0] - a[0]), y]
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Left,
    Right,
    Bottom,
    Top,
}
