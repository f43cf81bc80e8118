//! Voronoi diagram clipped to a rectangle.
//!
//! Cells are the dual of a triangulation that includes four helper sites far
//! outside both the sites and the clip rectangle. Every real site is then
//! interior to the triangulation, so its cell is the closed ring of
//! circumcenters around it, which is clipped to the rectangle. The helper
//! sites are never closer to an in-bound location than its nearest real site,
//! so the clipped cells are the same as those of the unbounded diagram.

use crate::clip::ClipBounds;
use crate::delaunay::{triangle_of_edge, Delaunay};
use crate::error::GeometryError;
use crate::rtree::SiteRTree;
use geo::{Area, Intersects};
use geo_types::{LineString, Point, Polygon};
use log::{debug, warn};

/// Site count above which [`Voronoi::find_cell`] should give way to
/// [`Voronoi::locate`]
pub const LINEAR_SCAN_THRESHOLD: usize = 1000;

const NUM_HELPER_POINTS: usize = 4;

#[derive(Debug, Clone)]
pub struct Voronoi {
    delaunay: Delaunay,
    bounds: ClipBounds,
    cells: Vec<Polygon<f64>>,
    neighbors: Vec<Vec<usize>>,
    rtree: SiteRTree,
}

impl Voronoi {
    /// Builds the diagram of `points` clipped to `bounds`.
    ///
    /// Coincident points are kept: the first one owns the cell and the later
    /// ones get an empty polygon.
    pub fn new(points: &[[f64; 2]], bounds: ClipBounds) -> Result<Self, GeometryError> {
        let delaunay = Delaunay::new(points)?;

        let mut sites = points.to_vec();
        sites.extend(helper_points(points, &bounds));
        let augmented = Delaunay::new(&sites)?;
        let centers: Vec<[f64; 2]> = (0..augmented.triangle_count())
            .map(|t| augmented.circumcenter(t))
            .collect();

        let cells: Vec<Polygon<f64>> = (0..points.len())
            .map(|i| {
                let ring: Vec<[f64; 2]> = augmented
                    .edges_around_point(augmented.inedges[i])
                    .into_iter()
                    .map(|e| centers[triangle_of_edge(e)])
                    .collect();
                Polygon::new(LineString::from(bounds.clip(&ring)), vec![])
            })
            .collect();

        let neighbors = (0..points.len()).map(|i| delaunay.neighbors(i)).collect();

        let coincident = (0..points.len())
            .filter(|&i| !delaunay.contains_point(i))
            .count();
        if coincident > 0 {
            warn!("{coincident} coincident sites were given empty cells");
        }
        debug!(
            "built {} Voronoi cells clipped to {}x{}",
            cells.len(),
            bounds.width(),
            bounds.height()
        );

        Ok(Self {
            delaunay,
            bounds,
            cells,
            neighbors,
            rtree: SiteRTree::new(points),
        })
    }

    /// Triangulation of the sites alone, without the helper sites
    pub fn delaunay(&self) -> &Delaunay {
        &self.delaunay
    }

    pub fn bounds(&self) -> &ClipBounds {
        &self.bounds
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Polygon<f64>] {
        &self.cells
    }

    pub fn cell(&self, i: usize) -> Option<&Polygon<f64>> {
        self.cells.get(i)
    }

    /// Sites paired with their cells, in input order
    pub fn iter(&self) -> impl Iterator<Item = ([f64; 2], &Polygon<f64>)> {
        self.delaunay
            .points()
            .iter()
            .copied()
            .zip(self.cells.iter())
    }

    /// Sites whose cells share an edge with cell `i`
    pub fn neighbors(&self, i: usize) -> &[usize] {
        self.neighbors.get(i).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total area of the clipped cells
    pub fn area(&self) -> f64 {
        self.cells.iter().map(|c| c.unsigned_area()).sum()
    }

    /// Index of the site nearest to `(px, py)`, which owns the cell containing
    /// that location. Exact ties resolve to the lowest index. `None` only for
    /// a non-finite location.
    pub fn locate(&self, px: f64, py: f64) -> Option<usize> {
        if !px.is_finite() || !py.is_finite() {
            return None;
        }
        self.rtree.nearest(&[px, py])
    }

    /// Like [`Voronoi::locate`], but rejects sites further than `radius`
    pub fn locate_within(&self, px: f64, py: f64, radius: f64) -> Option<usize> {
        if !px.is_finite() || !py.is_finite() {
            return None;
        }
        self.rtree.nearest_within(&[px, py], radius)
    }

    /// Linear scan for the first cell containing `(px, py)`. `None` outside
    /// the clip bounds.
    pub fn find_cell(&self, px: f64, py: f64) -> Option<usize> {
        let point = Point::new(px, py);
        self.cells.iter().position(|cell| cell.intersects(&point))
    }
}

/// Four sites at three diagonals from the center of the box around the
/// points and the bounds, one on each side
fn helper_points(points: &[[f64; 2]], bounds: &ClipBounds) -> [[f64; 2]; NUM_HELPER_POINTS] {
    let (mut xmin, mut ymin) = (bounds.xmin(), bounds.ymin());
    let (mut xmax, mut ymax) = (bounds.xmax(), bounds.ymax());
    for p in points {
        xmin = xmin.min(p[0]);
        ymin = ymin.min(p[1]);
        xmax = xmax.max(p[0]);
        ymax = ymax.max(p[1]);
    }

    let cx = (xmin + xmax) / 2.0;
    let cy = (ymin + ymax) / 2.0;
    let d = 3.0 * (xmax - xmin).hypot(ymax - ymin);

    [[cx - d, cy], [cx + d, cy], [cx, cy - d], [cx, cy + d]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    fn bounds(xmax: f64, ymax: f64) -> ClipBounds {
        ClipBounds::try_new(0.0, 0.0, xmax, ymax).unwrap()
    }

    #[test]
    fn test_three_points() {
        let voronoi = Voronoi::new(&[[0.0, 0.0], [10.0, 0.0], [5.0, 10.0]], bounds(10.0, 10.0))
            .unwrap();

        assert_eq!(voronoi.delaunay().triangle_count(), 1);
        assert_eq!(voronoi.len(), 3);

        let areas: Vec<f64> = voronoi.cells().iter().map(|c| c.unsigned_area()).collect();
        assert_approx_eq!(f64, areas[0], 25.0, epsilon = 1e-9);
        assert_approx_eq!(f64, areas[1], 25.0, epsilon = 1e-9);
        assert_approx_eq!(f64, areas[2], 50.0, epsilon = 1e-9);
        assert_approx_eq!(f64, voronoi.area(), 100.0, epsilon = 1e-9);

        assert_eq!(voronoi.locate(1.0, 1.0), Some(0));
        assert_eq!(voronoi.locate(9.0, 1.0), Some(1));
        assert_eq!(voronoi.locate(5.0, 9.0), Some(2));
        assert_eq!(voronoi.find_cell(1.0, 1.0), Some(0));
        assert_eq!(voronoi.find_cell(9.0, 1.0), Some(1));
        assert_eq!(voronoi.find_cell(5.0, 9.0), Some(2));

        let mut neighbors = voronoi.neighbors(0).to_vec();
        neighbors.sort();
        assert_eq!(neighbors, vec![1, 2]);
    }

    #[test]
    fn test_helper_points_are_far() {
        let points = [[0.0, 0.0], [10.0, 0.0], [5.0, 10.0]];
        let helpers = helper_points(&points, &bounds(10.0, 10.0));
        let diagonal = 200f64.sqrt();
        for helper in helpers {
            for corner in [[0.0, 0.0], [10.0, 0.0], [0.0, 10.0], [10.0, 10.0]] {
                let d = (helper[0] - corner[0]).hypot(helper[1] - corner[1]);
                assert!(d > 2.0 * diagonal);
            }
        }
    }

    #[test]
    fn test_collinear_sites_get_strips() {
        let voronoi = Voronoi::new(
            &[[10.0, 50.0], [50.0, 50.0], [90.0, 50.0]],
            bounds(100.0, 100.0),
        )
        .unwrap();
        assert!(voronoi.delaunay().is_collinear());

        let areas: Vec<f64> = voronoi.cells().iter().map(|c| c.unsigned_area()).collect();
        assert_approx_eq!(f64, areas[0], 3000.0, epsilon = 1e-6);
        assert_approx_eq!(f64, areas[1], 4000.0, epsilon = 1e-6);
        assert_approx_eq!(f64, areas[2], 3000.0, epsilon = 1e-6);

        assert_eq!(voronoi.neighbors(0), &[1]);
        assert_eq!(voronoi.neighbors(1), &[0, 2]);
    }

    #[test]
    fn test_insufficient_points() {
        assert_eq!(
            Voronoi::new(&[[1.0, 1.0], [2.0, 2.0]], bounds(10.0, 10.0)).unwrap_err(),
            GeometryError::InsufficientPoints { distinct: 2 }
        );
        assert_eq!(
            Voronoi::new(&[[1.0, 1.0], [1.0, 1.0], [1.0, 1.0]], bounds(10.0, 10.0))
                .unwrap_err(),
            GeometryError::InsufficientPoints { distinct: 1 }
        );
    }

    #[test]
    fn test_locate_non_finite() {
        let voronoi = Voronoi::new(&[[0.0, 0.0], [10.0, 0.0], [5.0, 10.0]], bounds(10.0, 10.0))
            .unwrap();
        assert_eq!(voronoi.locate(f64::NAN, 1.0), None);
        assert_eq!(voronoi.locate_within(1.0, f64::INFINITY, 5.0), None);
        assert_eq!(voronoi.find_cell(20.0, 20.0), None);
    }
}
