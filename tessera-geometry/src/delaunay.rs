//! Sweep-hull Delaunay triangulation.
//!
//! Points are inserted in order of distance from the circumcenter of a seed
//! triangle, each one against a convex hull whose edges are looked up through
//! an angular hash, and the new triangles are legalized with edge flips.
//!
//! The mesh is stored as flat half-edge arrays: triangle `t` owns half-edges
//! `3t`, `3t + 1` and `3t + 2`, `triangles[e]` is the point a half-edge starts
//! at and `halfedges[e]` is its twin in the adjacent triangle, or [`EMPTY`] on
//! the hull.

use crate::error::GeometryError;
use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;

/// Marker for a missing half-edge, hull entry or incoming edge
pub const EMPTY: usize = usize::MAX;

/// Points closer than this on both axes are treated as the same location
const EPSILON: f64 = f64::EPSILON * 2.0;

#[derive(Debug, Clone)]
pub struct Delaunay {
    points: Vec<[f64; 2]>,
    /// Point indices, three per triangle
    pub triangles: Vec<usize>,
    /// Twin of every half-edge, [`EMPTY`] on the hull
    pub halfedges: Vec<usize>,
    /// Convex hull as a ring of point indices. For collinear input this is
    /// every distinct point in order along the line.
    pub hull: Vec<usize>,
    /// One incoming half-edge per point, preferring a hull edge. [`EMPTY`] for
    /// points that were never inserted (duplicates).
    pub inedges: Vec<usize>,
    hull_index: Vec<usize>,
}

impl Delaunay {
    pub fn new(points: &[[f64; 2]]) -> Result<Self, GeometryError> {
        if let Some(index) = points
            .iter()
            .position(|p| !p[0].is_finite() || !p[1].is_finite())
        {
            return Err(GeometryError::NonFiniteCoordinate(index));
        }

        let distinct = points
            .iter()
            .map(|p| (OrderedFloat(p[0]), OrderedFloat(p[1])))
            .unique()
            .count();
        if distinct < 3 {
            return Err(GeometryError::InsufficientPoints { distinct });
        }

        let (mesh, hull) = match find_seed_triangle(points) {
            Some(seed) => sweep(points, seed),
            None => (Mesh::default(), collinear_hull(points)),
        };

        let mut inedges = vec![EMPTY; points.len()];
        for (e, &twin) in mesh.halfedges.iter().enumerate() {
            let p = mesh.triangles[next_halfedge(e)];
            if twin == EMPTY || inedges[p] == EMPTY {
                inedges[p] = e;
            }
        }

        let mut hull_index = vec![EMPTY; points.len()];
        for (i, &p) in hull.iter().enumerate() {
            hull_index[p] = i;
        }

        debug!(
            "triangulated {} points into {} triangles, {} on the hull",
            points.len(),
            mesh.triangles.len() / 3,
            hull.len()
        );

        Ok(Self {
            points: points.to_vec(),
            triangles: mesh.triangles,
            halfedges: mesh.halfedges,
            hull,
            inedges,
            hull_index,
        })
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// True when every point lies on one line and there are no triangles
    pub fn is_collinear(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn triangle(&self, t: usize) -> [usize; 3] {
        [
            self.triangles[3 * t],
            self.triangles[3 * t + 1],
            self.triangles[3 * t + 2],
        ]
    }

    /// Circumcenter of triangle `t`. A numerically flat triangle falls back to
    /// its centroid.
    pub fn circumcenter(&self, t: usize) -> [f64; 2] {
        let [a, b, c] = self.triangle(t).map(|i| self.points[i]);
        let center = circumcenter(a, b, c);
        if center[0].is_finite() && center[1].is_finite() {
            center
        } else {
            [(a[0] + b[0] + c[0]) / 3.0, (a[1] + b[1] + c[1]) / 3.0]
        }
    }

    /// Whether point `i` is a vertex of the triangulation. Later copies of a
    /// duplicated point are not.
    pub fn contains_point(&self, i: usize) -> bool {
        if self.is_collinear() {
            self.hull_index.get(i).is_some_and(|h| *h != EMPTY)
        } else {
            self.inedges.get(i).is_some_and(|e| *e != EMPTY)
        }
    }

    /// Incoming half-edges around the point `start` ends at, in order
    pub fn edges_around_point(&self, start: usize) -> Vec<usize> {
        let mut result = Vec::new();
        if start == EMPTY {
            return result;
        }
        let mut incoming = start;
        loop {
            result.push(incoming);
            let outgoing = next_halfedge(incoming);
            incoming = self.halfedges[outgoing];
            if incoming == EMPTY || incoming == start {
                break;
            }
        }
        result
    }

    /// Points sharing a triangulation edge with point `i`
    pub fn neighbors(&self, i: usize) -> Vec<usize> {
        let mut result = Vec::new();

        if self.is_collinear() {
            let l = match self.hull_index.get(i) {
                Some(&l) if l != EMPTY => l,
                _ => return result,
            };
            if l > 0 {
                result.push(self.hull[l - 1]);
            }
            if l + 1 < self.hull.len() {
                result.push(self.hull[l + 1]);
            }
            return result;
        }

        let e0 = match self.inedges.get(i) {
            Some(&e) if e != EMPTY => e,
            _ => return result,
        };
        let mut e = e0;
        loop {
            let p0 = self.triangles[e];
            result.push(p0);
            e = next_halfedge(e);
            if self.triangles[e] != i {
                break;
            }
            e = self.halfedges[e];
            if e == EMPTY {
                let p = self.hull[(self.hull_index[i] + 1) % self.hull.len()];
                if p != p0 {
                    result.push(p);
                }
                break;
            }
            if e == e0 {
                break;
            }
        }
        result
    }
}

pub fn next_halfedge(e: usize) -> usize {
    if e % 3 == 2 {
        e - 2
    } else {
        e + 1
    }
}

pub fn prev_halfedge(e: usize) -> usize {
    if e % 3 == 0 {
        e + 2
    } else {
        e - 1
    }
}

/// Triangle that owns half-edge `e`
pub fn triangle_of_edge(e: usize) -> usize {
    e / 3
}

fn dist2(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

fn nearly_equals(a: [f64; 2], b: [f64; 2]) -> bool {
    (a[0] - b[0]).abs() <= EPSILON && (a[1] - b[1]).abs() <= EPSILON
}

fn orient(p: [f64; 2], q: [f64; 2], r: [f64; 2]) -> bool {
    (q[1] - p[1]) * (r[0] - q[0]) - (q[0] - p[0]) * (r[1] - q[1]) < 0.0
}

/// Offset of the circumcenter of `abc` from `a`
fn circumdelta(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> [f64; 2] {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let ex = c[0] - a[0];
    let ey = c[1] - a[1];

    let bl = dx * dx + dy * dy;
    let cl = ex * ex + ey * ey;
    let d = 0.5 / (dx * ey - dy * ex);

    [(ey * bl - dy * cl) * d, (dx * cl - ex * bl) * d]
}

fn circumradius2(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> f64 {
    let [x, y] = circumdelta(a, b, c);
    x * x + y * y
}

fn circumcenter(a: [f64; 2], b: [f64; 2], c: [f64; 2]) -> [f64; 2] {
    let [x, y] = circumdelta(a, b, c);
    [a[0] + x, a[1] + y]
}

/// Whether `p` lies strictly inside the circumcircle of `abc`
fn in_circle(a: [f64; 2], b: [f64; 2], c: [f64; 2], p: [f64; 2]) -> bool {
    let dx = a[0] - p[0];
    let dy = a[1] - p[1];
    let ex = b[0] - p[0];
    let ey = b[1] - p[1];
    let fx = c[0] - p[0];
    let fy = c[1] - p[1];

    let ap = dx * dx + dy * dy;
    let bp = ex * ex + ey * ey;
    let cp = fx * fx + fy * fy;

    dx * (ey * cp - bp * fy) - dy * (ex * cp - bp * fx) + ap * (ex * fy - ey * fx) < 0.0
}

/// Seed triangle: the point closest to the bounding box center, its nearest
/// neighbor, and the point forming the smallest circumcircle with them.
/// Returns `None` when every point is collinear.
fn find_seed_triangle(points: &[[f64; 2]]) -> Option<(usize, usize, usize)> {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p[0]);
        min_y = min_y.min(p[1]);
        max_x = max_x.max(p[0]);
        max_y = max_y.max(p[1]);
    }
    let center = [(min_x + max_x) / 2.0, (min_y + max_y) / 2.0];

    // strict comparisons keep the lowest index among coincident candidates
    let mut i0 = EMPTY;
    let mut min_dist = f64::INFINITY;
    for (i, &p) in points.iter().enumerate() {
        let d = dist2(p, center);
        if d < min_dist {
            i0 = i;
            min_dist = d;
        }
    }
    let p0 = *points.get(i0)?;

    let mut i1 = EMPTY;
    min_dist = f64::INFINITY;
    for (i, &p) in points.iter().enumerate() {
        if i == i0 {
            continue;
        }
        let d = dist2(p0, p);
        if d < min_dist && d > 0.0 {
            i1 = i;
            min_dist = d;
        }
    }
    let p1 = *points.get(i1)?;

    let mut i2 = EMPTY;
    let mut min_radius = f64::INFINITY;
    for (i, &p) in points.iter().enumerate() {
        if i == i0 || i == i1 {
            continue;
        }
        let r = circumradius2(p0, p1, p);
        if r < min_radius {
            i2 = i;
            min_radius = r;
        }
    }
    let p2 = *points.get(i2)?;

    Some(if orient(p0, p1, p2) {
        (i0, i2, i1)
    } else {
        (i0, i1, i2)
    })
}

/// Distinct points sorted along the line they share
fn collinear_hull(points: &[[f64; 2]]) -> Vec<usize> {
    let origin = points[0];
    let project = |p: [f64; 2]| {
        let dx = p[0] - origin[0];
        if dx != 0.0 {
            dx
        } else {
            p[1] - origin[1]
        }
    };

    let mut ids: Vec<usize> = (0..points.len()).collect();
    ids.sort_by_key(|&i| (OrderedFloat(project(points[i])), i));
    ids.dedup_by_key(|i| OrderedFloat(project(points[*i])));
    ids
}

#[derive(Debug, Default)]
struct Mesh {
    triangles: Vec<usize>,
    halfedges: Vec<usize>,
}

impl Mesh {
    fn with_capacity(n: usize) -> Self {
        let max_triangles = if n > 2 { 2 * n - 5 } else { 0 };
        Self {
            triangles: Vec::with_capacity(max_triangles * 3),
            halfedges: Vec::with_capacity(max_triangles * 3),
        }
    }

    fn link(&mut self, a: usize, b: usize) {
        self.halfedges[a] = b;
        if b != EMPTY {
            self.halfedges[b] = a;
        }
    }

    fn add_triangle(
        &mut self,
        i0: usize,
        i1: usize,
        i2: usize,
        a: usize,
        b: usize,
        c: usize,
    ) -> usize {
        let t = self.triangles.len();
        self.triangles.extend([i0, i1, i2]);
        self.halfedges.extend([EMPTY; 3]);
        self.link(t, a);
        self.link(t + 1, b);
        self.link(t + 2, c);
        t
    }

    /// Flips edges until the triangles around `a` satisfy the empty
    /// circumcircle condition. Returns the half-edge preceding the last
    /// checked edge.
    fn legalize(&mut self, a: usize, points: &[[f64; 2]], hull: &mut Hull) -> usize {
        let mut stack = Vec::new();
        let mut a = a;
        let mut ar;

        loop {
            let b = self.halfedges[a];
            ar = prev_halfedge(a);

            if b == EMPTY {
                match stack.pop() {
                    Some(next) => {
                        a = next;
                        continue;
                    }
                    None => break,
                }
            }

            let al = next_halfedge(a);
            let bl = prev_halfedge(b);

            let p0 = self.triangles[ar];
            let pr = self.triangles[a];
            let pl = self.triangles[al];
            let p1 = self.triangles[bl];

            if in_circle(points[p0], points[pr], points[pl], points[p1]) {
                self.triangles[a] = p1;
                self.triangles[b] = p0;

                let hbl = self.halfedges[bl];
                let har = self.halfedges[ar];

                // the flipped edge was on the hull, repoint the hull triangle
                if hbl == EMPTY {
                    hull.retarget(bl, a);
                }

                self.link(a, hbl);
                self.link(b, har);
                self.link(ar, bl);

                stack.push(next_halfedge(b));
            } else {
                match stack.pop() {
                    Some(next) => a = next,
                    None => break,
                }
            }
        }

        ar
    }
}

/// Doubly linked convex hull with an angular hash for finding visible edges
#[derive(Debug)]
struct Hull {
    prev: Vec<usize>,
    next: Vec<usize>,
    tri: Vec<usize>,
    hash: Vec<usize>,
    start: usize,
    center: [f64; 2],
}

impl Hull {
    fn new(n: usize, center: [f64; 2], seed: (usize, usize, usize), points: &[[f64; 2]]) -> Self {
        let (i0, i1, i2) = seed;
        let hash_len = ((n as f64).sqrt().ceil() as usize).max(1);

        let mut hull = Self {
            prev: vec![0; n],
            next: vec![0; n],
            tri: vec![0; n],
            hash: vec![EMPTY; hash_len],
            start: i0,
            center,
        };

        hull.next[i0] = i1;
        hull.prev[i2] = i1;
        hull.next[i1] = i2;
        hull.prev[i0] = i2;
        hull.next[i2] = i0;
        hull.prev[i1] = i0;

        hull.tri[i0] = 0;
        hull.tri[i1] = 1;
        hull.tri[i2] = 2;

        hull.hash_edge(points[i0], i0);
        hull.hash_edge(points[i1], i1);
        hull.hash_edge(points[i2], i2);

        hull
    }

    fn hash_key(&self, p: [f64; 2]) -> usize {
        let dx = p[0] - self.center[0];
        let dy = p[1] - self.center[1];

        // pseudo-angle in [0, 1)
        let p = dx / (dx.abs() + dy.abs());
        let a = (if dy > 0.0 { 3.0 - p } else { 1.0 + p }) / 4.0;

        let len = self.hash.len();
        (((len as f64) * a).floor() as usize) % len
    }

    fn hash_edge(&mut self, p: [f64; 2], i: usize) {
        let key = self.hash_key(p);
        self.hash[key] = i;
    }

    /// First hull edge visible from `p`, and whether it is the edge the
    /// search started from (in which case the hull must also be walked
    /// backward). `None` when no edge is visible, which happens for points
    /// coinciding with an inserted point.
    fn find_visible_edge(&self, p: [f64; 2], points: &[[f64; 2]]) -> Option<(usize, bool)> {
        let key = self.hash_key(p);
        let len = self.hash.len();

        let mut start = EMPTY;
        for j in 0..len {
            start = self.hash[(key + j) % len];
            if start != EMPTY && self.next[start] != EMPTY {
                break;
            }
        }
        if start == EMPTY {
            return None;
        }

        start = self.prev[start];
        let mut e = start;
        while !orient(p, points[e], points[self.next[e]]) {
            e = self.next[e];
            if e == start {
                return None;
            }
        }
        Some((e, e == start))
    }

    fn retarget(&mut self, from: usize, to: usize) {
        let mut e = self.start;
        loop {
            if self.tri[e] == from {
                self.tri[e] = to;
                break;
            }
            e = self.prev[e];
            if e == self.start {
                break;
            }
        }
    }

    fn to_vec(&self) -> Vec<usize> {
        let mut result = Vec::new();
        let mut e = self.start;
        for _ in 0..self.next.len() {
            result.push(e);
            e = self.next[e];
            if e == self.start {
                break;
            }
        }
        result
    }
}

fn sweep(points: &[[f64; 2]], seed: (usize, usize, usize)) -> (Mesh, Vec<usize>) {
    let (i0, i1, i2) = seed;
    let n = points.len();
    let center = circumcenter(points[i0], points[i1], points[i2]);

    // ties keep index order so the first of several coincident points wins
    let mut ids: Vec<usize> = (0..n).collect();
    ids.sort_by_key(|&i| (OrderedFloat(dist2(points[i], center)), i));

    let mut mesh = Mesh::with_capacity(n);
    mesh.add_triangle(i0, i1, i2, EMPTY, EMPTY, EMPTY);
    let mut hull = Hull::new(n, center, seed, points);

    for (k, &i) in ids.iter().enumerate() {
        let p = points[i];

        if k > 0 && nearly_equals(p, points[ids[k - 1]]) {
            continue;
        }
        if i == i0 || i == i1 || i == i2 {
            continue;
        }

        let Some((mut e, walk_back)) = hull.find_visible_edge(p, points) else {
            continue;
        };

        let t = mesh.add_triangle(e, i, hull.next[e], EMPTY, EMPTY, hull.tri[e]);
        hull.tri[i] = mesh.legalize(t + 2, points, &mut hull);
        hull.tri[e] = t;

        // walk forward through the hull
        let mut n = hull.next[e];
        loop {
            let q = hull.next[n];
            if !orient(p, points[n], points[q]) {
                break;
            }
            let t = mesh.add_triangle(n, i, q, hull.tri[i], EMPTY, hull.tri[n]);
            hull.tri[i] = mesh.legalize(t + 2, points, &mut hull);
            hull.next[n] = EMPTY;
            n = q;
        }

        // walk backward from the other side
        if walk_back {
            loop {
                let q = hull.prev[e];
                if !orient(p, points[q], points[e]) {
                    break;
                }
                let t = mesh.add_triangle(q, i, e, EMPTY, hull.tri[e], hull.tri[q]);
                mesh.legalize(t + 2, points, &mut hull);
                hull.tri[q] = t;
                hull.next[e] = EMPTY;
                e = q;
            }
        }

        hull.prev[i] = e;
        hull.next[i] = n;
        hull.prev[n] = i;
        hull.next[e] = i;
        hull.start = e;

        hull.hash_edge(p, i);
        hull.hash_edge(points[e], e);
    }

    let ring = hull.to_vec();
    (mesh, ring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_points(seed: u64, n: usize) -> Vec<[f64; 2]> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| [rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)])
            .collect()
    }

    fn assert_halfedges_symmetric(delaunay: &Delaunay) {
        for (e, &twin) in delaunay.halfedges.iter().enumerate() {
            if twin != EMPTY {
                assert_eq!(delaunay.halfedges[twin], e);
                // twins run in opposite directions
                assert_eq!(delaunay.triangles[e], delaunay.triangles[next_halfedge(twin)]);
            }
        }
    }

    #[test]
    fn test_single_triangle() {
        let delaunay = Delaunay::new(&[[0.0, 0.0], [10.0, 0.0], [5.0, 10.0]]).unwrap();
        assert_eq!(delaunay.triangle_count(), 1);
        assert_eq!(delaunay.halfedges, vec![EMPTY; 3]);

        let mut hull = delaunay.hull.clone();
        hull.sort();
        assert_eq!(hull, vec![0, 1, 2]);

        let mut neighbors = delaunay.neighbors(0);
        neighbors.sort();
        assert_eq!(neighbors, vec![1, 2]);

        let center = delaunay.circumcenter(0);
        assert!((center[0] - 5.0).abs() < 1e-12);
        assert!((center[1] - 3.75).abs() < 1e-12);
    }

    #[test]
    fn test_square() {
        let points = [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [5.0, 4.0]];
        let delaunay = Delaunay::new(&points).unwrap();
        assert_eq!(delaunay.triangle_count(), 4);
        assert_eq!(delaunay.hull.len(), 4);
        assert_halfedges_symmetric(&delaunay);

        let mut neighbors = delaunay.neighbors(4);
        neighbors.sort();
        assert_eq!(neighbors, vec![0, 1, 2, 3]);
        assert_eq!(delaunay.edges_around_point(delaunay.inedges[4]).len(), 4);
    }

    #[test]
    fn test_empty_circumcircles() {
        let points = random_points(42, 300);
        let delaunay = Delaunay::new(&points).unwrap();
        assert_halfedges_symmetric(&delaunay);

        // general position: T = 2n - 2 - h
        assert_eq!(
            delaunay.triangle_count(),
            2 * points.len() - 2 - delaunay.hull.len()
        );

        for t in 0..delaunay.triangle_count() {
            let [a, b, c] = delaunay.triangle(t);
            let center = delaunay.circumcenter(t);
            let r2 = dist2(points[a], center);
            for (i, p) in points.iter().enumerate() {
                if i == a || i == b || i == c {
                    continue;
                }
                assert!(
                    dist2(*p, center) >= r2 * (1.0 - 1e-9),
                    "point {i} inside circumcircle of triangle {t}"
                );
            }
        }
    }

    #[test]
    fn test_collinear() {
        let points = [[3.0, 3.0], [0.0, 0.0], [2.0, 2.0], [1.0, 1.0], [2.0, 2.0]];
        let delaunay = Delaunay::new(&points).unwrap();
        assert!(delaunay.is_collinear());
        assert_eq!(delaunay.triangle_count(), 0);
        assert_eq!(delaunay.hull, vec![1, 3, 2, 0]);

        assert_eq!(delaunay.neighbors(3), vec![1, 2]);
        assert_eq!(delaunay.neighbors(0), vec![2]);
        assert!(delaunay.neighbors(4).is_empty());
        assert!(!delaunay.contains_point(4));
    }

    #[test]
    fn test_vertical_line() {
        let points = [[1.0, 5.0], [1.0, -2.0], [1.0, 0.0]];
        let delaunay = Delaunay::new(&points).unwrap();
        assert_eq!(delaunay.hull, vec![1, 2, 0]);
    }

    #[test]
    fn test_duplicates_are_not_inserted() {
        let points = [
            [0.0, 0.0],
            [5.0, 5.0],
            [10.0, 0.0],
            [10.0, 10.0],
            [5.0, 5.0],
            [0.0, 10.0],
        ];
        let delaunay = Delaunay::new(&points).unwrap();
        assert!(delaunay.contains_point(1));
        assert!(!delaunay.contains_point(4));
        assert_eq!(delaunay.inedges[4], EMPTY);
        assert!(!delaunay.triangles.contains(&4));
        assert!(delaunay.neighbors(4).is_empty());
        assert_eq!(delaunay.triangle_count(), 4);
    }

    #[test]
    fn test_insufficient_points() {
        assert_eq!(
            Delaunay::new(&[[0.0, 0.0], [1.0, 1.0]]).unwrap_err(),
            GeometryError::InsufficientPoints { distinct: 2 }
        );
        assert_eq!(
            Delaunay::new(&[[0.0, 0.0], [1.0, 1.0], [1.0, 1.0]]).unwrap_err(),
            GeometryError::InsufficientPoints { distinct: 2 }
        );
        assert_eq!(
            Delaunay::new(&[]).unwrap_err(),
            GeometryError::InsufficientPoints { distinct: 0 }
        );
    }

    #[test]
    fn test_non_finite_coordinate() {
        assert_eq!(
            Delaunay::new(&[[0.0, 0.0], [f64::NAN, 1.0], [2.0, 0.0]]).unwrap_err(),
            GeometryError::NonFiniteCoordinate(1)
        );
        assert_eq!(
            Delaunay::new(&[[0.0, 0.0], [1.0, 1.0], [2.0, f64::INFINITY]]).unwrap_err(),
            GeometryError::NonFiniteCoordinate(2)
        );
    }

    #[test]
    fn test_grid_with_cocircular_points() {
        let points: Vec<[f64; 2]> = (0..10)
            .flat_map(|i| (0..10).map(move |j| [i as f64, j as f64]))
            .collect();
        let delaunay = Delaunay::new(&points).unwrap();
        assert_halfedges_symmetric(&delaunay);
        assert_eq!(delaunay.triangle_count(), 2 * 9 * 9);
        assert!((0..points.len()).all(|i| delaunay.contains_point(i)));
    }
}
