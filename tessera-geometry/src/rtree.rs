use rstar::{Envelope, PointDistance, RTree, RTreeObject, AABB};

/// A Voronoi site with its record index for storage in the R-tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteInstance {
    pub id: usize,
    pub point: [f64; 2],
}

impl RTreeObject for SiteInstance {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SiteInstance {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }

    fn contains_point(&self, point: &[f64; 2]) -> bool {
        self.point == *point
    }
}

/// Nearest-site lookup backing `Voronoi::locate`
#[derive(Debug, Clone)]
pub struct SiteRTree {
    rtree: RTree<SiteInstance>,
    envelope: AABB<[f64; 2]>,
}

impl SiteRTree {
    pub fn new(points: &[[f64; 2]]) -> Self {
        let sites: Vec<SiteInstance> = points
            .iter()
            .enumerate()
            .map(|(id, &point)| SiteInstance { id, point })
            .collect();

        let envelope = sites
            .iter()
            .map(|s| s.envelope())
            .reduce(|a, b| a.merged(&b))
            .unwrap_or_else(AABB::new_empty);

        // Bulk load the sites into an R-tree
        let rtree = RTree::bulk_load(sites);

        Self { rtree, envelope }
    }

    /// Returns the envelope of all sites
    pub fn envelope(&self) -> &AABB<[f64; 2]> {
        &self.envelope
    }

    /// Returns the number of sites in the tree
    pub fn size(&self) -> usize {
        self.rtree.size()
    }

    /// Returns all sites sorted by their squared distance to a given point
    pub fn nearest_neighbor_iter_with_distance_2(
        &self,
        query_point: &[f64; 2],
    ) -> impl Iterator<Item = (&SiteInstance, f64)> + '_ {
        self.rtree
            .nearest_neighbor_iter_with_distance_2(query_point)
    }

    /// Returns every site at the minimal distance from a given point
    pub fn nearest_neighbors(&self, query_point: &[f64; 2]) -> Vec<&SiteInstance> {
        let mut iter = self.nearest_neighbor_iter_with_distance_2(query_point);
        let Some((first, best)) = iter.next() else {
            return Vec::new();
        };
        let mut result = vec![first];
        result.extend(
            iter.take_while(|(_, d2)| *d2 == best)
                .map(|(site, _)| site),
        );
        result
    }

    /// Index of the nearest site, the lowest index among exact ties
    pub fn nearest(&self, query_point: &[f64; 2]) -> Option<usize> {
        self.nearest_with_distance_2(query_point).map(|(id, _)| id)
    }

    /// Like [`SiteRTree::nearest`], but only within `radius` of the point
    pub fn nearest_within(&self, query_point: &[f64; 2], radius: f64) -> Option<usize> {
        self.nearest_with_distance_2(query_point)
            .filter(|(_, d2)| *d2 <= radius * radius)
            .map(|(id, _)| id)
    }

    fn nearest_with_distance_2(&self, query_point: &[f64; 2]) -> Option<(usize, f64)> {
        let mut iter = self.nearest_neighbor_iter_with_distance_2(query_point);
        let (first, best) = iter.next()?;
        let id = iter
            .take_while(|(_, d2)| *d2 == best)
            .fold(first.id, |id, (site, _)| id.min(site.id));
        Some((id, best))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_site() {
        let tree = SiteRTree::new(&[[0.0, 0.0], [10.0, 0.0], [5.0, 10.0]]);
        assert_eq!(tree.size(), 3);
        assert_eq!(tree.nearest(&[1.0, 1.0]), Some(0));
        assert_eq!(tree.nearest(&[9.0, 2.0]), Some(1));
        assert_eq!(tree.nearest(&[5.0, 8.0]), Some(2));
        assert_eq!(tree.envelope().lower(), [0.0, 0.0]);
        assert_eq!(tree.envelope().upper(), [10.0, 10.0]);
    }

    #[test]
    fn test_ties_resolve_to_lowest_index() {
        let tree = SiteRTree::new(&[[4.0, 4.0], [0.0, 0.0], [2.0, 2.0], [0.0, 0.0]]);
        assert_eq!(tree.nearest(&[0.0, 0.0]), Some(1));
        // equidistant from sites 1, 2 and 3
        assert_eq!(tree.nearest(&[1.0, 1.0]), Some(1));
        assert_eq!(tree.nearest_neighbors(&[1.0, 1.0]).len(), 3);
    }

    #[test]
    fn test_nearest_within() {
        let tree = SiteRTree::new(&[[0.0, 0.0], [10.0, 0.0]]);
        assert_eq!(tree.nearest_within(&[3.0, 4.0], 5.0), Some(0));
        assert_eq!(tree.nearest_within(&[3.0, 4.1], 5.0), None);
    }

    #[test]
    fn test_sites_ordered_by_distance() {
        let tree = SiteRTree::new(&[[0.0, 0.0], [10.0, 0.0], [3.0, 0.0]]);
        let ordered: Vec<(usize, f64)> = tree
            .nearest_neighbor_iter_with_distance_2(&[1.0, 0.0])
            .map(|(site, d2)| (site.id, d2))
            .collect();
        assert_eq!(ordered, vec![(0, 1.0), (2, 4.0), (1, 81.0)]);
    }

    #[test]
    fn test_empty_tree() {
        let tree = SiteRTree::new(&[]);
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.nearest(&[0.0, 0.0]), None);
    }
}
