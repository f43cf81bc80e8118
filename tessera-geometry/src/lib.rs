pub mod clip;
pub mod delaunay;
pub mod error;
pub mod rtree;
pub mod voronoi;

pub use clip::ClipBounds;
pub use delaunay::Delaunay;
pub use error::GeometryError;
pub use rtree::{SiteInstance, SiteRTree};
pub use voronoi::Voronoi;
