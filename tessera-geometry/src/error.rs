#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("At least 3 distinct points are required, found {distinct}")]
    InsufficientPoints { distinct: usize },

    #[error("Invalid clip bounds ({xmin}, {ymin}, {xmax}, {ymax})")]
    InvalidBounds {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },

    #[error("Point {0} has a non-finite coordinate")]
    NonFiniteCoordinate(usize),
}
