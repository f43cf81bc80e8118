pub mod array;
pub mod color;
pub mod error;
pub mod linear;

pub use color::ColorScale;
pub use error::ScaleError;
pub use linear::{LinearScale, LinearScaleConfig};
