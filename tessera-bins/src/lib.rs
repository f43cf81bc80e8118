pub mod bin;
pub mod error;
pub mod threshold;

pub use bin::{Bin, BinGenerator, Histogram};
pub use error::BinError;
pub use threshold::ThresholdStrategy;
