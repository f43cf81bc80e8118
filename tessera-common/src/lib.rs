pub mod accessor;
pub mod canvas;
pub mod error;
pub mod value;

pub use accessor::{Accessor, FieldAccessor, Infallible};
pub use canvas::{Dimensions, Margin};
pub use error::AccessorError;
pub use value::{Record, Value};
