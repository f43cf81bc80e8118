use tessera_common::AccessorError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleError {
    #[error("Empty range")]
    EmptyRange,

    #[error("Invalid color {0:?}")]
    InvalidColor(String),

    #[error(transparent)]
    Accessor(#[from] AccessorError),
}
