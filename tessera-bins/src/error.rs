use tessera_common::AccessorError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BinError {
    #[error("Invalid bin domain: {0}")]
    InvalidDomain(String),

    #[error("Bin count must be between 1 and {max}, got {0}", max = crate::threshold::MAX_THRESHOLD_COUNT)]
    InvalidThresholdCount(usize),

    #[error(transparent)]
    Accessor(#[from] AccessorError),
}
