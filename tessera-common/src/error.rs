/// An accessor that could not produce a number or undefined for a record.
///
/// This signals a caller bug (wrong field, wrong type) and is always
/// propagated rather than filtered.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccessorError {
    #[error("Field {field:?} holds a {found} value, expected a number")]
    NonNumeric { field: String, found: &'static str },

    #[error("Accessor failed: {0}")]
    Custom(String),
}
