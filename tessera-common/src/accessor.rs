use crate::error::AccessorError;
use crate::value::{Record, Value};

/// Extracts one numeric dimension from a record.
///
/// `Ok(None)` means the value is undefined for this record, which consumers
/// treat as "skip this record". An `Err` is a caller bug and is propagated.
pub trait Accessor<R> {
    fn value(&self, record: &R) -> Result<Option<f64>, AccessorError>;

    /// Returns the defined, non-NaN values of `data` along with their position
    fn values(&self, data: &[R]) -> Result<Vec<(usize, f64)>, AccessorError> {
        let mut values = Vec::with_capacity(data.len());
        for (index, record) in data.iter().enumerate() {
            match self.value(record)? {
                Some(v) if !v.is_nan() => values.push((index, v)),
                _ => {}
            }
        }
        Ok(values)
    }
}

impl<R, F> Accessor<R> for F
where
    F: Fn(&R) -> Result<Option<f64>, AccessorError>,
{
    fn value(&self, record: &R) -> Result<Option<f64>, AccessorError> {
        self(record)
    }
}

/// Adapts a closure that cannot fail into an [`Accessor`]
#[derive(Debug, Clone, Copy)]
pub struct Infallible<F>(pub F);

impl<R, F> Accessor<R> for Infallible<F>
where
    F: Fn(&R) -> Option<f64>,
{
    fn value(&self, record: &R) -> Result<Option<f64>, AccessorError> {
        Ok((self.0)(record))
    }
}

/// Reads a named numeric field of a [`Record`].
///
/// Missing fields and nulls are undefined. Text or boolean values are an
/// error: they mean the accessor points at the wrong column.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAccessor {
    field: String,
}

impl FieldAccessor {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl Accessor<Record> for FieldAccessor {
    fn value(&self, record: &Record) -> Result<Option<f64>, AccessorError> {
        match record.get(&self.field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(v)) => Ok(Some(*v)),
            Some(other) => Err(AccessorError::NonNumeric {
                field: self.field.clone(),
                found: other.kind(),
            }),
        }
    }
}
