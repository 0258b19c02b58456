//! Sequential access to a value sequence.
//!
//! [`Writer`] appends values and [`Cursor`] takes them back in the same
//! order. Both convert between `Option` and the `-1` sentinel, so the
//! sentinel never leaks past this module.

use crate::schema::ABSENT;
use crate::{CodecError, Value};

/// Appends values to a sequence.
#[derive(Debug, Default)]
pub(crate) struct Writer {
    values: Vec<Value>,
}

impl Writer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn int(&mut self, value: i64) {
        self.values.push(Value::Int(value));
    }

    /// Writes an optional id, `-1` when absent.
    pub(crate) fn id(&mut self, id: Option<u32>) {
        self.int(id.map_or(ABSENT, i64::from));
    }

    /// Writes a nested list filled by `fill`.
    pub(crate) fn list(&mut self, fill: impl FnOnce(&mut Writer)) {
        let mut nested = Writer::new();
        fill(&mut nested);
        self.values.push(Value::List(nested.values));
    }

    pub(crate) fn finish(self) -> Vec<Value> {
        self.values
    }
}

/// Takes values from a sequence, front to back.
///
/// Each take names the field it expects so errors point at the right
/// place. [`finish`](Self::finish) fails if anything is left over.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    values: std::slice::Iter<'a, Value>,
    context: &'static str,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(values: &'a [Value], context: &'static str) -> Self {
        Self { values: values.iter(), context }
    }

    fn take(&mut self, field: &'static str) -> Result<&'a Value, CodecError> {
        self.values.next().ok_or(CodecError::MissingValue(field))
    }

    pub(crate) fn int(&mut self, field: &'static str) -> Result<i64, CodecError> {
        match self.take(field)? {
            Value::Int(value) => Ok(*value),
            Value::List(_) => Err(CodecError::UnexpectedKind { field, expected: "an integer" }),
        }
    }

    /// Takes an integer that must fit in `T`.
    pub(crate) fn ranged<T: TryFrom<i64>>(&mut self, field: &'static str) -> Result<T, CodecError> {
        let value = self.int(field)?;
        T::try_from(value).map_err(|_| CodecError::OutOfRange { field, value })
    }

    /// Takes an optional id: `-1` or anything [`Writer::id`] can write.
    pub(crate) fn id(&mut self, field: &'static str) -> Result<Option<u32>, CodecError> {
        match self.int(field)? {
            ABSENT => Ok(None),
            value => u32::try_from(value)
                .map(Some)
                .map_err(|_| CodecError::OutOfRange { field, value }),
        }
    }

    /// Takes a nested list and returns a cursor over its items.
    pub(crate) fn list(&mut self, field: &'static str) -> Result<Cursor<'a>, CodecError> {
        match self.take(field)? {
            Value::List(items) => Ok(Cursor::new(items, field)),
            Value::Int(_) => Err(CodecError::UnexpectedKind { field, expected: "a list" }),
        }
    }

    /// Ends the read, rejecting leftover values.
    pub(crate) fn finish(mut self) -> Result<(), CodecError> {
        match self.values.next() {
            Some(_) => Err(CodecError::TrailingValue(self.context)),
            None => Ok(()),
        }
    }
}
