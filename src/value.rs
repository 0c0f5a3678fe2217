//! The tagged-union payload type shared by the table demos and drivers.

use core::ptr;

/// A tagged union payload.
///
/// Lets one table hold heterogeneous values: an opaque pointer-sized
/// payload, a 32-bit integer, or a single/double-precision float. The tag
/// must be inspected before the payload is interpreted; the accessors
/// below return `None` on a tag mismatch rather than reinterpreting bits.
///
/// Slot occupancy is tracked by the table itself, so `Value::null()` is an
/// ordinary storable value — storing it and reading it back works like any
/// other payload and is never confused with "not found".
///
/// # Examples
///
/// ```rust
/// use probe_hash::IntTable;
/// use probe_hash::Value;
///
/// let mut table: IntTable<Value> = IntTable::new();
/// table.insert(1, Value::Int(42));
/// table.insert(2, Value::Double(2.5));
/// table.insert(3, Value::null());
///
/// assert_eq!(table.get(&1).and_then(Value::as_int), Some(42));
/// assert_eq!(table.get(&2).and_then(Value::as_double), Some(2.5));
/// // A stored null pointer is still "found".
/// assert!(table.get(&3).is_some_and(Value::is_null));
/// assert_eq!(table.get(&4), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// An opaque, untyped payload address. The table never dereferences
    /// it; lifetime and validity are the caller's business.
    Ptr(*const ()),
    /// A 32-bit signed integer.
    Int(i32),
    /// A single-precision float.
    Float(f32),
    /// A double-precision float.
    Double(f64),
}

impl Value {
    /// A null [`Value::Ptr`].
    #[inline]
    pub const fn null() -> Self {
        Value::Ptr(ptr::null())
    }

    /// Returns `true` if this is a null [`Value::Ptr`].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Ptr(p) if p.is_null())
    }

    /// Returns the pointer payload, or `None` for other tags.
    #[inline]
    pub fn as_ptr(&self) -> Option<*const ()> {
        match self {
            Value::Ptr(p) => Some(*p),
            _ => None,
        }
    }

    /// Returns the integer payload, or `None` for other tags.
    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the single-precision payload, or `None` for other tags.
    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the double-precision payload, or `None` for other tags.
    #[inline]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}
