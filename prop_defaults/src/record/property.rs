//! Property slots and the attribute builder used to install them.

use crate::value::Value;

/// Storage for one own property: its value plus attribute flags.
#[derive(Clone, Debug)]
pub(super) struct Slot {
    pub(super) value: Value,
    pub(super) enumerable: bool,
    pub(super) writable: bool,
}

/// Builder describing a property for [`Record::define`].
///
/// Properties start out enumerable and writable, matching what a plain
/// [`Record::set`] would create; the builder methods opt out of either
/// attribute.
///
/// [`Record::define`]: crate::Record::define
/// [`Record::set`]: crate::Record::set
#[derive(Clone, Debug)]
pub struct Property {
    value: Value,
    enumerable: bool,
    writable: bool,
}

impl Property {
    /// A property holding `value`, enumerable and writable.
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            enumerable: true,
            writable: true,
        }
    }

    /// Set whether the property shows up during enumeration.
    #[must_use]
    pub const fn enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = enumerable;
        self
    }

    /// Set whether the property accepts later writes.
    #[must_use]
    pub const fn writable(mut self, writable: bool) -> Self {
        self.writable = writable;
        self
    }

    pub(super) fn into_slot(self) -> Slot {
        Slot {
            value: self.value,
            enumerable: self.enumerable,
            writable: self.writable,
        }
    }
}
