//! Insertion-ordered property records with shared-handle identity.
//!
//! A [`Record`] is the dynamic mapping the rest of the crate operates on:
//! own properties only (there is no inheritance chain to exclude), keyed
//! by [`PropKey`], each slot carrying enumerability and writability
//! attributes alongside its [`Value`].

mod property;


use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::RecordError;
use crate::key::PropKey;
use crate::value::Value;

pub use property::Property;

use property::Slot;

#[derive(Default)]
struct RecordInner {
    primitive: Option<Value>,
    slots: IndexMap<PropKey, Slot>,
}

/// A shared, insertion-ordered property map.
///
/// `Record` is a cheap handle: cloning it clones the handle, not the
/// contents, and every clone observes the same mutations. Handle identity
/// is observable through [`Record::ptr_eq`]; `==` compares own enumerable
/// contents structurally instead.
///
/// Handles are single-threaded (`Rc`-based) and perform no internal
/// synchronization. Because records can be nested through shared handles,
/// cyclic graphs are constructible; structural equality and `Debug`
/// recurse through nested records and will not terminate on a cycle,
/// whereas [`Record::ptr_eq`] and [`Value::same`] always will.
#[derive(Clone, Default)]
pub struct Record(Rc<RefCell<RecordInner>>);

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Box a primitive value into a fresh record carrying it as payload.
    ///
    /// Boxing a string materializes its character positions as own
    /// enumerable, read-only properties; other primitives own no
    /// properties. The payload stays readable via [`Record::primitive`].
    #[must_use]
    pub fn wrapping(primitive: Value) -> Self {
        let record = Self::new();
        if let Value::Str(text) = &primitive {
            for (position, ch) in text.chars().enumerate() {
                record.define(
                    PropKey::Name(position.to_string()),
                    Property::new(ch.to_string()).writable(false),
                );
            }
        }
        record.0.borrow_mut().primitive = Some(primitive);
        record
    }

    /// The boxed primitive payload, when this record wraps one.
    #[must_use]
    pub fn primitive(&self) -> Option<Value> {
        self.0.borrow().primitive.clone()
    }

    /// Handle identity: true when both handles share one record.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Read an own property, [`Value::Undefined`] when absent.
    ///
    /// Non-enumerable properties read like any other.
    #[must_use]
    pub fn get(&self, key: &PropKey) -> Value {
        self.0
            .borrow()
            .slots
            .get(key)
            .map_or(Value::Undefined, |slot| slot.value.clone())
    }

    /// Whether an own property exists under `key`, enumerable or not.
    #[must_use]
    pub fn contains(&self, key: &PropKey) -> bool {
        self.0.borrow().slots.contains_key(key)
    }

    /// Create or update an own property.
    ///
    /// New properties are enumerable and writable; updating keeps the
    /// slot's attributes and insertion position.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::ReadOnly`] when the existing slot is not
    /// writable. The stored value is left untouched.
    pub fn set(&self, key: PropKey, value: Value) -> Result<(), RecordError> {
        let mut inner = self.0.borrow_mut();
        if let Some(slot) = inner.slots.get_mut(&key) {
            if !slot.writable {
                return Err(RecordError::ReadOnly { key });
            }
            slot.value = value;
            return Ok(());
        }
        inner.slots.insert(
            key,
            Slot {
                value,
                enumerable: true,
                writable: true,
            },
        );
        Ok(())
    }

    /// Install a property with explicit attributes, replacing any existing
    /// slot under the same key while keeping its insertion position.
    pub fn define(&self, key: PropKey, property: Property) {
        self.0.borrow_mut().slots.insert(key, property.into_slot());
    }

    /// Own enumerable key/value pairs: string keys first in insertion
    /// order, then symbol keys in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<(PropKey, Value)> {
        let inner = self.0.borrow();
        let mut pairs = Vec::new();
        for (key, slot) in &inner.slots {
            if slot.enumerable && key.is_name() {
                pairs.push((key.clone(), slot.value.clone()));
            }
        }
        for (key, slot) in &inner.slots {
            if slot.enumerable && key.is_symbol() {
                pairs.push((key.clone(), slot.value.clone()));
            }
        }
        pairs
    }

    /// Own enumerable keys in [`Record::entries`] order.
    #[must_use]
    pub fn enumerable_keys(&self) -> Vec<PropKey> {
        self.entries().into_iter().map(|(key, _)| key).collect()
    }

    /// Number of own properties, enumerable or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().slots.len()
    }

    /// Whether the record owns no properties at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().slots.is_empty()
    }

    fn enumerable_get(&self, key: &PropKey) -> Option<Value> {
        self.0
            .borrow()
            .slots
            .get(key)
            .filter(|slot| slot.enumerable)
            .map(|slot| slot.value.clone())
    }

    fn structural_eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let mine = self.entries();
        mine.len() == other.entries().len()
            && mine.iter().all(|(key, value)| {
                other
                    .enumerable_get(key)
                    .is_some_and(|found| found == *value)
            })
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.0.borrow();
        let mut map = f.debug_map();
        for (key, slot) in &inner.slots {
            map.entry(&key.to_string(), &slot.value);
        }
        map.finish()
    }
}
