//! Shallow property defaulting across ordered sources.

use crate::record::Record;
use crate::value::Value;

/// Fill missing properties of `destination` from `sources`, left to right.
///
/// The destination resolves first: nullish values become a fresh empty
/// record, a record destination is used as-is (the returned handle is the
/// same one passed in), and any other primitive is boxed via
/// [`Record::wrapping`]. Each non-nullish source is then enumerated — own
/// enumerable string keys first, symbol keys after — and a key is copied
/// only when the destination holds nothing usable there (`Undefined` or
/// `Null`) and the source holds something usable. Values already present
/// on the destination always win, including falsy ones such as `false`,
/// `0`, or `""`.
///
/// Copies are shallow: nested lists and records are shared by handle,
/// never cloned. Sources are never mutated. A destination property that
/// refuses a write because its slot is read-only is skipped silently; the
/// refusal is reported only as a `tracing` trace event.
///
/// ```rust
/// use prop_defaults::{defaults, Record, Value};
///
/// let requested = Record::new();
/// requested.set("role".into(), "reader".into())?;
///
/// let fallback = Record::new();
/// fallback.set("role".into(), "editor".into())?;
/// fallback.set("pages".into(), Value::Int(12))?;
///
/// let merged = defaults(Value::Record(requested.clone()), [Value::Record(fallback)]);
/// assert!(merged.ptr_eq(&requested));
/// assert_eq!(merged.get(&"role".into()), Value::from("reader"));
/// assert_eq!(merged.get(&"pages".into()), Value::Int(12));
/// # Ok::<_, prop_defaults::RecordError>(())
/// ```
#[must_use]
pub fn defaults<I>(destination: Value, sources: I) -> Record
where
    I: IntoIterator<Item = Value>,
{
    let resolved = resolve_destination(destination);
    for source in sources {
        fill_from(&resolved, source);
    }
    resolved
}

fn resolve_destination(destination: Value) -> Record {
    match destination {
        Value::Undefined | Value::Null => Record::new(),
        Value::Record(record) => record,
        primitive => Record::wrapping(primitive),
    }
}

fn fill_from(destination: &Record, source: Value) {
    let supplier = match source {
        Value::Undefined | Value::Null => return,
        Value::Record(record) => record,
        primitive => Record::wrapping(primitive),
    };
    for key in supplier.enumerable_keys() {
        if !destination.get(&key).is_nullish() {
            continue;
        }
        let incoming = supplier.get(&key);
        if incoming.is_nullish() {
            continue;
        }
        if let Err(error) = destination.set(key, incoming) {
            tracing::trace!(%error, "destination property refused the write");
        }
    }
}
