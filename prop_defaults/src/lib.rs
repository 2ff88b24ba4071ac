//! Shallow property defaulting for dynamic, insertion-ordered records.
//!
//! This crate provides a small dynamic record model — string and opaque
//! symbol keys, per-property enumerability and writability, insertion
//! order, cheap shared handles with observable identity — and a single
//! operation over it: [`defaults`], which fills missing properties of a
//! destination record from one or more sources without overwriting
//! anything already set and without deep-copying nested structure.
//!
//! Only top-level properties are considered; nested records and lists are
//! shared by handle. A property already holding a non-nullish value on
//! the destination always wins, even over later sources, while `false`,
//! `0`, and `""` all count as "already set".
//!
//! ```rust
//! use prop_defaults::{defaults, Record, Symbol, Value};
//!
//! let session = Symbol::new("session");
//!
//! let request = Record::new();
//! request.set("verbose".into(), Value::Bool(false))?;
//!
//! let baseline = Record::new();
//! baseline.set("verbose".into(), Value::Bool(true))?;
//! baseline.set("retries".into(), Value::Int(3))?;
//! baseline.set(session.clone().into(), "anonymous".into())?;
//!
//! let merged = defaults(Value::Record(request.clone()), [Value::Record(baseline)]);
//! assert!(merged.ptr_eq(&request));
//! // The explicitly set `false` blocks the default.
//! assert_eq!(merged.get(&"verbose".into()), Value::Bool(false));
//! assert_eq!(merged.get(&"retries".into()), Value::Int(3));
//! assert_eq!(merged.get(&session.into()), Value::from("anonymous"));
//! # Ok::<_, prop_defaults::RecordError>(())
//! ```

mod convert;
mod defaults;
mod error;
mod key;
mod record;
mod value;

pub use defaults::defaults;
pub use error::RecordError;
pub use key::{PropKey, Symbol};
pub use record::{Property, Record};
pub use value::Value;
