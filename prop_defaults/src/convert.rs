//! Serde views and JSON conversions for values and records.
//!
//! Records serialize as maps over their own enumerable string-keyed
//! properties: symbol-keyed properties have no representation outside the
//! process and are dropped, as are properties holding [`Value::Undefined`].
//! Serialization recurses through nested records, so it shares the cycle
//! caveat documented on [`Value`].

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::key::PropKey;
use crate::record::Record;
use crate::value::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined | Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Str(text) => serializer.serialize_str(text),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Record(record) => record.serialize(serializer),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.entries() {
            if matches!(value, Value::Undefined) {
                continue;
            }
            if let PropKey::Name(name) = &key {
                map.serialize_entry(name, &value)?;
            }
        }
        map.end()
    }
}

#[cfg(feature = "serde_json")]
impl Value {
    /// Build a value from a JSON tree.
    ///
    /// Objects become records whose properties are all enumerable and
    /// writable; arrays become shared lists. Numbers map to [`Value::Int`]
    /// when they fit an `i64` and to [`Value::Float`] otherwise.
    #[must_use]
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(value) => Self::Bool(*value),
            serde_json::Value::Number(number) => number
                .as_i64()
                .map_or_else(|| number.as_f64().map_or(Self::Null, Self::Float), Self::Int),
            serde_json::Value::String(text) => Self::from(text.as_str()),
            serde_json::Value::Array(items) => {
                Self::from(items.iter().map(Self::from_json).collect::<Vec<_>>())
            }
            serde_json::Value::Object(fields) => {
                let record = Record::new();
                for (name, field) in fields {
                    record.define(
                        PropKey::Name(name.clone()),
                        crate::record::Property::new(Self::from_json(field)),
                    );
                }
                Self::Record(record)
            }
        }
    }

    /// Render this value as a JSON tree.
    ///
    /// Symbol-keyed and [`Value::Undefined`] properties are dropped from
    /// records; a bare `Undefined` and non-finite floats become JSON null.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Undefined | Self::Null => serde_json::Value::Null,
            Self::Bool(value) => serde_json::Value::Bool(*value),
            Self::Int(value) => serde_json::Value::from(*value),
            Self::Float(value) => serde_json::Number::from_f64(*value)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::Str(text) => serde_json::Value::from(text.as_ref()),
            Self::List(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Record(record) => {
                let mut fields = serde_json::Map::new();
                for (key, value) in record.entries() {
                    if matches!(value, Self::Undefined) {
                        continue;
                    }
                    if let PropKey::Name(name) = key {
                        fields.insert(name, value.to_json());
                    }
                }
                serde_json::Value::Object(fields)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::key::Symbol;
    use crate::record::{Property, Record};
    use crate::value::Value;

    #[test]
    fn serde_view_drops_symbols_and_undefined() {
        let record = Record::new();
        record.set("kept".into(), Value::Int(1)).expect("set");
        record.set("gone".into(), Value::Undefined).expect("set");
        record
            .set(Symbol::new("hidden").into(), Value::Int(2))
            .expect("set");
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json, serde_json::json!({"kept": 1}));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_objects_become_writable_records() {
        let value = Value::from_json(&serde_json::json!({"a": 1, "b": [true, null]}));
        let record = value.as_record().expect("record").clone();
        record.set("c".into(), Value::Int(3)).expect("writable");
        assert_eq!(record.get(&"a".into()), Value::Int(1));
        assert_eq!(
            record.get(&"b".into()),
            Value::from(vec![Value::Bool(true), Value::Null])
        );
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_round_trip_preserves_plain_string_keyed_data() {
        let source = serde_json::json!({"name": "probe", "retries": 3, "ratio": 0.5});
        assert_eq!(Value::from_json(&source).to_json(), source);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn non_finite_floats_render_as_null() {
        assert_eq!(Value::Float(f64::NAN).to_json(), serde_json::Value::Null);
        assert_eq!(
            Value::Float(f64::INFINITY).to_json(),
            serde_json::Value::Null
        );
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn non_enumerable_properties_stay_out_of_json() {
        let record = Record::new();
        record.define(
            "pinned".into(),
            Property::new(Value::Int(1)).enumerable(false),
        );
        record.set("open".into(), Value::Int(2)).expect("set");
        assert_eq!(
            Value::Record(record).to_json(),
            serde_json::json!({"open": 2})
        );
    }
}
