//! Encoding of [`Bson`] values into extended JSON.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, LazyLock},
};

use ahash::RandomState;
use serde_json::{Map, Value, json};

use crate::{
    Binary,
    Bson,
    Document,
    JavaScriptCodeWithScope,
    Regex,
    Timestamp,
    base64,
    bson::sorted_options,
    spec::ElementType,
};

static MIN_KEY: LazyLock<Value> = LazyLock::new(|| json!({ "$minKey": 1 }));
static MAX_KEY: LazyLock<Value> = LazyLock::new(|| json!({ "$maxKey": 1 }));
static UNDEFINED: LazyLock<Value> = LazyLock::new(|| json!({ "$undefined": true }));

static RELAXED: LazyLock<Encoder> = LazyLock::new(Encoder::new);
static CANONICAL: LazyLock<Encoder> = LazyLock::new(Encoder::canonical);

/// A replacement encoding for one BSON element type.
///
/// The rule receives the [`Encoder`] it was installed on so that nested values (array elements,
/// document fields, code scopes) can be encoded with the same table.
pub type EncodeRule = Arc<dyn Fn(&Encoder, Bson) -> Value + Send + Sync>;

/// Converts [`Bson`] values into extended JSON.
///
/// An encoder is a table from [`ElementType`] to encoding rule. Element types without an
/// installed rule use the built-in relaxed encoding described in the [module
/// documentation](crate::extjson). Encoders are cheap to clone and can be shared between threads.
///
/// ```rust
/// use bson_extjson::{Bson, extjson::Encoder, spec::ElementType};
/// use serde_json::json;
///
/// let encoder = Encoder::new().with_rule(ElementType::Symbol, |_, bson| match bson {
///     Bson::Symbol(s) => json!(s),
///     other => Encoder::new().encode(other),
/// });
///
/// assert_eq!(encoder.encode(Bson::Symbol("sym".into())), json!("sym"));
/// ```
#[derive(Clone, Default)]
pub struct Encoder {
    rules: HashMap<ElementType, EncodeRule, RandomState>,
}

impl fmt::Debug for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoder")
            .field("overrides", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Encoder {
    /// Creates an encoder that produces relaxed extended JSON.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an encoder that produces canonical extended JSON: Int32, Int64 and Double values
    /// are written as `$numberInt`, `$numberLong` and `$numberDouble` wrappers so that their
    /// exact BSON type survives a round trip.
    pub fn canonical() -> Self {
        Self::new()
            .with_rule(ElementType::Int32, |encoder, bson| match bson {
                Bson::Int32(i) => json!({ "$numberInt": i.to_string() }),
                other => encoder.encode_default(other),
            })
            .with_rule(ElementType::Int64, |encoder, bson| match bson {
                Bson::Int64(i) => json!({ "$numberLong": i.to_string() }),
                other => encoder.encode_default(other),
            })
            .with_rule(ElementType::Double, |encoder, bson| match bson {
                Bson::Double(f) if f.is_finite() => {
                    let mut s = f.to_string();
                    if f.fract() == 0.0 {
                        s.push_str(".0");
                    }

                    json!({ "$numberDouble": s })
                }
                other => encoder.encode_default(other),
            })
    }

    /// Installs `rule` as the encoding for every value of `element_type`, replacing any rule
    /// previously installed for it.
    pub fn with_rule<F>(mut self, element_type: ElementType, rule: F) -> Self
    where
        F: Fn(&Encoder, Bson) -> Value + Send + Sync + 'static,
    {
        tracing::debug!(?element_type, "installing extended JSON encoding override");
        self.rules.insert(element_type, Arc::new(rule));
        self
    }

    /// Removes any rule installed for `element_type`, restoring the built-in encoding.
    pub fn without_rule(mut self, element_type: ElementType) -> Self {
        self.rules.remove(&element_type);
        self
    }

    /// Whether a rule is installed for `element_type`.
    pub fn has_rule(&self, element_type: ElementType) -> bool {
        self.rules.contains_key(&element_type)
    }

    /// Converts `bson` into extended JSON, consulting the installed rules first.
    pub fn encode(&self, bson: Bson) -> Value {
        let element_type = bson.element_type();
        match self.rules.get(&element_type) {
            Some(rule) => {
                tracing::trace!(?element_type, "applying extended JSON encoding override");
                rule(self, bson)
            }
            None => self.encode_default(bson),
        }
    }

    /// Converts each field of `doc` into extended JSON, preserving field order.
    pub fn encode_document(&self, doc: Document) -> Map<String, Value> {
        doc.into_iter().map(|(k, v)| (k, self.encode(v))).collect()
    }

    /// Applies the built-in encoding to the top level of `bson`. Nested values still go through
    /// [`Encoder::encode`], so installed rules apply to them.
    pub fn encode_default(&self, bson: Bson) -> Value {
        match bson {
            Bson::Double(v) if v.is_nan() => json!({ "$numberDouble": "NaN" }),
            Bson::Double(v) if v.is_infinite() => {
                let s = if v.is_sign_negative() {
                    "-Infinity"
                } else {
                    "Infinity"
                };

                json!({ "$numberDouble": s })
            }
            Bson::Double(v) => json!(v),
            Bson::Int32(v) => v.into(),
            Bson::Int64(v) => v.into(),
            Bson::Decimal128(v) => json!({ "$numberDecimal": v.to_string() }),
            Bson::String(v) => Value::String(v),
            Bson::Document(v) => Value::Object(self.encode_document(v)),
            Bson::Array(v) => Value::Array(v.into_iter().map(|b| self.encode(b)).collect()),
            Bson::Binary(Binary { subtype, bytes }) => {
                let tval: u8 = From::from(subtype);
                json!({
                    "$binary": {
                        "base64": base64::encode(bytes),
                        "subType": hex::encode([tval]),
                    }
                })
            }
            Bson::ObjectId(v) => json!({ "$oid": v.to_hex() }),
            Bson::Boolean(v) => Value::Bool(v),
            Bson::DateTime(v) => json!({
                "$date": { "$numberLong": v.timestamp_millis().to_string() },
            }),
            Bson::Null => Value::Null,
            Bson::RegularExpression(Regex { pattern, options }) => json!({
                "$regularExpression": {
                    "pattern": pattern,
                    "options": sorted_options(&options),
                }
            }),
            Bson::JavaScriptCode(code) => json!({ "$code": code }),
            Bson::JavaScriptCodeWithScope(JavaScriptCodeWithScope { code, scope }) => json!({
                "$code": code,
                "$scope": Value::Object(self.encode_document(scope)),
            }),
            Bson::Symbol(v) => json!({ "$symbol": v }),
            Bson::Timestamp(Timestamp { time, increment }) => json!({
                "$timestamp": {
                    "t": time,
                    "i": increment,
                }
            }),
            Bson::MinKey => MIN_KEY.clone(),
            Bson::MaxKey => MAX_KEY.clone(),
            Bson::Undefined => UNDEFINED.clone(),
        }
    }
}

/// Converts `bson` into relaxed extended JSON.
pub fn encode(bson: Bson) -> Value {
    RELAXED.encode(bson)
}

/// Converts `doc` into a relaxed extended JSON object, preserving field order.
pub fn encode_document(doc: Document) -> Map<String, Value> {
    RELAXED.encode_document(doc)
}

/// This will create the relaxed [extended JSON](https://www.mongodb.com/docs/manual/reference/mongodb-extended-json/) representation of the provided [`Bson`].
impl From<Bson> for Value {
    fn from(bson: Bson) -> Self {
        encode(bson)
    }
}

impl Bson {
    /// Converts this value into a [`serde_json::Value`] in relaxed
    /// [extended JSON](https://www.mongodb.com/docs/manual/reference/mongodb-extended-json/)
    /// format.
    pub fn into_relaxed_extjson(self) -> Value {
        RELAXED.encode(self)
    }

    /// Converts this value into a [`serde_json::Value`] in canonical
    /// [extended JSON](https://www.mongodb.com/docs/manual/reference/mongodb-extended-json/)
    /// format.
    pub fn into_canonical_extjson(self) -> Value {
        CANONICAL.encode(self)
    }
}
