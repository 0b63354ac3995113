//! Decoding [MongoDB Extended JSON v2](https://www.mongodb.com/docs/manual/reference/mongodb-extended-json/)
//!
//! ## Usage
//!
//! Extended JSON can be decoded with [`decode`] or through [`Bson`]'s
//! `TryFrom<serde_json::Value>` implementation. Both accept canonical and relaxed extJSON.
//!
//! ```rust
//! # use bson_extjson::Bson;
//! # use serde_json::json;
//! # use std::convert::{TryFrom, TryInto};
//! let json_doc = json!({ "x": 5i32, "y": { "$numberInt": "5" }, "z": { "subdoc": "hello" } });
//! let bson: Bson = json_doc.try_into()?; // Bson::Document(...)
//!
//! let json_date = json!({ "$date": { "$numberLong": "1590972160292" } });
//! let bson_date: Bson = json_date.try_into()?; // Bson::DateTime(...)
//!
//! let invalid_ext_json = json!({ "$numberLong": 5 });
//! Bson::try_from(invalid_ext_json).expect_err("5 should be a string");
//! # Ok::<(), bson_extjson::error::Error>(())
//! ```

use std::convert::{TryFrom, TryInto};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
    Bson,
    Document,
    error::{Error, Result},
    extjson::{models, number},
};

/// Converts `value` into a [`Bson`], interpreting objects that carry a reserved key as the
/// corresponding BSON type.
pub fn decode(value: Value) -> Result<Bson> {
    value.try_into()
}

/// Converts each field of `obj` into a [`Bson`], preserving field order. Unlike [`decode`], the
/// top-level object is always treated as a plain document.
pub fn decode_document(obj: Map<String, Value>) -> Result<Document> {
    obj.try_into()
}

fn from_model<T: DeserializeOwned>(discriminator: &'static str, obj: Map<String, Value>) -> Result<T> {
    serde_json::from_value(Value::Object(obj))
        .map_err(|e| Error::discriminator_payload(discriminator, e))
}

/// This converts from the input JSON object as if it were [MongoDB Extended JSON v2](https://www.mongodb.com/docs/manual/reference/mongodb-extended-json/).
impl TryFrom<Map<String, Value>> for Bson {
    type Error = Error;

    fn try_from(obj: Map<String, Value>) -> Result<Self> {
        if obj.contains_key("$oid") {
            let oid: models::ObjectId = from_model("$oid", obj)?;
            return Ok(Bson::ObjectId(oid.parse()?));
        }

        if obj.contains_key("$symbol") {
            let symbol: models::Symbol = from_model("$symbol", obj)?;
            return Ok(Bson::Symbol(symbol.value));
        }

        if obj.contains_key("$regularExpression") {
            let regex: models::Regex = from_model("$regularExpression", obj)?;
            return Ok(regex.parse().into());
        }

        if obj.contains_key("$numberInt") {
            let int: models::Int32 = from_model("$numberInt", obj)?;
            return Ok(Bson::Int32(int.parse()?));
        }

        if obj.contains_key("$numberLong") {
            let int: models::Int64 = from_model("$numberLong", obj)?;
            return Ok(Bson::Int64(int.parse()?));
        }

        if obj.contains_key("$numberDouble") {
            let double: models::Double = from_model("$numberDouble", obj)?;
            return Ok(Bson::Double(double.parse()?));
        }

        if obj.contains_key("$numberDecimal") {
            let decimal: models::Decimal128 = from_model("$numberDecimal", obj)?;
            return Ok(Bson::Decimal128(decimal.parse()?));
        }

        if obj.contains_key("$binary") {
            let binary: models::Binary = from_model("$binary", obj)?;
            return Ok(Bson::Binary(binary.parse()?));
        }

        #[cfg(feature = "uuid-1")]
        {
            if obj.contains_key("$uuid") {
                let uuid: models::Uuid = from_model("$uuid", obj)?;
                return Ok(Bson::Binary(uuid.parse()?));
            }
        }

        if obj.contains_key("$code") {
            let code_w_scope: models::JavaScriptCodeWithScope = from_model("$code", obj)?;
            return match code_w_scope.scope {
                Some(scope) => Ok(crate::JavaScriptCodeWithScope {
                    code: code_w_scope.code,
                    scope: decode_document(scope).map_err(|e| e.with_key("$scope"))?,
                }
                .into()),
                None => Ok(Bson::JavaScriptCode(code_w_scope.code)),
            };
        }

        if obj.contains_key("$scope") {
            return Err(Error::discriminator_payload(
                "$code",
                "$scope must be accompanied by $code",
            ));
        }

        if obj.contains_key("$timestamp") {
            let ts: models::Timestamp = from_model("$timestamp", obj)?;
            return Ok(ts.parse().into());
        }

        if obj.contains_key("$date") {
            let extjson_datetime: models::DateTime = from_model("$date", obj)?;
            return Ok(Bson::DateTime(extjson_datetime.parse()?));
        }

        if obj.contains_key("$minKey") {
            let min_key: models::MinKey = from_model("$minKey", obj)?;
            return min_key.parse();
        }

        if obj.contains_key("$maxKey") {
            let max_key: models::MaxKey = from_model("$maxKey", obj)?;
            return max_key.parse();
        }

        if obj.contains_key("$undefined") {
            let undefined: models::Undefined = from_model("$undefined", obj)?;
            return undefined.parse();
        }

        Ok(Bson::Document(obj.try_into()?))
    }
}

/// This converts from the input JSON as if it were [MongoDB Extended JSON v2](https://www.mongodb.com/docs/manual/reference/mongodb-extended-json/).
impl TryFrom<Value> for Bson {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Number(x) => number::classify(&x),
            Value::String(x) => Ok(x.into()),
            Value::Bool(x) => Ok(x.into()),
            Value::Array(x) => Ok(Bson::Array(
                x.into_iter()
                    .enumerate()
                    .map(|(i, v)| Bson::try_from(v).map_err(|e| e.with_index(i)))
                    .collect::<Result<Vec<Bson>>>()?,
            )),
            Value::Null => Ok(Bson::Null),
            Value::Object(map) => map.try_into(),
        }
    }
}

/// This converts from the input JSON as if it were [MongoDB Extended JSON v2](https://www.mongodb.com/docs/manual/reference/mongodb-extended-json/).
impl TryFrom<Map<String, Value>> for Document {
    type Error = Error;

    fn try_from(obj: Map<String, Value>) -> Result<Self> {
        obj.into_iter()
            .map(|(k, v)| -> Result<(String, Bson)> {
                let value = Bson::try_from(v).map_err(|e| e.with_key(k.as_str()))?;
                Ok((k, value))
            })
            .collect()
    }
}
