//! Conversion between [`Bson`](crate::Bson) and [MongoDB Extended JSON v2](https://www.mongodb.com/docs/manual/reference/mongodb-extended-json/)
//!
//! ## Overview of Extended JSON
//!
//! MongoDB Extended JSON (abbreviated extJSON) is format of JSON that allows for the encoding of
//! BSON type information. Normal JSON cannot unambiguously represent all BSON types losslessly, so
//! an extension was designed to include conventions for representing those types.
//!
//! For example, a BSON binary is represented by the following format:
//! ```text
//! {
//!    "$binary": {
//!        "base64": <base64 encoded payload as a string>,
//!        "subType": <subtype as a two character hex string>,
//!    }
//! }
//! ```
//!
//! The full mapping produced by the default [`Encoder`]:
//!
//! | BSON | JSON |
//! |---|---|
//! | Double, Int32, Int64 | number (non-finite doubles: `{"$numberDouble": "NaN"}` etc.) |
//! | Decimal128 | `{"$numberDecimal": "<decimal string>"}` |
//! | String | string |
//! | Document | object |
//! | Array | array |
//! | Binary | `{"$binary": {"base64": "<payload>", "subType": "<hex>"}}` |
//! | ObjectId | `{"$oid": "<24 hex chars>"}` |
//! | Boolean | boolean |
//! | DateTime | `{"$date": {"$numberLong": "<millis>"}}` |
//! | Null | null |
//! | Regex | `{"$regularExpression": {"pattern": "<pattern>", "options": "<options>"}}` |
//! | JavaScriptCode | `{"$code": "<code>"}` |
//! | JavaScriptCodeWithScope | `{"$code": "<code>", "$scope": <object>}` |
//! | Symbol | `{"$symbol": "<name>"}` |
//! | Timestamp | `{"$timestamp": {"t": <seconds>, "i": <counter>}}` |
//! | MinKey / MaxKey | `{"$minKey": 1}` / `{"$maxKey": 1}` |
//! | Undefined | `{"$undefined": true}` |
//!
//! ### Canonical and Relaxed Modes
//!
//! The table above is the relaxed form: all BSON numbers are represented by the JSON number type.
//! Relaxed output is not always type-preserving on the way back, because a JSON number is
//! assigned the narrowest fitting BSON type when decoded (`Int64(5)` comes back as `Int32(5)`,
//! `Double(2.0)` as `Int32(2)`).
//!
//! [`Encoder::canonical`] instead writes numbers as `{"$numberInt": "5"}`,
//! `{"$numberLong": "5"}` and `{"$numberDouble": "2.0"}`, which decode to exactly the original
//! type.
//!
//! ```rust
//! # use bson_extjson::{Bson, extjson::{self, Encoder}};
//! # use serde_json::json;
//! let relaxed = extjson::encode(Bson::Int64(5));
//! assert_eq!(relaxed, json!(5));
//! assert_eq!(extjson::decode(relaxed)?, Bson::Int32(5));
//!
//! let canonical = Encoder::canonical().encode(Bson::Int64(5));
//! assert_eq!(canonical, json!({ "$numberLong": "5" }));
//! assert_eq!(extjson::decode(canonical)?, Bson::Int64(5));
//! # Ok::<(), bson_extjson::error::Error>(())
//! ```
//!
//! ## Decoding Extended JSON
//!
//! [`decode`] accepts both canonical and relaxed extJSON, and the two modes can even be mixed
//! within a single representation. An object carrying one of the reserved keys must have exactly
//! the documented shape; extra sibling keys or malformed payloads are reported as
//! [`ErrorKind::UnrecognizedDiscriminatorPayload`](crate::error::ErrorKind::UnrecognizedDiscriminatorPayload)
//! rather than falling back to a plain document.
//!
//! ```rust
//! # use bson_extjson::{Bson, extjson};
//! # use serde_json::json;
//! let json_doc = json!({ "x": 5, "y": { "$numberInt": "5" }, "z": { "subdoc": "hello" } });
//! let bson = extjson::decode(json_doc)?; // Bson::Document(...)
//!
//! let json_date = json!({ "$date": { "$numberLong": "1590972160292" } });
//! let bson_date = extjson::decode(json_date)?; // Bson::DateTime(...)
//!
//! let invalid_ext_json = json!({ "$oid": "not-hex" });
//! extjson::decode(invalid_ext_json).expect_err("not a valid ObjectId");
//! # Ok::<(), bson_extjson::error::Error>(())
//! ```

pub mod de;
pub(crate) mod models;
mod number;
pub mod ser;

pub use self::{
    de::{decode, decode_document},
    ser::{EncodeRule, Encoder, encode, encode_document},
};
