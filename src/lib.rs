// The MIT License (MIT)

// Copyright (c) 2015 Y. T. Chung <zonyitoo@gmail.com>

// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:

// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Lossless conversion between BSON values and
//! [MongoDB Extended JSON v2](https://www.mongodb.com/docs/manual/reference/mongodb-extended-json/).
//!
//! BSON carries strictly more type information than JSON: binary subtypes, 64-bit dates,
//! 128-bit decimals, regular expressions with options, timestamps, symbols, min/max keys and
//! `undefined`. This crate provides the [`Bson`] value model and the two conversions between it
//! and [`serde_json::Value`]:
//!
//! - [`extjson::encode`] maps every [`Bson`] value to JSON. Types without a JSON analog become an
//!   object carrying a reserved, dollar-prefixed key such as `$oid` or `$binary`.
//! - [`extjson::decode`] maps JSON back to [`Bson`], recognising those reserved keys and
//!   rejecting malformed payloads under them.
//!
//! ## Basic usage
//!
//! ```rust
//! use bson_extjson::{doc, extjson, oid::ObjectId, Bson};
//! use serde_json::json;
//!
//! let id = ObjectId::parse_str("56e1fc72e0c917e9c4714161")?;
//! let doc = doc! { "_id": id, "n": 5, "tags": ["a", "b"] };
//!
//! let value = extjson::encode_document(doc.clone());
//! assert_eq!(
//!     serde_json::Value::Object(value.clone()),
//!     json!({ "_id": { "$oid": "56e1fc72e0c917e9c4714161" }, "n": 5, "tags": ["a", "b"] })
//! );
//!
//! assert_eq!(extjson::decode_document(value)?, doc);
//! # Ok::<(), bson_extjson::error::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

#[doc(inline)]
pub use self::{
    binary::Binary,
    bson::{Array, Bson, JavaScriptCodeWithScope, Regex, Timestamp},
    datetime::DateTime,
    decimal128::Decimal128,
    document::Document,
};

#[macro_use]
mod macros;
mod base64;
mod binary;
mod bson;
pub mod datetime;
pub mod decimal128;
pub mod document;
pub mod error;
pub mod extjson;
pub mod oid;
pub mod spec;
