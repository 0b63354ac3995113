use pretty_assertions::assert_eq;

use crate::{
    Binary,
    Bson,
    DateTime,
    Decimal128,
    Document,
    JavaScriptCodeWithScope,
    Regex,
    Timestamp,
    doc,
    oid::ObjectId,
    spec::{BinarySubtype, ElementType},
};

#[test]
fn bson_default() {
    let bson1 = Bson::default();
    assert_eq!(bson1, Bson::Null);
}

#[test]
fn document_default() {
    let doc1 = Document::default();
    assert_eq!(doc1.keys().count(), 0);
    assert_eq!(doc1, Document::new());
}

#[test]
fn from_impls() {
    assert_eq!(Bson::from(1.5f32), Bson::Double(1.5));
    assert_eq!(Bson::from(2.25f64), Bson::Double(2.25));
    assert_eq!(Bson::from("data"), Bson::String(String::from("data")));
    assert_eq!(
        Bson::from(String::from("data")),
        Bson::String(String::from("data"))
    );
    assert_eq!(Bson::from(doc! {}), Bson::Document(Document::new()));
    assert_eq!(Bson::from(false), Bson::Boolean(false));
    assert_eq!(
        Bson::from(Regex::new("\\s+$", "xi")),
        Bson::RegularExpression(Regex {
            pattern: String::from("\\s+$"),
            options: String::from("ix"),
        })
    );
    assert_eq!(
        Bson::from(JavaScriptCodeWithScope {
            code: String::from("alert(\"hi\");"),
            scope: doc! {},
        }),
        Bson::JavaScriptCodeWithScope(JavaScriptCodeWithScope {
            code: String::from("alert(\"hi\");"),
            scope: doc! {},
        })
    );
    assert_eq!(
        Bson::from(Binary {
            subtype: BinarySubtype::Generic,
            bytes: vec![1, 2, 3],
        }),
        Bson::Binary(Binary {
            subtype: BinarySubtype::Generic,
            bytes: vec![1, 2, 3],
        })
    );
    assert_eq!(Bson::from(-48i32), Bson::Int32(-48));
    assert_eq!(Bson::from(-96i64), Bson::Int64(-96));
    assert_eq!(Bson::from(152u32), Bson::Int32(152));
    assert_eq!(Bson::from(4_000_000_000u32), Bson::Int64(4_000_000_000));

    let oid = ObjectId::from_bytes([7; 12]);
    assert_eq!(
        Bson::from(b"abcdefghijkl"),
        Bson::ObjectId(ObjectId::from_bytes(*b"abcdefghijkl"))
    );
    assert_eq!(Bson::from(oid), Bson::ObjectId(oid));
    assert_eq!(
        Bson::from(vec![1, 2, 3]),
        Bson::Array(vec![Bson::Int32(1), Bson::Int32(2), Bson::Int32(3)])
    );
    assert_eq!(
        Bson::from(DateTime::from_millis(42)),
        Bson::DateTime(DateTime::from_millis(42))
    );
    assert_eq!(Bson::from(None::<i32>), Bson::Null);
    assert_eq!(Bson::from(Some("x")), Bson::String("x".into()));
}

#[test]
fn element_types() {
    let cases = [
        (Bson::Double(1.0), ElementType::Double),
        (Bson::String("s".into()), ElementType::String),
        (Bson::Array(vec![]), ElementType::Array),
        (Bson::Document(doc! {}), ElementType::EmbeddedDocument),
        (Bson::Boolean(true), ElementType::Boolean),
        (Bson::Null, ElementType::Null),
        (Bson::RegularExpression(Regex::new("a", "")), ElementType::RegularExpression),
        (Bson::JavaScriptCode("f()".into()), ElementType::JavaScriptCode),
        (Bson::Int32(1), ElementType::Int32),
        (Bson::Int64(1), ElementType::Int64),
        (
            Bson::Timestamp(Timestamp { time: 1, increment: 1 }),
            ElementType::Timestamp,
        ),
        (Bson::DateTime(DateTime::from_millis(0)), ElementType::DateTime),
        (Bson::Symbol("s".into()), ElementType::Symbol),
        (Bson::Decimal128(Decimal128::default()), ElementType::Decimal128),
        (Bson::Undefined, ElementType::Undefined),
        (Bson::MinKey, ElementType::MinKey),
        (Bson::MaxKey, ElementType::MaxKey),
    ];

    for (value, expected) in cases {
        assert_eq!(value.element_type(), expected, "{value:?}");
    }
}

#[test]
fn accessors() {
    assert_eq!(Bson::Double(1.5).as_f64(), Some(1.5));
    assert_eq!(Bson::Int32(1).as_f64(), None);
    assert_eq!(Bson::String("a".into()).as_str(), Some("a"));
    assert_eq!(Bson::Symbol("sym".into()).as_symbol(), Some("sym"));
    assert_eq!(Bson::Symbol("sym".into()).as_str(), None);
    assert_eq!(Bson::Int64(7).as_i64(), Some(7));
    assert_eq!(Bson::Int64(7).as_i32(), None);
    assert_eq!(Bson::Null.as_null(), Some(()));

    let mut value = Bson::Document(doc! { "a": 1 });
    if let Some(doc) = value.as_document_mut() {
        doc.insert("b", 2);
    }
    assert_eq!(value.as_document().map(Document::len), Some(2));
}

#[test]
fn special_values_compare_equal() {
    assert_eq!(Bson::MinKey, Bson::MinKey);
    assert_eq!(Bson::MaxKey, Bson::MaxKey);
    assert_eq!(Bson::Undefined, Bson::Undefined);
    assert_ne!(Bson::MinKey, Bson::MaxKey);
}

#[test]
fn display() {
    let value = Bson::Array(vec![
        Bson::Int32(1),
        Bson::String("two".into()),
        Bson::Document(doc! { "three": 3.5 }),
    ]);
    assert_eq!(value.to_string(), "[1, \"two\", { \"three\": 3.5 }]");
    assert_eq!(Regex::new("ab", "mi").to_string(), "/ab/im");
    assert_eq!(
        Timestamp { time: 4, increment: 2 }.to_string(),
        "Timestamp(4, 2)"
    );
}
