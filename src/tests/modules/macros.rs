use pretty_assertions::assert_eq;

use crate::{
    Binary,
    Bson,
    Document,
    Regex,
    Timestamp,
    bson,
    doc,
    oid::ObjectId,
    spec::BinarySubtype,
};

#[test]
fn standard_format() {
    let id = ObjectId::from_bytes(*b"thisismyname");
    let date = crate::DateTime::from_millis(1_591_700_287_095);

    let doc = doc! {
        "float": 2.4,
        "string": "hello",
        "array": ["testing", 1, true, [1, 2]],
        "doc": {
            "fish": "in",
            "a": "barrel",
            "!": 1,
        },
        "bool": true,
        "null": null,
        "regexp": Regex::new("s[ao]d", "i"),
        "with_wrapped_parens": (-20),
        "code": Bson::JavaScriptCode("function(x) { return x._id; }".to_owned()),
        "i32": 12,
        "i64": -55i64,
        "timestamp": Timestamp { time: 0, increment: 229_999_444 },
        "binary": Binary { subtype: BinarySubtype::Md5, bytes: "thingies".to_owned().into_bytes() },
        "_id": id,
        "date": date,
    };

    let keys: Vec<_> = doc.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "float", "string", "array", "doc", "bool", "null", "regexp",
            "with_wrapped_parens", "code", "i32", "i64", "timestamp", "binary", "_id", "date",
        ]
    );

    assert_eq!(doc.get("float"), Some(&Bson::Double(2.4)));
    assert_eq!(
        doc.get("array"),
        Some(&Bson::Array(vec![
            Bson::String("testing".to_owned()),
            Bson::Int32(1),
            Bson::Boolean(true),
            Bson::Array(vec![Bson::Int32(1), Bson::Int32(2)]),
        ]))
    );
    assert_eq!(doc.get("doc").and_then(Bson::as_document).map(Document::len), Some(3));
    assert_eq!(doc.get("null"), Some(&Bson::Null));
    assert_eq!(doc.get("with_wrapped_parens"), Some(&Bson::Int32(-20)));
    assert_eq!(doc.get("i64"), Some(&Bson::Int64(-55)));
    assert_eq!(doc.get("_id"), Some(&Bson::ObjectId(id)));
    assert_eq!(doc.get("date"), Some(&Bson::DateTime(date)));
}

#[test]
fn non_trailing_comma() {
    let doc = doc! { "a": "foo", "b": { "ok": "then" } };
    let expected = "{ \"a\": \"foo\", \"b\": { \"ok\": \"then\" } }".to_string();
    assert_eq!(expected, doc.to_string());
}

#[test]
#[allow(clippy::float_cmp)]
fn recursive_macro() {
    let doc = doc! {
        "a": "foo",
        "b": {
            "bar": {
                "harbor": ["seal", false],
                "jelly": 42.0,
            },
            "grape": 27,
        },
        "c": [-7],
        "d": [
            {
                "apple": "ripe",
            }
        ],
        "e": { "single": "test" },
        "n": null,
    };

    match doc.get("b") {
        Some(Bson::Document(nested)) => {
            assert_eq!(nested.get("bar").and_then(Bson::as_document).and_then(|bar| bar.get("jelly")).and_then(Bson::as_f64), Some(42.0));
            assert_eq!(nested.get("grape").and_then(Bson::as_i32), Some(27));
        }
        other => panic!("expected a nested document, got {other:?}"),
    }

    assert_eq!(doc.get("c").and_then(Bson::as_array), Some(&vec![Bson::Int32(-7)]));
    assert_eq!(
        doc.get("d"),
        Some(&Bson::Array(vec![Bson::Document(doc! { "apple": "ripe" })]))
    );
    assert_eq!(doc.get("n"), Some(&Bson::Null));
}

#[test]
fn computed_keys() {
    let key = "computed";
    let other = String::from("other");
    let doc = doc! {
        (key): 1,
        (other.as_str()): { "x": [] },
    };

    assert_eq!(doc.get("computed").and_then(Bson::as_i32), Some(1));
    assert_eq!(
        doc.get("other").and_then(Bson::as_document),
        Some(&doc! { "x": Bson::Array(vec![]) })
    );
}

#[test]
fn bson_values() {
    assert_eq!(bson!(null), Bson::Null);
    assert_eq!(bson!([]), Bson::Array(vec![]));
    assert_eq!(bson!(1.5), Bson::Double(1.5));
    assert_eq!(bson!("s"), Bson::String("s".to_owned()));
    assert_eq!(
        bson!([1, null, [2], { "k": "v" },]),
        Bson::Array(vec![
            Bson::Int32(1),
            Bson::Null,
            Bson::Array(vec![Bson::Int32(2)]),
            Bson::Document(doc! { "k": "v" }),
        ])
    );
    assert_eq!(bson!({}), Bson::Document(Document::new()));
}
