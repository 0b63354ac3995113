use std::{sync::Arc, thread};

use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{
    Bson,
    DateTime,
    JavaScriptCodeWithScope,
    doc,
    extjson::{self, Encoder},
    spec::ElementType,
};

#[test]
fn default_encoder_is_relaxed() {
    let encoder = Encoder::new();
    for bson in [
        Bson::Int32(1),
        Bson::Int64(2),
        Bson::Double(0.5),
        Bson::Symbol("s".to_owned()),
        Bson::Document(doc! { "a": [Bson::MinKey] }),
    ] {
        assert_eq!(encoder.encode(bson.clone()), extjson::encode(bson));
    }
}

#[test]
fn override_applies_to_nested_values() {
    let encoder = Encoder::new().with_rule(ElementType::DateTime, |_, bson| match bson {
        Bson::DateTime(dt) => json!({ "$date": dt.try_to_rfc3339_string().unwrap() }),
        other => extjson::encode(other),
    });

    let bson = Bson::Document(doc! {
        "when": DateTime::from_millis(0),
        "history": [DateTime::from_millis(1_000)],
        "other": 1,
    });

    assert_eq!(
        encoder.encode(bson),
        json!({
            "when": { "$date": "1970-01-01T00:00:00Z" },
            "history": [{ "$date": "1970-01-01T00:00:01Z" }],
            "other": 1,
        })
    );
}

#[test]
fn override_can_recurse_through_the_encoder() {
    // Documents are flattened into [key, value] pairs, and their values still honor the table.
    let encoder = Encoder::canonical().with_rule(ElementType::EmbeddedDocument, |encoder, bson| {
        match bson {
            Bson::Document(doc) => doc
                .into_iter()
                .map(|(k, v)| json!([k, encoder.encode(v)]))
                .collect(),
            other => encoder.encode_default(other),
        }
    });

    assert_eq!(
        encoder.encode(Bson::Document(doc! { "a": 1, "b": { "c": 2i64 } })),
        json!([
            ["a", { "$numberInt": "1" }],
            ["b", [["c", { "$numberLong": "2" }]]],
        ])
    );
}

#[test]
fn code_with_scope_uses_the_encoder_for_its_scope() {
    let bson = Bson::JavaScriptCodeWithScope(JavaScriptCodeWithScope {
        code: "x + y".to_owned(),
        scope: doc! { "x": 1, "y": 2.5 },
    });

    assert_eq!(
        Encoder::canonical().encode(bson),
        json!({
            "$code": "x + y",
            "$scope": {
                "x": { "$numberInt": "1" },
                "y": { "$numberDouble": "2.5" },
            },
        })
    );
}

#[test]
fn later_rules_replace_earlier_ones() {
    let encoder = Encoder::new()
        .with_rule(ElementType::Boolean, |_, _| json!("first"))
        .with_rule(ElementType::Boolean, |_, _| json!("second"));

    assert_eq!(encoder.encode(Bson::Boolean(true)), json!("second"));
}

#[test]
fn without_rule_restores_default() {
    let encoder = Encoder::canonical();
    assert!(encoder.has_rule(ElementType::Int32));
    assert!(!encoder.has_rule(ElementType::String));

    let encoder = encoder.without_rule(ElementType::Int32);
    assert!(!encoder.has_rule(ElementType::Int32));
    assert_eq!(encoder.encode(Bson::Int32(7)), json!(7));
    assert_eq!(encoder.encode(Bson::Int64(7)), json!({ "$numberLong": "7" }));
}

#[test]
fn canonical_doubles() {
    let encoder = Encoder::canonical();
    let cases = [
        (1.0, "1.0"),
        (-0.0, "-0.0"),
        (0.1, "0.1"),
        (-1.5, "-1.5"),
        (1e21, "1000000000000000000000.0"),
        (f64::INFINITY, "Infinity"),
    ];

    for (value, expected) in cases {
        assert_eq!(
            encoder.encode(Bson::Double(value)),
            json!({ "$numberDouble": expected })
        );
    }
}

#[test]
fn encoders_are_shareable() {
    let encoder = Arc::new(Encoder::canonical());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let encoder = Arc::clone(&encoder);
            thread::spawn(move || encoder.encode(Bson::Int64(i)))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            json!({ "$numberLong": i.to_string() })
        );
    }
}

#[test]
fn debug_lists_overrides() {
    let encoder = Encoder::new().with_rule(ElementType::Symbol, |_, _| json!(null));
    assert_eq!(format!("{encoder:?}"), "Encoder { overrides: [Symbol] }");
}
