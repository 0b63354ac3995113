use crate::{Binary, spec::BinarySubtype};

#[test]
fn binary_from_base64() {
    let produced = Binary::from_base64("aGVsbG8=", None).unwrap();
    let expected = Binary {
        bytes: "hello".as_bytes().to_vec(),
        subtype: BinarySubtype::Generic,
    };
    assert_eq!(produced, expected);

    let produced = Binary::from_base64("", BinarySubtype::Uuid).unwrap();
    let expected = Binary {
        bytes: Vec::new(),
        subtype: BinarySubtype::Uuid,
    };
    assert_eq!(produced, expected);
}

#[test]
fn binary_from_invalid_base64() {
    let err = Binary::from_base64("not base64!", None).unwrap_err();
    assert!(err.is_unrecognized_discriminator_payload());
}

#[test]
fn display() {
    let binary = Binary {
        subtype: BinarySubtype::Md5,
        bytes: b"hello".to_vec(),
    };
    assert_eq!(binary.to_string(), "Binary(0x5, aGVsbG8=)");
    assert_eq!(binary.to_base64(), "aGVsbG8=");
}
