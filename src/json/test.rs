use crate::json;
use crate::json::DecodeError;
use crate::Nullable;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn unmarshal_value() {
    let mut n = Nullable::<i32>::null();
    n.unmarshal_json(b"123").unwrap();
    assert_eq!(n, Nullable::new(123));

    let mut n = Nullable::<String>::null();
    n.unmarshal_json(br#""kek""#).unwrap();
    assert_eq!(n.value(), "kek");
}

#[test]
fn unmarshal_null_resets() {
    let mut n = Nullable::new(String::from("stale"));
    n.unmarshal_json(b"null").unwrap();
    assert_eq!(n.is_null(), true);
    assert_eq!(n.value(), "");
}

#[test]
fn unmarshal_empty_resets() {
    for input in [&b""[..], &b"null"[..], &b" null\n"[..]].iter() {
        let mut n = Nullable::new(vec![1, 2, 3]);
        n.unmarshal_json(input).unwrap();
        assert_eq!(n.is_null(), true);
        assert_eq!(n.value().len(), 0);
    }
}

#[test]
fn unmarshal_whitespace_only_is_eof() {
    for input in [&b"   "[..], &b"\n\t"[..]].iter() {
        let mut n = Nullable::new(5i32);
        let err = n.unmarshal_json(input).unwrap_err();
        assert!(matches!(err, DecodeError::Eof(_)), "{}", err);
        assert_eq!(n.is_null(), true);
        assert_eq!(n.value(), 0);
    }
}

#[test]
fn unmarshal_type_mismatch_leaves_null() {
    init_tracing();
    let mut n = Nullable::new(String::from("stale"));
    let err = n.unmarshal_json(b"123").unwrap_err();
    assert!(matches!(err, DecodeError::Data(_)));
    assert_eq!(n.is_null(), true);
    assert_eq!(n.value(), "");
}

#[test]
fn unmarshal_malformed() {
    init_tracing();
    let mut n = Nullable::new(7);
    let err = n.unmarshal_json(b"12x").unwrap_err();
    assert!(matches!(err, DecodeError::Syntax(_)));
    assert_eq!(err.line(), 1);
    assert_eq!(n.is_null(), true);

    let mut n = Nullable::new(vec![1]);
    let err = n.unmarshal_json(b"[1, 2").unwrap_err();
    assert!(matches!(err, DecodeError::Eof(_)));
    assert_eq!(n.is_null(), true);
}

#[test]
fn unmarshal_retry_after_failure() {
    let mut n = Nullable::<u8>::null();
    assert!(n.unmarshal_json(b"300").is_err());
    assert_eq!(n.is_null(), true);
    n.unmarshal_json(b"30").unwrap();
    assert_eq!(n.value(), 30);
}

#[test]
fn decode_error_message() {
    let err = json::from_slice::<bool>(b"\"yes\"").unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("JSON does not match the expected type"), "{}", text);
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn marshal() {
    assert_eq!(Nullable::new(7).marshal_json().unwrap(), b"7");
    assert_eq!(Nullable::<i32>::null().marshal_json().unwrap(), b"null");
    assert_eq!(json::to_vec(&Nullable::new("kek")).unwrap(), br#""kek""#);
    assert_eq!(json::to_vec(&Nullable::new(Vec::<u8>::new())).unwrap(), b"[]");
}

#[test]
fn marshal_error() {
    let mut map = BTreeMap::new();
    map.insert(vec![1u8], 1);
    let err = Nullable::new(map).marshal_json().unwrap_err();
    assert!(err.to_string().starts_with("failed to encode value as JSON"));
}

#[test]
fn null_round_trip() {
    let bytes = json::to_vec(&Nullable::<Vec<String>>::null()).unwrap();
    assert_eq!(bytes, b"null");
    let back = json::from_slice::<Vec<String>>(&bytes).unwrap();
    assert_eq!(back.is_null(), true);
}

#[test]
fn nested_option_present_none_reads_back_null() {
    let n = Nullable::new(None::<i32>);
    let bytes = json::to_vec(&n).unwrap();
    assert_eq!(bytes, b"null");
    assert_eq!(json::from_slice::<Option<i32>>(&bytes).unwrap().is_null(), true);
}

proptest! {
    #[test]
    fn round_trip_integers(v in any::<i64>()) {
        let n = Nullable::new(v);
        let back = json::from_slice::<i64>(&json::to_vec(&n).unwrap()).unwrap();
        prop_assert_eq!(back, n);
    }

    #[test]
    fn round_trip_strings(v in ".*") {
        let n = Nullable::new(v);
        let back = json::from_slice::<String>(&json::to_vec(&n).unwrap()).unwrap();
        prop_assert_eq!(back, n);
    }

    #[test]
    fn round_trip_sequences(v in prop::collection::vec(any::<Option<u16>>(), 0..16)) {
        let n = Nullable::new(v);
        let back = json::from_slice::<Vec<Option<u16>>>(&json::to_vec(&n).unwrap()).unwrap();
        prop_assert_eq!(back, n);
    }
}
