use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use pedidos::application::services::{ExtractionError, decode_payload};

#[test]
fn given_plain_base64_when_decoding_then_returns_bytes() {
    let encoded = STANDARD.encode(b"PK\x03\x04 workbook");

    assert_eq!(decode_payload(&encoded).unwrap(), b"PK\x03\x04 workbook");
}

#[test]
fn given_data_uri_when_decoding_then_strips_prefix() {
    let encoded = format!(
        "data:application/vnd.openxmlformats-officedocument.spreadsheetml.sheet;base64,{}",
        STANDARD.encode(b"hello")
    );

    assert_eq!(decode_payload(&encoded).unwrap(), b"hello");
}

#[test]
fn given_line_wrapped_unpadded_base64_when_decoding_then_accepts_it() {
    let encoded = STANDARD.encode(b"hello world!!");
    let wrapped = format!("{}\n{}", &encoded[..8], encoded[8..].trim_end_matches('='));

    assert_eq!(decode_payload(&wrapped).unwrap(), b"hello world!!");
}

#[test]
fn given_invalid_base64_when_decoding_then_returns_invalid_input() {
    let result = decode_payload("not base64 at all!");

    assert!(matches!(result, Err(ExtractionError::InvalidInput(_))));
}

#[test]
fn given_data_uri_without_base64_marker_when_decoding_then_returns_invalid_input() {
    let result = decode_payload("data:text/plain,hello");

    assert!(matches!(result, Err(ExtractionError::InvalidInput(_))));
}
