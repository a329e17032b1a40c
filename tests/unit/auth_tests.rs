// Request signing tests

use std::collections::HashMap;

use wixmedia::auth::{
    canonical_string, create_authorization_header, string_to_sign, AuthError, HmacAuthHandler,
    HmacKeys,
};

const ACCESS: &str = "my_key";
const SECRET: &[u8] = b"my_secret";

fn headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("x-wix-date".to_string(), "2020-01-01".to_string());
    headers.insert("X-Wix-Meta".to_string(), "m".to_string());
    headers
}

fn sign(method: &str, path: &str, headers: &HashMap<String, String>) -> String {
    create_authorization_header(ACCESS, SECRET, method, path, headers, None).unwrap()
}

#[test]
fn test_canonical_string_example() {
    assert_eq!(
        canonical_string("POST", "/upload?x=1", &headers()),
        "POST\n/upload\nx-wix-date:2020-01-01\nx-wix-meta:m\n"
    );
}

#[test]
fn test_signature_matches_manual_signing() {
    let expected_input = "POST\n/upload\nx-wix-date:2020-01-01\nx-wix-meta:m";
    assert_eq!(string_to_sign("POST", "/upload", &headers()), expected_input);

    let keys = HmacKeys::new(ACCESS, SECRET).unwrap();
    assert_eq!(
        sign("POST", "/upload", &headers()),
        format!("WIX {}:{}", ACCESS, keys.sign_string(expected_input))
    );
}

#[test]
fn test_signature_is_deterministic() {
    let first = sign("POST", "/upload", &headers());
    for _ in 0..10 {
        assert_eq!(sign("POST", "/upload", &headers()), first);
    }
}

#[test]
fn test_signature_sensitive_to_inputs() {
    let base = sign("POST", "/upload", &headers());

    assert_ne!(sign("PUT", "/upload", &headers()), base);
    assert_ne!(sign("POST", "/upload2", &headers()), base);

    let mut changed = headers();
    changed.insert("x-wix-meta".to_string(), "n".to_string());
    changed.remove("X-Wix-Meta");
    assert_ne!(sign("POST", "/upload", &changed), base);
}

#[test]
fn test_signature_ignores_query_and_foreign_headers() {
    let base = sign("POST", "/upload", &headers());

    assert_eq!(sign("POST", "/upload?page=2", &headers()), base);

    // Only vendor-prefixed headers ever enter the signed string
    let mut extra = headers();
    extra.insert("Content-Type".to_string(), "image/png".to_string());
    extra.insert("Date".to_string(), "Wed, 01 Jan 2020 00:00:00 GMT".to_string());
    assert_eq!(sign("POST", "/upload", &extra), base);
}

#[test]
fn test_header_values_are_trimmed() {
    let mut padded = headers();
    padded.insert("x-wix-date".to_string(), "  2020-01-01\t".to_string());
    assert_eq!(
        sign("POST", "/upload", &padded),
        sign("POST", "/upload", &headers())
    );
}

#[test]
fn test_absent_header_values_skipped() {
    let with_absent = [
        ("x-wix-date", Some("2020-01-01")),
        ("x-wix-meta", Some("m")),
        ("x-wix-trace", None),
    ];
    let handler = HmacAuthHandler::new(ACCESS, SECRET).unwrap();
    assert_eq!(
        handler.create_authorization_header("POST", "/upload", with_absent, None),
        sign("POST", "/upload", &headers())
    );
}

#[test]
fn test_missing_credentials_fail_at_construction() {
    assert_eq!(
        HmacAuthHandler::new("", SECRET).unwrap_err(),
        AuthError::missing_access_key()
    );
    assert_eq!(
        HmacKeys::from_parts(Some(ACCESS.to_string()), None).unwrap_err(),
        AuthError::missing_secret_key()
    );
    assert!(create_authorization_header(ACCESS, b"", "GET", "/", &headers(), None).is_err());
}

#[test]
fn test_case_colliding_headers_sign_identically() {
    let build = || {
        let mut h = HashMap::new();
        h.insert("X-Wix-Meta".to_string(), "upper".to_string());
        h.insert("x-wix-meta".to_string(), "lower".to_string());
        h
    };

    let first = create_authorization_header("k", b"s", "POST", "/u", &build(), None).unwrap();
    for _ in 0..200 {
        assert_eq!(
            create_authorization_header("k", b"s", "POST", "/u", &build(), None).unwrap(),
            first
        );
    }
    assert_eq!(
        canonical_string("POST", "/u", &build()),
        "POST\n/u\nx-wix-meta:lower\n"
    );
}
