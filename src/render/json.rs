//! JSON pretty-printing for response bodies.
//!
//! The body is parsed into a [`serde_json::Value`] tree. With the
//! `preserve_order` feature enabled, objects keep the key order of the
//! original document, and `arbitrary_precision` keeps every number's
//! literal text, so re-serializing only changes whitespace.
use serde_json::Value;

/// Parses `body` as a single JSON document.
pub fn parse(body: &[u8]) -> Result<Value, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Re-serializes `body` with two-space indentation.
pub fn pretty_print(body: &[u8]) -> Result<String, serde_json::Error> {
    let value = parse(body)?;
    serde_json::to_string_pretty(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_with_two_spaces() {
        let out = pretty_print(br#"{"name":"greq","version":1}"#).unwrap();
        assert_eq!(out, "{\n  \"name\": \"greq\",\n  \"version\": 1\n}");
    }

    #[test]
    fn keeps_key_order_of_the_document() {
        let out = pretty_print(br#"{"zeta":1,"alpha":2,"mid":{"b":true,"a":null}}"#).unwrap();
        let zeta = out.find("zeta").unwrap();
        let alpha = out.find("alpha").unwrap();
        assert!(zeta < alpha, "{out}");
        assert!(out.find("\"b\"").unwrap() < out.find("\"a\"").unwrap(), "{out}");
    }

    #[test]
    fn reparsing_recovers_the_same_value() {
        let body = br#"[1, 2.5, "x", {"k": [true, false, null]}, []]"#;
        let out = pretty_print(body).unwrap();
        assert_eq!(parse(out.as_bytes()).unwrap(), parse(body).unwrap());
    }

    #[test]
    fn numbers_keep_their_literal_text() {
        let out = pretty_print(br#"{"id":12345678901234567890123,"amount":0.10000000000000000001}"#)
            .unwrap();
        assert!(out.contains("\"id\": 12345678901234567890123"), "{out}");
        assert!(out.contains("\"amount\": 0.10000000000000000001"), "{out}");
    }

    #[test]
    fn scalars_are_valid_documents() {
        assert_eq!(pretty_print(b"42").unwrap(), "42");
        assert_eq!(pretty_print(b" \"text\"\n").unwrap(), "\"text\"");
    }

    #[test]
    fn rejects_malformed_and_empty_input() {
        assert!(pretty_print(b"{invalid-json}").is_err());
        assert!(pretty_print(b"").is_err());
        assert!(pretty_print(b"{\"a\":1} trailing").is_err());
    }
}
