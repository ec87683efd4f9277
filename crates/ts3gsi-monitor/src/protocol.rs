//! Decoding and summarising the documents the plugin posts.

use ts3gsi_common::{DocumentShape, StateDocument};

pub const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn decode_document(body: &[u8]) -> serde_json::Result<StateDocument> {
    serde_json::from_slice(body)
}

/// One-line description of a received document: its shape and top keys.
pub fn summarize(doc: &StateDocument) -> String {
    let (label, section) = match doc.shape() {
        Some(DocumentShape::Raw) => ("raw", doc.data()),
        Some(DocumentShape::Derived) => ("derived", doc.state()),
        None => ("mixed", doc.data().or(doc.state())),
    };
    let keys: Vec<&str> = section
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default();
    format!(
        "{} appid={} {label} [{}]",
        doc.provider.name,
        doc.provider.appid,
        keys.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    #[test]
    fn summarizes_derived_document() {
        let body = br#"{"provider":{"name":"TeamSpeak","appid":-1},"state":{"talking":true}}"#;
        let doc = decode_document(body).unwrap();
        assert_eq!(summarize(&doc), "TeamSpeak appid=-1 derived [talking]");
    }

    #[test]
    fn summarizes_raw_document() {
        let mut data = Map::new();
        data.insert("onClientPokeEvent".into(), json!({"message": "hi"}));
        let doc = StateDocument::raw(data);
        assert_eq!(
            summarize(&doc),
            "TeamSpeak appid=-1 raw [onClientPokeEvent]"
        );
    }

    #[test]
    fn summarizes_mixed_document() {
        let body = br#"{"provider":{"name":"TeamSpeak","appid":-1},"data":{"a":{}},"state":{"b":1}}"#;
        let doc = decode_document(body).unwrap();
        assert_eq!(summarize(&doc), "TeamSpeak appid=-1 mixed [a]");
    }

    #[test]
    fn rejects_non_document_body() {
        assert!(decode_document(b"{\"state\":{}}").is_err());
        assert!(decode_document(b"not json").is_err());
    }
}
