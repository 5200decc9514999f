use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::Method;
use serde::Serialize;

use crate::ClientError;

// URL path-segment set plus `/` and `%`, so an identifier can neither split
// nor pre-encode a segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// HTTP methods the API understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// `GET`, the only method the typed accessors use.
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Uppercase method name as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// One outbound API call, before it is turned into an HTTP request.
///
/// `path` is relative to the client base URL and may carry a query string.
/// The body type defaults to `()` for calls that send nothing.
#[derive(Clone, Debug)]
pub struct Envelope<B = ()> {
    method: HttpMethod,
    path: String,
    body: Option<B>,
}

impl Envelope {
    /// Builds a bodiless `GET` envelope.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            body: None,
        }
    }
}

impl<B: Serialize> Envelope<B> {
    /// Builds an envelope with an explicit method and optional JSON body.
    pub fn new(method: HttpMethod, path: impl Into<String>, body: Option<B>) -> Self {
        Self {
            method,
            path: path.into(),
            body,
        }
    }

    /// HTTP method of the call.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Path relative to the base URL, including any query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Body to be sent as JSON, if any.
    pub fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }

    /// Encodes the body as JSON bytes, or `None` when there is no body.
    pub(crate) fn encode_body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        self.body.as_ref().map(serde_json::to_vec).transpose()
    }
}

/// Percent-encodes an identifier so it stays a single path segment.
///
/// Empty, `.` and `..` identifiers would resolve to a different endpoint and
/// are rejected with [`ClientError::InvalidPath`].
pub(crate) fn encode_path_segment(value: &str) -> Result<String, ClientError> {
    if matches!(value, "" | "." | "..") {
        return Err(ClientError::InvalidPath(value.to_owned()));
    }
    Ok(utf8_percent_encode(value, PATH_SEGMENT).to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{Envelope, HttpMethod, encode_path_segment};
    use crate::ClientError;

    #[test]
    fn get_envelope_has_no_body() {
        let envelope = Envelope::get("/sites");
        assert_eq!(envelope.method(), HttpMethod::Get);
        assert_eq!(envelope.path(), "/sites");
        assert!(envelope.encode_body().expect("no body to encode").is_none());
    }

    #[test]
    fn body_is_encoded_as_json() {
        let envelope = Envelope::new(
            HttpMethod::Post,
            "/collections/abc/items",
            Some(serde_json::json!({"fields": {"name": "Hello"}})),
        );
        let bytes = envelope
            .encode_body()
            .expect("body encodes")
            .expect("body present");
        assert_eq!(bytes, br#"{"fields":{"name":"Hello"}}"#);
    }

    #[test]
    fn unencodable_body_is_reported() {
        // JSON object keys must be strings.
        let mut body = BTreeMap::new();
        body.insert(vec![1u8], "value");
        let envelope = Envelope::new(HttpMethod::Post, "/x", Some(body));
        assert!(envelope.encode_body().is_err());
    }

    #[test]
    fn path_segments_are_escaped() {
        let encode = |value: &str| encode_path_segment(value).expect("valid segment");
        assert_eq!(encode("580e63e98c9a982ac9b8b741"), "580e63e98c9a982ac9b8b741");
        assert_eq!(encode("a/b c"), "a%2Fb%20c");
        assert_eq!(encode("a+b"), "a+b");
        assert_eq!(encode("50%?#"), "50%25%3F%23");
        assert_eq!(encode("..."), "...");
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
    }

    #[test]
    fn relative_segments_are_rejected() {
        for value in ["", ".", ".."] {
            match encode_path_segment(value) {
                Err(ClientError::InvalidPath(path)) => assert_eq!(path, value),
                other => panic!("unexpected result for {value:?}: {other:?}"),
            }
        }
    }
}
