use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_INCOMING_ID_LEN: usize = 128;

/// Correlation id for one request, available to handlers as an extension.
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

impl RequestId {
    /// Trust an upstream proxy's id when it is short and non-blank,
    /// otherwise mint a fresh UUID v4.
    fn from_headers(headers: &HeaderMap) -> Self {
        let incoming = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty() && s.len() <= MAX_INCOMING_ID_LEN);

        match incoming {
            Some(id) => Self(id.to_string()),
            None => Self(Uuid::new_v4().to_string()),
        }
    }
}

pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_headers(request.headers());
    tracing::Span::current().record("request_id", request_id.0.as_str());

    let echoed = HeaderValue::from_str(&request_id.0).ok();
    request.extensions_mut().insert(request_id);

    let mut response = next.run(request).await;
    if let Some(value) = echoed {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reuses_trimmed_incoming_id() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  proxy-42 "));
        assert_eq!(RequestId::from_headers(&headers).0, "proxy-42");
    }

    #[test]
    fn test_generates_uuid_for_missing_or_oversized_id() {
        let generated = RequestId::from_headers(&HeaderMap::new());
        assert!(Uuid::parse_str(&generated.0).is_ok());

        let mut headers = HeaderMap::new();
        let long = "x".repeat(MAX_INCOMING_ID_LEN + 1);
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(&long).unwrap());
        assert_ne!(RequestId::from_headers(&headers).0, long);
    }
}
