//! Request data extractor
//!
//! Accepts a JSON object or a form-encoded body and yields a flat map.
//! Form-encoded values arrive as strings.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Form,
};
use serde_json::{Map, Value};

use super::error::ApiError;

pub struct RequestData(pub Map<String, Value>);

/// `application/json` or any `+json` media type, compared case-insensitively
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

#[async_trait]
impl<S> FromRequest<S> for RequestData
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json_content_type(req.headers()) {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;

            let value: Value = serde_json::from_slice(&body).map_err(|e| {
                ApiError::BadRequest(format!("Failed to parse the request body as JSON: {}", e))
            })?;

            return match value {
                Value::Object(map) => Ok(Self(map)),
                _ => Err(ApiError::BadRequest(
                    "Request body must be a JSON object".to_string(),
                )),
            };
        }

        let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        Ok(Self(
            fields
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type(&headers("application/json")));
        assert!(is_json_content_type(&headers("Application/JSON; charset=utf-8")));
        assert!(is_json_content_type(&headers("application/merge-patch+json")));

        assert!(!is_json_content_type(&headers(
            "application/x-www-form-urlencoded"
        )));
        assert!(!is_json_content_type(&headers("text/json")));
        assert!(!is_json_content_type(&HeaderMap::new()));
    }
}
