// ABOUTME: The standard service response envelope wrapping every HTTP reply.
// ABOUTME: Serializes as {success, message, responseObject, statusCode} for wire compatibility.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use lectern_reader::Article;

/// Envelope returned by every endpoint, produced once per request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub success: bool,
    pub message: String,
    pub response_object: Option<Article>,
    pub status_code: u16,
}

impl ServiceResponse {
    /// A 200 envelope carrying an optional payload.
    pub fn success(message: impl Into<String>, article: Option<Article>) -> Self {
        Self {
            success: true,
            message: message.into(),
            response_object: article,
            status_code: StatusCode::OK.as_u16(),
        }
    }

    /// A failure envelope with the given status code and no payload.
    pub fn failure(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            success: false,
            message: message.into(),
            response_object: None,
            status_code: status.as_u16(),
        }
    }
}

impl IntoResponse for ServiceResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let resp = ServiceResponse::failure("URL must be a string", StatusCode::BAD_REQUEST);
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "URL must be a string");
        assert_eq!(json["responseObject"], serde_json::Value::Null);
        assert_eq!(json["statusCode"], 400);
    }

    #[test]
    fn success_envelope_carries_payload() {
        let article = Article {
            url: "https://example.com".to_string(),
            title: "T".to_string(),
            content: "C".to_string(),
            word_count: 1,
        };
        let resp = ServiceResponse::success("Content extracted successfully", Some(article));
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["responseObject"]["title"], "T");
        assert_eq!(json["responseObject"]["content"], "C");
    }
}
