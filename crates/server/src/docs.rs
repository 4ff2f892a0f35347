// ABOUTME: OpenAPI document for the article reader service.
// ABOUTME: Built explicitly by the composition root and served as plain JSON.

use serde_json::{json, Value};

/// Build the OpenAPI document describing the service surface.
///
/// Documentation only: the document has no runtime effect on the pipeline
/// and is constructed here rather than registered as a side effect.
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "lectern",
            "description": "Extracts the readable article (title + body text) from a web page URL.",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/content": {
                "get": {
                    "tags": ["Article Reader"],
                    "summary": "Extract readable content from a URL",
                    "parameters": [{
                        "name": "url",
                        "in": "query",
                        "required": true,
                        "schema": { "type": "string" },
                        "description": "Absolute http(s) URL of the page to read",
                    }],
                    "responses": {
                        "200": {
                            "description": "Extracted article",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ServiceResponse" } } },
                        },
                        "400": { "description": "Missing or non-string url parameter" },
                        "500": { "description": "Fetch or extraction failure" },
                    },
                },
            },
            "/health": {
                "get": {
                    "tags": ["Health"],
                    "summary": "Liveness probe",
                    "responses": { "200": { "description": "Service is healthy" } },
                },
            },
        },
        "components": {
            "schemas": {
                "Article": {
                    "type": "object",
                    "required": ["url", "title", "content", "word_count"],
                    "properties": {
                        "url": { "type": "string" },
                        "title": { "type": "string" },
                        "content": { "type": "string" },
                        "word_count": { "type": "integer" },
                    },
                },
                "ServiceResponse": {
                    "type": "object",
                    "required": ["success", "message", "statusCode"],
                    "properties": {
                        "success": { "type": "boolean" },
                        "message": { "type": "string" },
                        "responseObject": {
                            "oneOf": [
                                { "$ref": "#/components/schemas/Article" },
                                { "type": "null" },
                            ],
                        },
                        "statusCode": { "type": "integer" },
                    },
                },
            },
        },
    })
}
