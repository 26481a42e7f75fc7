use lambda_http::{
    http::header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
    http::StatusCode,
    Body, Response,
};
use serde::Serialize;
use serde_json::{json, Value};

pub fn ok<T>(body: &T) -> Result<Response<Body>, serde_json::Error>
where
    T: Serialize,
{
    Ok(render(StatusCode::OK, serde_json::to_string(body)?))
}

/// 404 carrying `{"Message": message}`.
pub fn not_found(message: &str) -> Response<Body> {
    render(StatusCode::NOT_FOUND, json!({ "Message": message }).to_string())
}

/// 500 carrying `{"error": error}`.
pub fn server_error(error: Value) -> Response<Body> {
    render(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": error }).to_string(),
    )
}

fn render(status: StatusCode, body: String) -> Response<Body> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_CREDENTIALS, "true")
        .body(Body::Text(body))
        .expect("failed to render response")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(response: &Response<Body>) -> &str {
        match response.body() {
            Body::Text(text) => text,
            other => panic!("expected a text body, got {:?}", other),
        }
    }

    #[test]
    fn not_found_uses_the_message_key() {
        let response = not_found("Invalid movie Id");

        assert_eq!(response.status(), 404);
        assert_eq!(text(&response), r#"{"Message":"Invalid movie Id"}"#);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn server_error_wraps_the_error_value() {
        let response = server_error(json!({ "kind": "configuration" }));

        assert_eq!(response.status(), 500);
        assert_eq!(text(&response), r#"{"error":{"kind":"configuration"}}"#);
    }

    #[test]
    fn ok_serializes_the_body() {
        let response = ok(&json!({ "data": { "id": 1 } })).unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(text(&response), r#"{"data":{"id":1}}"#);
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
