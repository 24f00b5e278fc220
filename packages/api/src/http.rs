//! Response handling shared by every REST call.
//!
//! The backend always answers with a JSON body, error or not, so each call reads the
//! body first and only then decides. Reads succeed on a 2xx status; mutations also
//! need a truthy `success` flag. On failure the body's `message` is surfaced verbatim,
//! falling back to an operation-specific string.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

pub(crate) fn with_bearer(request: RequestBuilder, token: &str) -> RequestBuilder {
    request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"))
}

/// Status plus the parsed body. A missing or non-JSON body parses as `Null`.
pub(crate) async fn read_body(response: Response) -> Result<(StatusCode, Value), ApiError> {
    let status = response.status();
    let bytes = response.bytes().await?;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    Ok((status, body))
}

/// `message`, else `error`, when either is a non-empty string.
pub(crate) fn message_of(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|field| body.get(*field).and_then(Value::as_str))
        .find(|text| !text.trim().is_empty())
        .map(str::to_string)
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        Some(Value::Null) | None => false,
    }
}

fn server_error(status: StatusCode, body: &Value, fallback: &str) -> ApiError {
    ApiError::Server {
        status: status.as_u16(),
        message: message_of(body).unwrap_or_else(|| fallback.to_string()),
    }
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Read endpoint: 2xx and a body of type `T`.
pub(crate) async fn expect_ok<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T, ApiError> {
    let (status, body) = read_body(response).await?;
    if !status.is_success() {
        return Err(server_error(status, &body, fallback));
    }
    decode(body)
}

/// Mutating endpoint: 2xx, `success` truthy, and a body of type `T`.
pub(crate) async fn expect_success<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T, ApiError> {
    let (status, body) = read_body(response).await?;
    if !status.is_success() || !is_truthy(body.get("success")) {
        return Err(server_error(status, &body, fallback));
    }
    decode(body)
}
