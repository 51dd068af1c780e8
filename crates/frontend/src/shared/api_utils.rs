//! API utilities for talking to the backend.
//!
//! Every admin endpoint takes a bearer token; callers pull it from the auth
//! context and pass it in explicitly, so there is exactly one place tokens
//! come from (see `system::auth::context`).

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Base URL for API requests, derived from the window location.
/// The backend listens on port 8000.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Human-readable message for a failed response: prefer `message`/`error`
/// from a JSON body, fall back to the raw body, then to the status code.
pub fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
        // JSON body without a usable message; the status is all we have.
        return format!("HTTP {}", status);
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("{} - {}", status, trimmed)
    }
}

async fn into_result<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(extract_error_message(status, &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn into_unit(response: Response) -> Result<(), String> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(extract_error_message(status, &body));
    }
    Ok(())
}

pub async fn get_json<T: DeserializeOwned>(path: &str, token: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Authorization", &format!("Bearer {}", token))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    into_result(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .header("Authorization", &format!("Bearer {}", token))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    into_result(response).await
}

/// POST where the caller only cares about success.
pub async fn post_json_unit<B: Serialize>(path: &str, token: &str, body: &B) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .header("Authorization", &format!("Bearer {}", token))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    into_unit(response).await
}

/// PUT where the caller only cares about success.
pub async fn put_json_unit<B: Serialize>(path: &str, token: &str, body: &B) -> Result<(), String> {
    let response = Request::put(&api_url(path))
        .header("Authorization", &format!("Bearer {}", token))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    into_unit(response).await
}

/// POST with no payload (action endpoints like `/send`).
pub async fn post_empty(path: &str, token: &str) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .header("Authorization", &format!("Bearer {}", token))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    into_unit(response).await
}

pub async fn delete(path: &str, token: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .header("Authorization", &format!("Bearer {}", token))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    into_unit(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message_from_json_body() {
        assert_eq!(
            extract_error_message(422, r#"{"message":"Slug already taken"}"#),
            "Slug already taken"
        );
        assert_eq!(
            extract_error_message(500, r#"{"error":"boom"}"#),
            "boom"
        );
    }

    #[test]
    fn test_extract_falls_back_to_raw_text() {
        assert_eq!(
            extract_error_message(502, "Bad Gateway"),
            "502 - Bad Gateway"
        );
    }

    #[test]
    fn test_extract_falls_back_to_status() {
        assert_eq!(extract_error_message(404, ""), "HTTP 404");
        assert_eq!(extract_error_message(401, "{}"), "HTTP 401");
    }
}
