//! HTTP plumbing shared by the provider adapters.

use desk_application::GatewayError;
use std::time::Duration;

pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, GatewayError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GatewayError::Other(format!("failed to create HTTP client: {e}")))
}

/// Map a transport-level failure (no HTTP status received)
pub(crate) fn send_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(format!("HTTP request failed: {e}"))
    }
}

/// Map a non-success HTTP status to a gateway error
pub(crate) fn status_error(status: reqwest::StatusCode, body: String) -> GatewayError {
    match status.as_u16() {
        401 | 403 => GatewayError::AuthenticationFailed,
        429 => GatewayError::RateLimited,
        408 | 504 => GatewayError::Timeout,
        _ => GatewayError::RequestFailed(format!("HTTP {status}: {body}")),
    }
}

/// Send a prepared request and return the response body on success
pub(crate) async fn send_checked(
    request: reqwest::RequestBuilder,
) -> Result<reqwest::Response, GatewayError> {
    let response = request.send().await.map_err(send_error)?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(status_error(status, body));
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, String::new()),
            GatewayError::AuthenticationFailed
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, String::new()),
            GatewayError::RateLimited
        ));
        let err = status_error(StatusCode::BAD_REQUEST, "bad model".to_string());
        assert_eq!(
            err.to_string(),
            "Request failed: HTTP 400 Bad Request: bad model"
        );
    }
}
