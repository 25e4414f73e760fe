//! Shared reqwest helpers for the HTTP adapters.

use askads_application::ProviderError;
use std::time::Duration;

/// Build a client with a finite request timeout.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("ask-your-ads/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ProviderError::Transport(format!("Failed to build HTTP client: {}", e)))
}

/// Classify a reqwest failure into the provider error taxonomy.
pub fn provider_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else if e.is_connect() {
        ProviderError::Connection(e.to_string())
    } else if let Some(status) = e.status() {
        ProviderError::HttpStatus {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    } else if e.is_decode() {
        ProviderError::Protocol(e.to_string())
    } else {
        ProviderError::Transport(e.to_string())
    }
}

/// Turn a non-2xx response into `HttpStatus`, keeping a short body excerpt.
pub async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let reason = status.canonical_reason().unwrap_or("Unknown");
    let message = if body.is_empty() {
        reason.to_string()
    } else {
        format!("{} ({})", reason, truncate(&body, 200))
    };
    Err(ProviderError::HttpStatus {
        status: status.as_u16(),
        message,
    })
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Local HTTP server for adapter tests.
#[cfg(test)]
pub(crate) mod test_server {
    use axum::Router;

    /// Serve `router` on an ephemeral loopback port and return its base URL.
    pub async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }
}
