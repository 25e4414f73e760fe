//! Transport layer for MCP communication.
//!
//! [`RpcTransport`] is the seam between [`ProtocolSession`](super::session::ProtocolSession)
//! and the network: one POST in, one header + body out. [`HttpRpcTransport`]
//! is the reqwest implementation; tests script their own.

use crate::mcp::error::{McpError, Result};
use crate::mcp::protocol::JsonRpcRequest;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderValue};
use std::time::Duration;
use tracing::trace;

/// Header carrying the server-assigned session id.
pub const SESSION_HEADER: &str = "mcp-session-id";

/// Raw reply of one request
#[derive(Debug, Clone, Default)]
pub struct TransportReply {
    /// Value of the `mcp-session-id` response header, if present.
    pub session_id: Option<String>,
    /// Response body (text-event-stream).
    pub body: String,
}

/// Sends one framed request and returns the raw reply.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn post(&self, request: &JsonRpcRequest, session_id: Option<&str>)
    -> Result<TransportReply>;
}

/// HTTP POST transport backed by reqwest.
pub struct HttpRpcTransport {
    client: reqwest::Client,
    url: String,
    bearer_token: Option<String>,
}

impl HttpRpcTransport {
    pub fn new(url: impl Into<String>, bearer_token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            bearer_token,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RpcTransport for HttpRpcTransport {
    async fn post(
        &self,
        request: &JsonRpcRequest,
        session_id: Option<&str>,
    ) -> Result<TransportReply> {
        trace!("POST {} method={} id={}", self.url, request.method, request.id);

        let mut builder = self
            .client
            .post(&self.url)
            .header(ACCEPT, HeaderValue::from_static("application/json, text/event-stream"))
            .json(request);
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(id) = session_id {
            builder = builder.header(SESSION_HEADER, id);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(McpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let session_id = response
            .headers()
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        let body = response.text().await?;

        Ok(TransportReply { session_id, body })
    }
}
