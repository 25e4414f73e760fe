//! MCP protocol session.
//!
//! [`ProtocolSession`] owns the handshake, the session id and the
//! session-scoped request counter. State machine:
//!
//! ```text
//! NoSession --ensure_session ok--> Active --call--> Active
//! NoSession --ensure_session err--> NoSession
//! any       --close--> Closed
//! ```
//!
//! Whether a failed `call` drops the session is decided by [`SessionPolicy`].
//! Calls on one session are serialized.

use crate::mcp::error::{McpError, Result};
use crate::mcp::protocol::{ClientInfo, InitializeParams, JsonRpcRequest, extract_result};
use crate::mcp::sse::parse_event_stream;
use crate::mcp::transport::RpcTransport;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// What a failed `call` does to the cached session id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPolicy {
    /// Keep the session; a transient failure does not force a re-handshake.
    #[default]
    KeepOnCallFailure,
    /// Drop the session; the next call performs a fresh handshake.
    InvalidateOnCallFailure,
}

struct SessionInner<T> {
    /// `None` once closed.
    transport: Option<T>,
    session_id: Option<String>,
    request_counter: u64,
}

impl<T> SessionInner<T> {
    fn next_id(&mut self) -> u64 {
        self.request_counter += 1;
        self.request_counter
    }
}

/// A session with the remote tool-invocation service.
pub struct ProtocolSession<T: RpcTransport> {
    inner: Mutex<SessionInner<T>>,
    policy: SessionPolicy,
}

impl<T: RpcTransport> ProtocolSession<T> {
    pub fn new(transport: T) -> Self {
        Self {
            inner: Mutex::new(SessionInner {
                transport: Some(transport),
                session_id: None,
                request_counter: 0,
            }),
            policy: SessionPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SessionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current session id, if a handshake succeeded.
    pub async fn session_id(&self) -> Option<String> {
        self.inner.lock().await.session_id.clone()
    }

    /// Last request id handed out in this session.
    pub async fn request_counter(&self) -> u64 {
        self.inner.lock().await.request_counter
    }

    pub async fn is_closed(&self) -> bool {
        self.inner.lock().await.transport.is_none()
    }

    /// Make sure a session exists, performing the handshake if needed.
    ///
    /// Idempotent: with a session already held no request is sent. A failed
    /// attempt leaves no session id behind.
    pub async fn ensure_session(&self) -> bool {
        let mut inner = self.inner.lock().await;
        match self.handshake(&mut inner).await {
            Ok(()) => true,
            Err(e) => {
                warn!("MCP initialize failed: {}", e);
                false
            }
        }
    }

    async fn handshake(&self, inner: &mut SessionInner<T>) -> Result<()> {
        if inner.session_id.is_some() {
            return Ok(());
        }
        if inner.transport.is_none() {
            return Err(McpError::TransportClosed);
        }

        inner.request_counter = 0;
        let id = inner.next_id();
        let params = serde_json::to_value(InitializeParams::new(ClientInfo::default()))?;
        let request = JsonRpcRequest::new(id, "initialize", params);

        let transport = inner.transport.as_ref().ok_or(McpError::TransportClosed)?;
        let outcome = async {
            let reply = transport.post(&request, None).await?;
            let session_id = reply.session_id.ok_or(McpError::MissingSessionId)?;
            let payload = parse_event_stream(&reply.body)?;
            if payload.get("result").is_none() {
                return Err(McpError::MissingResult);
            }
            Ok(session_id)
        }
        .await;

        match outcome {
            Ok(session_id) => {
                info!("MCP session established: {}", session_id);
                inner.session_id = Some(session_id);
                inner.request_counter = 0;
                Ok(())
            }
            Err(e) => {
                inner.session_id = None;
                Err(e)
            }
        }
    }

    /// Send one framed request within the session and return its `result`.
    ///
    /// Establishes a session first if none is held; fails with
    /// [`McpError::SessionNotInitialized`] when that is impossible.
    pub async fn call(&self, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
        let mut inner = self.inner.lock().await;
        if inner.transport.is_none() {
            return Err(McpError::TransportClosed);
        }
        if inner.session_id.is_none()
            && let Err(e) = self.handshake(&mut inner).await
        {
            warn!("MCP initialize before '{}' failed: {}", method, e);
        }
        let Some(session_id) = inner.session_id.clone() else {
            return Err(McpError::SessionNotInitialized);
        };

        let id = inner.next_id();
        let request = JsonRpcRequest::new(id, method, params);
        debug!("MCP request {} id={} session={}", method, id, session_id);

        let transport = inner.transport.as_ref().ok_or(McpError::TransportClosed)?;
        let result = async {
            let reply = transport.post(&request, Some(&session_id)).await?;
            let payload = parse_event_stream(&reply.body)?;
            extract_result(payload)
        }
        .await;

        if let Err(e) = &result
            && self.policy == SessionPolicy::InvalidateOnCallFailure
        {
            debug!("Dropping MCP session {} after failed call: {}", session_id, e);
            inner.session_id = None;
        }
        result
    }

    /// Release the transport. Every later operation fails.
    pub async fn close(&self) {
        let mut inner = self.inner.lock().await;
        inner.transport = None;
        inner.session_id = None;
    }
}
