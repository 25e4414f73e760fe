//! MCP (Model Context Protocol) tool-service adapter
//!
//! JSON-RPC 2.0 requests are POSTed over HTTP; replies arrive as a
//! text-event-stream whose first `data:` line carries the payload. Session
//! continuity rides on the `mcp-session-id` header.
//!
//! - [`sse`]: pure event-stream parser
//! - [`protocol`]: request envelope and handshake payloads
//! - [`transport`]: [`RpcTransport`](transport::RpcTransport) port and the reqwest adapter
//! - [`session`]: [`ProtocolSession`](session::ProtocolSession): handshake, id counter, framing
//! - [`client`]: `ToolService` implementation and per-turn factory

pub mod client;
pub mod error;
pub mod protocol;
pub mod session;
pub mod sse;
pub mod transport;
