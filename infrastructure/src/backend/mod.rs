//! Internal REST backend adapter

pub mod client;

pub use client::{BackendSettings, HttpBackendClient, NO_ANSWER};
