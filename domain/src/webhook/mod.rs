//! Partner webhook payloads.

pub mod event;
