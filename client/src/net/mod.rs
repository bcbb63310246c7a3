//! Networking modules for the video REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues requests, `error` classifies their failures, and `types`
//! defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
