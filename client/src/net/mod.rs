//! Networking modules for the auth REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies failures, and `types`
//! defines the wire schema shared with the backend.

pub mod api;
pub mod error;
pub mod types;
