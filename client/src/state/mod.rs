//! Client-side application state.
//!
//! ARCHITECTURE
//! ============
//! Plain structs hold the data; pages wrap them in `RwSignal`s provided via
//! context so transitions stay testable without a reactive runtime.

pub mod auth;
pub mod mutation;
