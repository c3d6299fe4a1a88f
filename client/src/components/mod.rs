//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared auth-card chrome so the login and signup
//! pages only own their form fields and submit wiring.

pub mod auth_layout;
pub mod error_banner;
pub mod submit_button;
