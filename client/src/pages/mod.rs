//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and submit wiring and delegates the shared
//! card chrome to `components`.

pub mod home;
pub mod login;
pub mod signup;
