//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own state and business logic so route handlers stay
//! focused on request parsing and status mapping.

pub mod chat;
pub mod conversation;
pub mod library;
