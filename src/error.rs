//! Shared error contract.
//!
//! Every domain error carries a stable machine code alongside its display
//! message. Route handlers put the code into the JSON error body so clients
//! can branch without string matching.

/// Structured error code and retry hint for a domain error.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}
