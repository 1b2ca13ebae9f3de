//! Security Module
//!
//! Response hardening for the public article pages.

pub mod middleware;

pub use middleware::security_headers_middleware;
