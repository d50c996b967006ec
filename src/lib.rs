//! minihttpd - Minimal static file server
//!
//! Core library: request parsing, response decisions and the keep-alive
//! connection loop.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
