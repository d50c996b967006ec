//! Transport layer: binding the listener and accepting connections.

pub mod listener;
