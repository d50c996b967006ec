//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.x server: GET only, three possible replies
//! (200, 301, 404), and persistent connections bounded by an idle timeout.
//!
//! # Architecture
//!
//! - **`parser`**: Turns the bytes of a single read into a [`request::ParsedRequest`]
//! - **`request`**: Request representation and header helpers
//! - **`handler`**: Decides the reply from the request and the document root
//! - **`response`**: Status codes and the reply descriptor
//! - **`writer`**: Serializes replies and writes them to the client
//! - **`connection`**: The per-connection state machine
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────┐
//!        │ AwaitingRequest  │ ← One read, bounded by the idle timeout
//!        └──────┬───────────┘
//!               │ Request parsed        (timeout / empty / unparseable → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Decide, serialize, write
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Keep-Alive → AwaitingRequest (same connection)
//!               └─ Close → Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use minihttpd::config::Config;
//! use minihttpd::http::connection::{Connection, ConnectionContext};
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::default();
//!     let ctx = ConnectionContext::from_config(&cfg);
//!     let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
//!
//!     loop {
//!         let (socket, addr) = listener.accept().await?;
//!         let ctx = ctx.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, addr.to_string(), ctx);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod handler;
pub mod connection;
pub mod writer;
