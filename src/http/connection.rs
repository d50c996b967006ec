use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::files::{DiskStore, DocumentRoot, FileStore};
use crate::http::handler::decide;
use crate::http::parser::parse_http_request;
use crate::http::request::ParsedRequest;
use crate::http::response::ConnectionDirective;
use crate::http::writer::ResponseWriter;

/// Everything a connection needs besides its stream. Cheap to clone, one
/// copy per accepted connection.
#[derive(Clone)]
pub struct ConnectionContext {
    pub root: Arc<DocumentRoot>,
    pub store: Arc<dyn FileStore>,
    pub idle_timeout: Duration,
    pub read_buffer_size: usize,
}

impl ConnectionContext {
    pub fn new(cfg: &Config, store: Arc<dyn FileStore>) -> Self {
        Self {
            root: Arc::new(DocumentRoot::new(&cfg.static_files)),
            store,
            idle_timeout: cfg.server.idle_timeout(),
            read_buffer_size: cfg.server.read_buffer_size,
        }
    }

    /// Serves files straight from disk.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg, Arc::new(DiskStore))
    }
}

pub struct Connection<S> {
    stream: S,
    peer: String,
    ctx: ConnectionContext,
    state: ConnectionState,
}

#[derive(Debug)]
pub enum ConnectionState {
    AwaitingRequest,
    Processing(ParsedRequest),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: impl Into<String>, ctx: ConnectionContext) -> Self {
        Self {
            stream,
            peer: peer.into(),
            ctx,
            state: ConnectionState::AwaitingRequest,
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Serves requests one at a time until the client opts out, a reply
    /// closes the connection, the idle timeout fires, or the peer goes away.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.state = match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::AwaitingRequest => match self.read_request().await? {
                    Some(req) => ConnectionState::Processing(req),
                    None => ConnectionState::Closed,
                },

                ConnectionState::Processing(req) => self.respond(req).await?,

                ConnectionState::Closed => break,
            };
        }

        if let Err(e) = self.stream.shutdown().await {
            debug!(peer = %self.peer, error = %e, "Shutdown after close failed");
        }

        Ok(())
    }

    /// Waits up to the idle timeout for one read and parses what arrived.
    ///
    /// `None` means the connection should close: timeout, peer close, or an
    /// unparseable request.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<ParsedRequest>> {
        let mut buf = vec![0u8; self.ctx.read_buffer_size];

        let n = match timeout(self.ctx.idle_timeout, self.stream.read(&mut buf)).await {
            Ok(read) => read.context("failed to read request")?,
            Err(_) => {
                info!(peer = %self.peer, "Reached the idle timeout waiting for a request");
                return Ok(None);
            }
        };

        match parse_http_request(&buf[..n], &self.ctx.root) {
            Ok(req) => Ok(Some(req)),
            Err(e) if e.is_empty() => {
                debug!(peer = %self.peer, "No request received, closing");
                Ok(None)
            }
            Err(e) => {
                warn!(peer = %self.peer, error = %e, "Dropping unparseable request");
                Ok(None)
            }
        }
    }

    async fn respond(&mut self, req: ParsedRequest) -> anyhow::Result<ConnectionState> {
        debug!(
            peer = %self.peer,
            target = %req.target,
            path = %req.resolved_path.display(),
            "Resolved request target"
        );

        // File reads block, so the decision runs on the blocking pool.
        let root = Arc::clone(&self.ctx.root);
        let store = Arc::clone(&self.ctx.store);
        let (req, decided) = tokio::task::spawn_blocking(move || {
            let decided = decide(&req, &root, store.as_ref());
            (req, decided)
        })
        .await
        .context("response task failed")?;

        let response = decided
            .with_context(|| format!("failed to serve '{}'", req.resolved_path.display()))?;

        info!(
            peer = %self.peer,
            method = req.method.as_str(),
            target = %req.target,
            status = response.status().as_u16(),
            "Request served"
        );

        let mut writer = ResponseWriter::new(&response, &req.protocol);
        writer.write_to_stream(&mut self.stream).await?;

        let keep_alive =
            !req.wants_close() && !matches!(response.connection(), ConnectionDirective::Close);

        if keep_alive {
            debug!(peer = %self.peer, "Keeping connection open");
            Ok(ConnectionState::AwaitingRequest)
        } else {
            Ok(ConnectionState::Closed)
        }
    }
}
