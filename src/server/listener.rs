use std::io;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{info, warn};
use crate::http::connection::{Connection, ConnectionContext};
use crate::config::Config;

/// Pause before accepting again when the process is out of descriptors or memory.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Accepts connections forever, serving each on its own task.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!(
        root = %cfg.static_files.root.display(),
        idle_timeout_ms = cfg.server.idle_timeout_ms,
        "Listening on {}",
        cfg.server.listen_addr
    );

    serve(listener, ConnectionContext::from_config(cfg)).await
}

/// Accept loop over an already bound listener.
///
/// Accept failures never end the loop: errors tied to a single pending
/// connection are skipped, anything else is logged and retried after a
/// short pause.
pub async fn serve(listener: TcpListener, ctx: ConnectionContext) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(ref e) if is_connection_error(e) => {
                warn!(error = %e, "Dropped connection during accept");
                continue;
            }
            Err(e) => {
                tracing::error!(error = %e, "Accept failed, backing off");
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let ctx = ctx.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, peer.to_string(), ctx);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}

/// Errors that concern only the connection being accepted, not the listener.
fn is_connection_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::Interrupted
    )
}
