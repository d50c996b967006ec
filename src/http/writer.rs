use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Response, StatusCode};

const CRLF: &[u8] = b"\r\n";

/// Serializes `resp` in wire form, echoing the request's protocol token in
/// the status line.
///
/// The framing is fixed per status:
///
/// ```text
/// 200: status, Connection, Content-Length, blank line, body, CRLF
/// 301: status, Connection, Location, blank line, blank line
/// 404: status, Connection, blank line, blank line, " ", CRLF
/// ```
pub fn serialize_response(resp: &Response, protocol: &str) -> Bytes {
    let body_len = resp.body().map(|b| b.len()).unwrap_or(0);
    let mut buf = BytesMut::with_capacity(128 + body_len);

    // Status line
    buf.put_slice(protocol.as_bytes());
    buf.put_u8(b' ');
    buf.put_slice(resp.status().status_text().as_bytes());
    buf.put_slice(CRLF);

    buf.put_slice(b"Connection: ");
    buf.put_slice(resp.connection().as_str().as_bytes());
    buf.put_slice(CRLF);

    match resp.status() {
        StatusCode::Ok => {
            buf.put_slice(format!("Content-Length: {body_len}").as_bytes());
            buf.put_slice(CRLF);
            buf.put_slice(CRLF);
            if let Some(body) = resp.body() {
                buf.put_slice(body);
            }
            buf.put_slice(CRLF);
        }
        StatusCode::MovedPermanently => {
            buf.put_slice(b"Location: ");
            buf.put_slice(resp.location().unwrap_or_default().as_bytes());
            buf.put_slice(CRLF);
            buf.put_slice(CRLF);
            buf.put_slice(CRLF);
        }
        StatusCode::NotFound => {
            buf.put_slice(CRLF);
            buf.put_slice(CRLF);
            buf.put_u8(b' ');
            buf.put_slice(CRLF);
        }
    }

    buf.freeze()
}

/// A serialized reply plus how much of it has reached the peer.
pub struct ResponseWriter {
    buffer: Bytes,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response, protocol: &str) -> Self {
        Self {
            buffer: serialize_response(response, protocol),
            written: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
