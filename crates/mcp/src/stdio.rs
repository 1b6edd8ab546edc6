// Newline-delimited JSON-RPC over stdin/stdout

use crate::protocol::{JsonRpcError, JsonRpcResponse};
use crate::server::McpSession;
use anyhow::Result;
use futures::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::broadcast::error::TryRecvError;
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};
use tracing::{debug, info, warn};

/// Serve one session over the process's stdin and stdout until stdin closes.
pub async fn run(session: &McpSession) -> Result<()> {
    serve(session, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Serve one session over any line-oriented byte stream pair.
///
/// Messages are handled strictly one at a time: the next line is not read
/// before the previous one has been answered. Notifications emitted while
/// handling a message are written ahead of its response.
pub async fn serve<R, W>(session: &McpSession, reader: R, writer: W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = FramedRead::new(reader, LinesCodec::new());
    let mut sink = FramedWrite::new(writer, LinesCodec::new());
    let mut notifications = session.subscribe();

    info!("Serving MCP over stdio");

    while let Some(line) = lines.next().await {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<Value>(line) {
            Ok(payload) => session.handle_payload(payload).await,
            Err(e) => {
                warn!(error = %e, "Unparseable message on stdin");
                serde_json::to_value(JsonRpcResponse::error(
                    Value::Null,
                    JsonRpcError::parse_error(),
                ))
                .ok()
            }
        };

        loop {
            match notifications.try_recv() {
                Ok(notification) => sink.send(serde_json::to_string(&notification)?).await?,
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, "Dropped notifications for a slow stdout")
                }
                Err(_) => break,
            }
        }

        if let Some(reply) = reply {
            sink.send(serde_json::to_string(&reply)?).await?;
        }
    }

    debug!("stdin closed");
    Ok(())
}
