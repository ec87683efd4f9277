//! HTTP receiver: `POST /` with one state document per request.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;

use crate::protocol::{decode_document, summarize, MAX_BODY_BYTES};

#[derive(Clone)]
pub struct ReceiverState {
    /// Upper bound on reading one request body.
    pub body_timeout: Duration,
}

pub fn router(state: ReceiverState) -> Router {
    Router::new().route("/", post(receive)).with_state(state)
}

pub async fn serve(listener: TcpListener, state: ReceiverState) -> std::io::Result<()> {
    axum::serve(
        listener,
        router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
}

async fn receive(
    State(state): State<ReceiverState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    body: Body,
) -> StatusCode {
    let bytes = match tokio::time::timeout(state.body_timeout, to_bytes(body, MAX_BODY_BYTES)).await
    {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(e)) => {
            tracing::warn!(peer = %peer, error = %e, "failed to read body");
            return StatusCode::BAD_REQUEST;
        }
        Err(_) => {
            tracing::warn!(peer = %peer, "timed out reading body");
            return StatusCode::REQUEST_TIMEOUT;
        }
    };

    match decode_document(&bytes) {
        Ok(doc) => {
            tracing::info!(peer = %peer, "{}", summarize(&doc));
            tracing::debug!(peer = %peer, body = %String::from_utf8_lossy(&bytes), "document");
            StatusCode::OK
        }
        Err(e) => {
            tracing::warn!(peer = %peer, error = %e, "rejected request");
            StatusCode::BAD_REQUEST
        }
    }
}
