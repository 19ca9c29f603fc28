use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use engine::{Ledger, SqliteStore};
use tokio::net::TcpListener;
use tokio::sync::RwLock;

use crate::{balance, movements};

/// Shared handler state.
///
/// The ledger sits behind a single [`RwLock`]: reads proceed concurrently,
/// at most one movement is recorded at a time.
#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<RwLock<Ledger<SqliteStore>>>,
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/income", post(movements::income_new))
        .route("/expense", post(movements::expense_new))
        .route("/balance", get(balance::get))
        .route("/days/{day}", get(movements::day_view))
        .with_state(state)
}

pub async fn run(ledger: Ledger<SqliteStore>) {
    let listener = match TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };

    if let Err(err) = run_with_listener(ledger, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    ledger: Ledger<SqliteStore>,
    listener: TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        ledger: Arc::new(RwLock::new(ledger)),
    };

    axum::serve(listener, router(state)).await
}
