//! Balance API endpoints

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{ServerError, server::ServerState};

#[derive(Deserialize, Serialize)]
pub struct Balance {
    pub balance: String,
}

/// Handle requests for the running balance
pub async fn get(State(state): State<ServerState>) -> Result<Json<Balance>, ServerError> {
    let ledger = state.ledger.read().await;
    let balance = ledger.current_balance().await?;

    Ok(Json(Balance {
        balance: balance.to_string(),
    }))
}
