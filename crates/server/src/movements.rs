//! Movements API endpoints

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{DayBucket, Movement, MovementKind};
use serde::{Deserialize, Serialize};

use crate::{ServerError, server::ServerState};

#[derive(Deserialize, Serialize)]
pub struct MovementNew {
    pub amount: String,
    pub day: String,
}

#[derive(Deserialize, Serialize)]
pub struct MovementView {
    pub id: i64,
    pub kind: MovementKind,
    pub amount: String,
    pub day: DayBucket,
    pub date: String,
    pub time: String,
}

impl From<Movement> for MovementView {
    fn from(movement: Movement) -> Self {
        Self {
            id: movement.id,
            kind: movement.kind,
            amount: movement.amount.to_string(),
            day: movement.day,
            date: movement.recorded_date(),
            time: movement.recorded_time(),
        }
    }
}

#[derive(Deserialize, Serialize)]
pub struct DayView {
    pub day: DayBucket,
    pub movements: Vec<MovementView>,
    pub total: String,
    pub balance: String,
}

/// Handle requests to record an income
pub async fn income_new(
    State(state): State<ServerState>,
    Json(payload): Json<MovementNew>,
) -> Result<(StatusCode, Json<MovementView>), ServerError> {
    record(&state, MovementKind::Income, &payload).await
}

/// Handle requests to record an expense
pub async fn expense_new(
    State(state): State<ServerState>,
    Json(payload): Json<MovementNew>,
) -> Result<(StatusCode, Json<MovementView>), ServerError> {
    record(&state, MovementKind::Expense, &payload).await
}

async fn record(
    state: &ServerState,
    kind: MovementKind,
    payload: &MovementNew,
) -> Result<(StatusCode, Json<MovementView>), ServerError> {
    let day = DayBucket::try_from(payload.day.as_str())?;

    // The balance check and the append must not interleave with another
    // writer, so recording holds the write lock for both.
    let ledger = state.ledger.write().await;
    let movement = ledger.record_movement(kind, &payload.amount, day).await?;

    Ok((StatusCode::CREATED, Json(MovementView::from(movement))))
}

pub async fn day_view(
    State(state): State<ServerState>,
    Path(day): Path<String>,
) -> Result<Json<DayView>, ServerError> {
    let day = DayBucket::try_from(day.as_str())?;

    // One guard across the queries so a concurrent write cannot skew the
    // totals against the listing.
    let ledger = state.ledger.read().await;
    let movements = ledger.list_for_day(day).await?;
    let total = ledger.day_total(day).await?;
    let balance = ledger.current_balance().await?;

    Ok(Json(DayView {
        day,
        movements: movements.into_iter().map(MovementView::from).collect(),
        total: total.to_string(),
        balance: balance.to_string(),
    }))
}
