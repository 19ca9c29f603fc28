use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::LedgerError;

use serde::Serialize;
pub use server::{run, run_with_listener};

mod balance;
mod movements;
mod server;

pub struct ServerError(LedgerError);

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_ledger_error(err: &LedgerError) -> StatusCode {
    match err {
        LedgerError::UnknownDay(_) => StatusCode::BAD_REQUEST,
        LedgerError::CorruptRecord(_) | LedgerError::Database(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        LedgerError::InvalidAmount(_)
        | LedgerError::BelowMinimum(_)
        | LedgerError::InsufficientBalance(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn message_for_ledger_error(err: LedgerError) -> String {
    match err {
        LedgerError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        LedgerError::CorruptRecord(detail) => {
            tracing::error!("corrupt record: {detail}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let status = status_for_ledger_error(&self.0);
        let error = message_for_ledger_error(self.0);

        (status, Json(Error { error })).into_response()
    }
}

impl From<LedgerError> for ServerError {
    fn from(value: LedgerError) -> Self {
        Self(value)
    }
}
