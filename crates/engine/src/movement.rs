//! Movement primitives.
//!
//! A `Movement` is one immutable expense or income entry. Movements are only
//! ever appended; nothing in the engine edits or deletes a stored one.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{DayBucket, LedgerError, Pesos, ResultLedger};

/// Stored date format (ISO calendar date).
const DATE_FORMAT: &str = "%Y-%m-%d";
/// Stored time format (12-hour clock with AM/PM marker).
const TIME_FORMAT: &str = "%I:%M:%S %p";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Expense,
    Income,
}

impl MovementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl TryFrom<&str> for MovementKind {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            other => Err(LedgerError::CorruptRecord(format!(
                "unknown movement kind: {other}"
            ))),
        }
    }
}

/// A single recorded expense or income entry.
///
/// `day` is the caller-chosen weekday bucket; `recorded_at` is the local
/// wall-clock instant the engine accepted the movement. The two never derive
/// from each other.
#[derive(Clone, Debug, PartialEq)]
pub struct Movement {
    pub id: i64,
    pub kind: MovementKind,
    pub amount: Pesos,
    pub day: DayBucket,
    pub recorded_at: NaiveDateTime,
}

impl Movement {
    /// Amount with the sign of its effect on the balance.
    #[must_use]
    pub fn signed_amount(&self) -> Pesos {
        match self.kind {
            MovementKind::Income => self.amount,
            MovementKind::Expense => -self.amount,
        }
    }

    /// `recorded_at` date as stored, e.g. `2026-03-07`.
    #[must_use]
    pub fn recorded_date(&self) -> String {
        self.recorded_at.format(DATE_FORMAT).to_string()
    }

    /// `recorded_at` time as stored, e.g. `07:04:05 PM`.
    #[must_use]
    pub fn recorded_time(&self) -> String {
        self.recorded_at.format(TIME_FORMAT).to_string()
    }
}

/// Movement awaiting its store-assigned id.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMovement {
    pub kind: MovementKind,
    pub amount: Pesos,
    pub day: DayBucket,
    pub recorded_at: NaiveDateTime,
}

impl NewMovement {
    pub fn new(
        kind: MovementKind,
        amount: Pesos,
        day: DayBucket,
        recorded_at: NaiveDateTime,
    ) -> ResultLedger<Self> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(
                "amount must be > 0".to_string(),
            ));
        }
        Ok(Self {
            kind,
            amount,
            day,
            recorded_at,
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub kind: String,
    pub amount: i64,
    pub day: String,
    pub date: String,
    pub time: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&NewMovement> for ActiveModel {
    fn from(movement: &NewMovement) -> Self {
        Self {
            id: ActiveValue::NotSet,
            kind: ActiveValue::Set(movement.kind.as_str().to_string()),
            amount: ActiveValue::Set(movement.amount.pesos()),
            day: ActiveValue::Set(movement.day.as_str().to_string()),
            date: ActiveValue::Set(movement.recorded_at.format(DATE_FORMAT).to_string()),
            time: ActiveValue::Set(movement.recorded_at.format(TIME_FORMAT).to_string()),
        }
    }
}

impl TryFrom<Model> for Movement {
    type Error = LedgerError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let day = DayBucket::try_from(model.day.as_str())
            .map_err(|_| LedgerError::CorruptRecord(format!("bad day in movement {}", model.id)))?;
        let date = NaiveDate::parse_from_str(&model.date, DATE_FORMAT)
            .map_err(|_| LedgerError::CorruptRecord(format!("bad date in movement {}", model.id)))?;
        let time = NaiveTime::parse_from_str(&model.time, TIME_FORMAT)
            .map_err(|_| LedgerError::CorruptRecord(format!("bad time in movement {}", model.id)))?;

        Ok(Self {
            id: model.id,
            kind: MovementKind::try_from(model.kind.as_str())?,
            amount: Pesos::new(model.amount),
            day,
            recorded_at: NaiveDateTime::new(date, time),
        })
    }
}
