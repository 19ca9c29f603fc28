//! The module contains the error the ledger can throw.
//!
//! Validation failures ([`InvalidAmount`], [`BelowMinimum`],
//! [`InsufficientBalance`], [`UnknownDay`]) are recoverable and leave the
//! store untouched; [`CorruptRecord`] and [`Database`] report a store that
//! cannot be read back or written.
//!
//!  [`InvalidAmount`]: LedgerError::InvalidAmount
//!  [`BelowMinimum`]: LedgerError::BelowMinimum
//!  [`InsufficientBalance`]: LedgerError::InsufficientBalance
//!  [`UnknownDay`]: LedgerError::UnknownDay
//!  [`CorruptRecord`]: LedgerError::CorruptRecord
//!  [`Database`]: LedgerError::Database
use sea_orm::DbErr;
use thiserror::Error;

use crate::Pesos;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Cannot add less than {0}")]
    BelowMinimum(Pesos),
    #[error("Insufficient balance: current balance is {0}")]
    InsufficientBalance(Pesos),
    #[error("Unknown day: {0}")]
    UnknownDay(String),
    #[error("Corrupt movement record: {0}")]
    CorruptRecord(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::BelowMinimum(a), Self::BelowMinimum(b)) => a == b,
            (Self::InsufficientBalance(a), Self::InsufficientBalance(b)) => a == b,
            (Self::UnknownDay(a), Self::UnknownDay(b)) => a == b,
            (Self::CorruptRecord(a), Self::CorruptRecord(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
