use chrono::Local;

pub use day::DayBucket;
pub use error::LedgerError;
pub use money::Pesos;
pub use movement::{Movement, MovementKind, NewMovement};
pub use store::{LedgerStore, SqliteStore};

mod day;
mod error;
mod money;
mod movement;
mod store;

type ResultLedger<T> = Result<T, LedgerError>;

/// The ledger accounting engine.
///
/// Owns the recording rules and the balance arithmetic; holds no movement
/// state of its own. Every query re-derives its answer from the injected
/// store, so each call sees a fresh consistent snapshot.
#[derive(Debug)]
pub struct Ledger<S> {
    store: S,
    minimum_amount: Pesos,
}

impl<S: LedgerStore> Ledger<S> {
    pub fn new(store: S, minimum_amount: Pesos) -> Self {
        Self {
            store,
            minimum_amount,
        }
    }

    /// The configured per-movement floor.
    #[must_use]
    pub fn minimum_amount(&self) -> Pesos {
        self.minimum_amount
    }

    /// Running balance over every movement ever recorded: income minus
    /// expenses, regardless of day bucket. An empty ledger balances to zero.
    pub async fn current_balance(&self) -> ResultLedger<Pesos> {
        let movements = self.store.query_all().await?;
        Ok(signed_total(&movements))
    }

    /// Income minus expenses restricted to one day bucket. Can be negative.
    pub async fn day_total(&self, day: DayBucket) -> ResultLedger<Pesos> {
        let movements = self.store.query_by_day(day).await?;
        Ok(signed_total(&movements))
    }

    /// Movements filed under `day`, oldest first (store order, no re-sorting).
    pub async fn list_for_day(&self, day: DayBucket) -> ResultLedger<Vec<Movement>> {
        self.store.query_by_day(day).await
    }

    /// Records one movement. The only state-changing operation.
    ///
    /// `raw_amount` is parsed first; the parsed amount must reach the
    /// configured minimum, and an expense must not exceed the running balance
    /// (spending the exact balance is allowed). Only after every check passes
    /// is the creation timestamp taken and the movement appended, so a
    /// rejection never leaves a partial write behind.
    pub async fn record_movement(
        &self,
        kind: MovementKind,
        raw_amount: &str,
        day: DayBucket,
    ) -> ResultLedger<Movement> {
        let amount: Pesos = raw_amount.parse()?;

        if amount < self.minimum_amount {
            return Err(LedgerError::BelowMinimum(self.minimum_amount));
        }

        if kind == MovementKind::Expense {
            let balance = self.current_balance().await?;
            if amount > balance {
                return Err(LedgerError::InsufficientBalance(balance));
            }
        }

        let movement = NewMovement::new(kind, amount, day, Local::now().naive_local())?;
        self.store.append(movement).await
    }
}

fn signed_total(movements: &[Movement]) -> Pesos {
    movements.iter().fold(Pesos::ZERO, |total, movement| {
        total.saturating_add(movement.signed_amount())
    })
}
