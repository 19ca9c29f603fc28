//! Storage boundary for movements.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{DayBucket, Movement, NewMovement, ResultLedger, movement};

/// Append-only collection of recorded movements.
///
/// `append` assigns the unique id and persists the movement durably before
/// returning. Both queries return movements in insertion order, oldest first.
// The engine is generic over the store, so callers always name a concrete type.
#[allow(async_fn_in_trait)]
pub trait LedgerStore {
    async fn append(&self, movement: NewMovement) -> ResultLedger<Movement>;
    async fn query_all(&self) -> ResultLedger<Vec<Movement>>;
    async fn query_by_day(&self, day: DayBucket) -> ResultLedger<Vec<Movement>>;
}

/// [`LedgerStore`] over a SQLite database.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    database: DatabaseConnection,
}

impl SqliteStore {
    /// Wraps an already-connected (and migrated) database.
    #[must_use]
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

impl LedgerStore for SqliteStore {
    async fn append(&self, movement: NewMovement) -> ResultLedger<Movement> {
        let model = movement::ActiveModel::from(&movement)
            .insert(&self.database)
            .await?;
        Movement::try_from(model)
    }

    async fn query_all(&self) -> ResultLedger<Vec<Movement>> {
        let models = movement::Entity::find()
            .order_by_asc(movement::Column::Id)
            .all(&self.database)
            .await?;
        models.into_iter().map(Movement::try_from).collect()
    }

    async fn query_by_day(&self, day: DayBucket) -> ResultLedger<Vec<Movement>> {
        let models = movement::Entity::find()
            .filter(movement::Column::Day.eq(day.as_str()))
            .order_by_asc(movement::Column::Id)
            .all(&self.database)
            .await?;
        models.into_iter().map(Movement::try_from).collect()
    }
}
