use engine::{DayBucket, Ledger, LedgerError, MovementKind, Pesos, SqliteStore};
use migration::MigratorTrait;
use sea_orm::Database;
use uuid::Uuid;

const MINIMUM: i64 = 5000;

async fn ledger() -> Ledger<SqliteStore> {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Ledger::new(SqliteStore::new(db), Pesos::new(MINIMUM))
}

async fn ledger_with_file_db() -> (Ledger<SqliteStore>, String, std::path::PathBuf) {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_dbs");
    std::fs::create_dir_all(&root).unwrap();

    let path = root.join(format!("ledger_{}.db", Uuid::new_v4()));
    let url = format!("sqlite:{}?mode=rwc", path.display());

    let db = Database::connect(&url).await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();

    (
        Ledger::new(SqliteStore::new(db), Pesos::new(MINIMUM)),
        url,
        path,
    )
}

#[tokio::test]
async fn empty_ledger_balances_to_zero() {
    let ledger = ledger().await;

    assert_eq!(ledger.current_balance().await.unwrap(), Pesos::ZERO);
    assert_eq!(ledger.day_total(DayBucket::Monday).await.unwrap(), Pesos::ZERO);
    assert!(ledger.list_for_day(DayBucket::Monday).await.unwrap().is_empty());
}

#[tokio::test]
async fn income_and_expense_drive_the_balance() {
    let ledger = ledger().await;

    let income = ledger
        .record_movement(MovementKind::Income, "10.000", DayBucket::Monday)
        .await
        .unwrap();
    assert_eq!(income.kind, MovementKind::Income);
    assert_eq!(income.amount, Pesos::new(10000));
    assert_eq!(income.day, DayBucket::Monday);
    assert!(income.id > 0);

    ledger
        .record_movement(MovementKind::Expense, "4.000", DayBucket::Monday)
        .await
        .unwrap();

    assert_eq!(ledger.current_balance().await.unwrap(), Pesos::new(6000));
    assert_eq!(
        ledger.day_total(DayBucket::Monday).await.unwrap(),
        Pesos::new(6000)
    );
}

#[tokio::test]
async fn overspending_is_rejected_and_leaves_no_trace() {
    let ledger = ledger().await;
    ledger
        .record_movement(MovementKind::Income, "10.000", DayBucket::Monday)
        .await
        .unwrap();
    ledger
        .record_movement(MovementKind::Expense, "4.000", DayBucket::Monday)
        .await
        .unwrap();

    let err = ledger
        .record_movement(MovementKind::Expense, "7.000", DayBucket::Monday)
        .await
        .unwrap_err();
    assert_eq!(err, LedgerError::InsufficientBalance(Pesos::new(6000)));

    assert_eq!(ledger.current_balance().await.unwrap(), Pesos::new(6000));
    assert_eq!(ledger.list_for_day(DayBucket::Monday).await.unwrap().len(), 2);
}

#[tokio::test]
async fn expense_on_an_empty_ledger_is_rejected() {
    let ledger = ledger().await;

    let err = ledger
        .record_movement(MovementKind::Expense, "5.000", DayBucket::Monday)
        .await
        .unwrap_err();
    assert_eq!(err, LedgerError::InsufficientBalance(Pesos::ZERO));
}

#[tokio::test]
async fn expense_may_spend_the_exact_balance() {
    let ledger = ledger().await;
    ledger
        .record_movement(MovementKind::Income, "10.000", DayBucket::Monday)
        .await
        .unwrap();

    ledger
        .record_movement(MovementKind::Expense, "10.000", DayBucket::Monday)
        .await
        .unwrap();

    assert!(ledger.current_balance().await.unwrap().is_zero());
}

#[tokio::test]
async fn the_minimum_is_inclusive() {
    let ledger = ledger().await;
    assert_eq!(ledger.minimum_amount(), Pesos::new(MINIMUM));

    ledger
        .record_movement(MovementKind::Income, "5.000", DayBucket::Monday)
        .await
        .unwrap();

    let err = ledger
        .record_movement(MovementKind::Income, "4.999", DayBucket::Monday)
        .await
        .unwrap_err();
    assert_eq!(err, LedgerError::BelowMinimum(Pesos::new(MINIMUM)));

    assert_eq!(ledger.list_for_day(DayBucket::Monday).await.unwrap().len(), 1);
}

#[tokio::test]
async fn the_minimum_applies_to_expenses_too() {
    let ledger = ledger().await;
    ledger
        .record_movement(MovementKind::Income, "10.000", DayBucket::Monday)
        .await
        .unwrap();

    let err = ledger
        .record_movement(MovementKind::Expense, "4.999", DayBucket::Monday)
        .await
        .unwrap_err();
    assert_eq!(err, LedgerError::BelowMinimum(Pesos::new(MINIMUM)));
}

#[tokio::test]
async fn day_totals_ignore_other_buckets() {
    let ledger = ledger().await;
    ledger
        .record_movement(MovementKind::Income, "10.000", DayBucket::Monday)
        .await
        .unwrap();
    ledger
        .record_movement(MovementKind::Expense, "5.000", DayBucket::Tuesday)
        .await
        .unwrap();

    assert_eq!(
        ledger.day_total(DayBucket::Monday).await.unwrap(),
        Pesos::new(10000)
    );

    let tuesday = ledger.day_total(DayBucket::Tuesday).await.unwrap();
    assert_eq!(tuesday, Pesos::new(-5000));
    assert!(tuesday.is_negative());

    assert_eq!(ledger.current_balance().await.unwrap(), Pesos::new(5000));
}

#[tokio::test]
async fn listing_keeps_insertion_order() {
    let ledger = ledger().await;
    ledger
        .record_movement(MovementKind::Income, "10.000", DayBucket::Monday)
        .await
        .unwrap();
    ledger
        .record_movement(MovementKind::Expense, "5.000", DayBucket::Monday)
        .await
        .unwrap();
    ledger
        .record_movement(MovementKind::Income, "7.000", DayBucket::Tuesday)
        .await
        .unwrap();
    ledger
        .record_movement(MovementKind::Income, "6.000", DayBucket::Monday)
        .await
        .unwrap();

    let monday = ledger.list_for_day(DayBucket::Monday).await.unwrap();
    assert_eq!(monday.len(), 3);
    assert_eq!(
        monday.iter().map(|m| m.kind).collect::<Vec<_>>(),
        vec![
            MovementKind::Income,
            MovementKind::Expense,
            MovementKind::Income
        ]
    );
    assert_eq!(
        monday.iter().map(|m| m.amount.pesos()).collect::<Vec<_>>(),
        vec![10000, 5000, 6000]
    );
    assert!(monday.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[tokio::test]
async fn unparsable_amounts_never_touch_the_store() {
    let ledger = ledger().await;

    for raw in ["", "   ", "abc", "12a", "$ 100"] {
        let err = ledger
            .record_movement(MovementKind::Income, raw, DayBucket::Monday)
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
    }

    assert_eq!(ledger.current_balance().await.unwrap(), Pesos::ZERO);
    assert!(ledger.list_for_day(DayBucket::Monday).await.unwrap().is_empty());
}

#[tokio::test]
async fn balance_saturates_rather_than_wrapping() {
    let ledger = ledger().await;
    let max = i64::MAX.to_string();

    ledger
        .record_movement(MovementKind::Income, &max, DayBucket::Monday)
        .await
        .unwrap();
    ledger
        .record_movement(MovementKind::Income, &max, DayBucket::Monday)
        .await
        .unwrap();

    assert_eq!(
        ledger.current_balance().await.unwrap(),
        Pesos::new(i64::MAX)
    );
    assert_eq!(
        ledger.day_total(DayBucket::Monday).await.unwrap(),
        Pesos::new(i64::MAX)
    );
}

#[tokio::test]
async fn balance_survives_reopening_the_database() {
    let (ledger, url, path) = ledger_with_file_db().await;
    ledger
        .record_movement(MovementKind::Income, "12.000", DayBucket::Monday)
        .await
        .unwrap();

    drop(ledger);

    let db = Database::connect(&url).await.unwrap();
    let reopened = Ledger::new(SqliteStore::new(db), Pesos::new(MINIMUM));

    assert_eq!(reopened.current_balance().await.unwrap(), Pesos::new(12000));
    let monday = reopened.list_for_day(DayBucket::Monday).await.unwrap();
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[0].amount, Pesos::new(12000));

    drop(reopened);
    let _ = std::fs::remove_file(path);
}
