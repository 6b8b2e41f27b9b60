use super::*;

/// Tests opening a reception at a pickup point without history.
///
/// Verifies that the reception is stored in progress and bound to the
/// pickup point.
///
/// Expected: Ok with in_progress reception
#[tokio::test]
async fn opens_reception() -> Result<(), LifecycleError> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pickup_point = factory::create_pickup_point(db).await?;

    let repo = ReceptionRepository::new(db);
    let reception = repo.open(pickup_point.id).await?;

    assert_eq!(reception.pickup_point_id, pickup_point.id);
    assert_eq!(reception.status, ReceptionStatus::InProgress);

    let stored = entity::prelude::Receiving::find_by_id(reception.id)
        .one(db)
        .await?;
    assert_eq!(stored, Some(reception));

    Ok(())
}

/// Tests opening while another reception is in progress.
///
/// Expected: Err(Conflict) and no second reception stored
#[tokio::test]
async fn conflicts_with_reception_in_progress() -> Result<(), LifecycleError> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pickup_point, _reception) = factory::helpers::create_open_reception(db).await?;

    let repo = ReceptionRepository::new(db);
    let result = repo.open(pickup_point.id).await;

    assert!(matches!(
        result,
        Err(LifecycleError::Conflict { pickup_point_id }) if pickup_point_id == pickup_point.id
    ));

    let count = entity::prelude::Receiving::find()
        .filter(entity::receiving::Column::PickupPointId.eq(pickup_point.id))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests opening after earlier receptions were closed.
///
/// Verifies that closed history does not block a new reception and that the
/// new reception is ordered after it.
///
/// Expected: Ok with seq after the closed receptions
#[tokio::test]
async fn opens_after_closed_receptions() -> Result<(), LifecycleError> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pickup_point = factory::create_pickup_point(db).await?;
    factory::reception::ReceptionFactory::new(db, pickup_point.id)
        .status(ReceptionStatus::Closed)
        .receiving_datetime(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let closed = factory::reception::ReceptionFactory::new(db, pickup_point.id)
        .status(ReceptionStatus::Closed)
        .receiving_datetime(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let repo = ReceptionRepository::new(db);
    let reception = repo.open(pickup_point.id).await?;

    assert_eq!(reception.status, ReceptionStatus::InProgress);
    assert!(reception.seq > closed.seq);

    Ok(())
}

/// Tests opening at a pickup point that does not exist.
///
/// Expected: Err(PickupPointNotFound)
#[tokio::test]
async fn fails_for_unknown_pickup_point() -> Result<(), LifecycleError> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let missing = Uuid::new_v4();

    let repo = ReceptionRepository::new(db);
    let result = repo.open(missing).await;

    assert!(matches!(
        result,
        Err(LifecycleError::PickupPointNotFound(id)) if id == missing
    ));

    Ok(())
}

/// Tests that an open reception at one pickup point does not block another.
///
/// Expected: Ok for the second pickup point
#[tokio::test]
async fn isolates_pickup_points() -> Result<(), LifecycleError> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_busy, _reception) = factory::helpers::create_open_reception(db).await?;
    let idle = factory::create_pickup_point(db).await?;

    let repo = ReceptionRepository::new(db);
    let reception = repo.open(idle.id).await?;

    assert_eq!(reception.pickup_point_id, idle.id);

    Ok(())
}

/// Tests concurrent opens against the same pickup point.
///
/// Eight tasks race to open a reception. The single-connection SQLite pool
/// runs the transactions one after another, so this checks the sequential
/// outcome. Row lock contention is covered by the Postgres tests.
///
/// Expected: exactly one Ok, seven Err(Conflict), one reception stored
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn admits_single_concurrent_open() -> Result<(), LifecycleError> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pickup_point = factory::create_pickup_point(db).await?;

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..8 {
        let db = db.clone();
        let pickup_point_id = pickup_point.id;
        tasks.spawn(async move { ReceptionRepository::new(&db).open(pickup_point_id).await });
    }

    let mut opened = 0;
    let mut conflicts = 0;
    while let Some(joined) = tasks.join_next().await {
        match joined.unwrap() {
            Ok(_) => opened += 1,
            Err(LifecycleError::Conflict { .. }) => conflicts += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(opened, 1);
    assert_eq!(conflicts, 7);

    let stored = entity::prelude::Receiving::find()
        .filter(entity::receiving::Column::PickupPointId.eq(pickup_point.id))
        .filter(entity::receiving::Column::Status.eq(ReceptionStatus::InProgress))
        .count(db)
        .await?;
    assert_eq!(stored, 1);

    Ok(())
}

/// Tests that the schema itself rejects a second in-progress reception.
///
/// Inserts directly through the factory, bypassing the repository checks.
///
/// Expected: Err from the partial unique index
#[tokio::test]
async fn schema_rejects_second_in_progress_reception() -> Result<(), LifecycleError> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pickup_point, _reception) = factory::helpers::create_open_reception(db).await?;

    let result = factory::create_reception(db, pickup_point.id).await;

    assert!(result.is_err());

    Ok(())
}
