use super::*;

/// Tests closing the reception in progress.
///
/// Expected: Ok with the same reception, now closed
#[tokio::test]
async fn closes_reception_in_progress() -> Result<(), LifecycleError> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pickup_point, reception) = factory::helpers::create_open_reception(db).await?;

    let repo = ReceptionRepository::new(db);
    let closed = repo.close_last(pickup_point.id).await?;

    assert_eq!(closed.id, reception.id);
    assert_eq!(closed.status, ReceptionStatus::Closed);

    let stored = entity::prelude::Receiving::find_by_id(reception.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, ReceptionStatus::Closed);

    Ok(())
}

/// Tests closing when only closed receptions exist.
///
/// Expected: Err(NoActiveReception) and history untouched
#[tokio::test]
async fn fails_without_reception_in_progress() -> Result<(), LifecycleError> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pickup_point = factory::create_pickup_point(db).await?;
    let old = factory::create_closed_reception(db, pickup_point.id).await?;

    let repo = ReceptionRepository::new(db);
    let result = repo.close_last(pickup_point.id).await;

    assert!(matches!(
        result,
        Err(LifecycleError::NoActiveReception { pickup_point_id }) if pickup_point_id == pickup_point.id
    ));

    let stored = entity::prelude::Receiving::find_by_id(old.id)
        .one(db)
        .await?;
    assert_eq!(stored, Some(old));

    Ok(())
}

/// Tests closing twice in a row.
///
/// Expected: Ok then Err(NoActiveReception)
#[tokio::test]
async fn second_close_fails() -> Result<(), LifecycleError> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pickup_point, _reception) = factory::helpers::create_open_reception(db).await?;

    let repo = ReceptionRepository::new(db);
    repo.close_last(pickup_point.id).await?;
    let result = repo.close_last(pickup_point.id).await;

    assert!(matches!(
        result,
        Err(LifecycleError::NoActiveReception { .. })
    ));

    Ok(())
}

/// Tests the open, conflict, close, reopen sequence.
///
/// Expected: Ok(in_progress), Err(Conflict), Ok(closed), Ok(in_progress)
#[tokio::test]
async fn reopens_after_close() -> Result<(), LifecycleError> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pickup_point = factory::create_pickup_point(db).await?;
    let repo = ReceptionRepository::new(db);

    let first = repo.open(pickup_point.id).await?;
    assert_eq!(first.status, ReceptionStatus::InProgress);

    let second = repo.open(pickup_point.id).await;
    assert!(matches!(second, Err(LifecycleError::Conflict { .. })));

    let closed = repo.close_last(pickup_point.id).await?;
    assert_eq!(closed.id, first.id);
    assert_eq!(closed.status, ReceptionStatus::Closed);

    let third = repo.open(pickup_point.id).await?;
    assert_ne!(third.id, first.id);
    assert_eq!(third.status, ReceptionStatus::InProgress);
    assert!(third.seq > first.seq);

    Ok(())
}
