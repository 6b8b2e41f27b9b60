use super::*;
use chrono::Duration;

/// Tests that the most recently accepted product is removed first.
///
/// Expected: Ok with the second product removed, the first kept
#[tokio::test]
async fn removes_last_accepted_product() -> Result<(), LifecycleError> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pickup_point, reception) = factory::helpers::create_open_reception(db).await?;
    let now = Utc::now();
    let older = factory::product::ProductFactory::new(db, reception.id)
        .accepted_datetime(now - Duration::minutes(5))
        .build()
        .await?;
    let newer = factory::product::ProductFactory::new(db, reception.id)
        .accepted_datetime(now)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let removed = repo.remove_last(pickup_point.id).await?;

    assert_eq!(removed.id, newer.id);

    let remaining: Vec<_> = entity::prelude::Goods::find()
        .filter(entity::goods::Column::ReceivingId.eq(reception.id))
        .all(db)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(remaining, vec![older.id]);

    Ok(())
}

/// Tests removal order when two products share a timestamp.
///
/// Expected: the product with the higher seq is removed
#[tokio::test]
async fn breaks_timestamp_ties_by_seq() -> Result<(), LifecycleError> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pickup_point, reception) = factory::helpers::create_open_reception(db).await?;
    let at = Utc::now();
    let first = factory::product::ProductFactory::new(db, reception.id)
        .accepted_datetime(at)
        .seq(1)
        .build()
        .await?;
    let second = factory::product::ProductFactory::new(db, reception.id)
        .accepted_datetime(at)
        .seq(2)
        .build()
        .await?;

    let repo = ProductRepository::new(db);

    let removed = repo.remove_last(pickup_point.id).await?;
    assert_eq!(removed.id, second.id);

    let removed = repo.remove_last(pickup_point.id).await?;
    assert_eq!(removed.id, first.id);

    Ok(())
}

/// Tests removing from an empty reception.
///
/// Expected: Err(EmptyReception) and the reception still in progress
#[tokio::test]
async fn fails_on_empty_reception() -> Result<(), LifecycleError> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (pickup_point, reception) = factory::helpers::create_open_reception(db).await?;

    let repo = ProductRepository::new(db);
    let result = repo.remove_last(pickup_point.id).await;

    assert!(matches!(
        result,
        Err(LifecycleError::EmptyReception { reception_id }) if reception_id == reception.id
    ));

    let stored = entity::prelude::Receiving::find_by_id(reception.id)
        .one(db)
        .await?;
    assert_eq!(stored, Some(reception));

    Ok(())
}

/// Tests that removal never touches products of closed receptions.
///
/// Expected: Err(EmptyReception) while the closed reception keeps its product
#[tokio::test]
async fn leaves_closed_receptions_untouched() -> Result<(), LifecycleError> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pickup_point = factory::create_pickup_point(db).await?;
    let closed = factory::create_closed_reception(db, pickup_point.id).await?;
    let archived = factory::create_product(db, closed.id).await?;
    factory::create_reception(db, pickup_point.id).await?;

    let repo = ProductRepository::new(db);
    let result = repo.remove_last(pickup_point.id).await;

    assert!(matches!(result, Err(LifecycleError::EmptyReception { .. })));

    let stored = entity::prelude::Goods::find_by_id(archived.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests the full open, add, remove, close round trip.
///
/// Expected: every step Ok and the closed reception holds no products
#[tokio::test]
async fn round_trip_leaves_closed_reception_empty() -> Result<(), LifecycleError> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pickup_point = factory::create_pickup_point(db).await?;
    let receptions = ReceptionRepository::new(db);
    let products = ProductRepository::new(db);

    let reception = receptions.open(pickup_point.id).await?;
    let added = products.add(pickup_point.id, ProductType::Electronics).await?;
    let removed = products.remove_last(pickup_point.id).await?;
    let closed = receptions.close_last(pickup_point.id).await?;

    assert_eq!(removed.id, added.id);
    assert_eq!(closed.id, reception.id);
    assert_eq!(closed.status, ReceptionStatus::Closed);

    let count = entity::prelude::Goods::find()
        .filter(entity::goods::Column::ReceivingId.eq(reception.id))
        .count(db)
        .await?;
    assert_eq!(count, 0);

    Ok(())
}
