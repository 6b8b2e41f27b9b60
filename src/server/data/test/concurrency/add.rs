use super::*;

/// Tests concurrent adds into the same in-progress reception on Postgres.
///
/// Adds queue on the reception row lock. None of them reads other products, so
/// none of them is aborted by the serializable checks.
///
/// Expected: every add Ok, all products stored with distinct seq values
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn accepts_every_concurrent_add() -> Result<(), LifecycleError> {
    let Some(test) = postgres().await else {
        return Ok(());
    };
    let db = test.db.as_ref().unwrap();

    let pickup_point = factory::create_pickup_point(db).await?;
    let reception = ReceptionRepository::new(db).open(pickup_point.id).await?;

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..RACERS {
        let db = db.clone();
        let pickup_point_id = pickup_point.id;
        tasks.spawn(async move {
            ProductRepository::new(&db)
                .add(pickup_point_id, ProductType::Electronics)
                .await
        });
    }

    let mut seqs = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let product = joined.unwrap()?;
        assert_eq!(product.receiving_id, reception.id);
        seqs.push(product.seq);
    }

    seqs.sort_unstable();
    seqs.dedup();
    assert_eq!(seqs.len(), RACERS);

    let stored = entity::prelude::Goods::find()
        .filter(entity::goods::Column::ReceivingId.eq(reception.id))
        .count(db)
        .await?;
    assert_eq!(stored, RACERS as u64);

    test.teardown().await.unwrap();

    Ok(())
}

/// Tests adds racing a CloseLast of the same pickup point.
///
/// Expected: every stored product belongs to an add that returned Ok, and the
/// failed adds report no active reception or a serialization abort
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn add_racing_close_never_lands_after_close() -> Result<(), LifecycleError> {
    let Some(test) = postgres().await else {
        return Ok(());
    };
    let db = test.db.as_ref().unwrap();

    let pickup_point = factory::create_pickup_point(db).await?;
    let reception = ReceptionRepository::new(db).open(pickup_point.id).await?;

    let mut adds = tokio::task::JoinSet::new();
    for _ in 0..RACERS {
        let db = db.clone();
        let pickup_point_id = pickup_point.id;
        adds.spawn(async move {
            ProductRepository::new(&db)
                .add(pickup_point_id, ProductType::Clothes)
                .await
        });
    }
    let closed = ReceptionRepository::new(db).close_last(pickup_point.id).await?;
    assert_eq!(closed.status, ReceptionStatus::Closed);

    let mut accepted = 0;
    while let Some(joined) = adds.join_next().await {
        match joined.unwrap() {
            Ok(_) => accepted += 1,
            Err(LifecycleError::NoActiveReception { .. } | LifecycleError::Persistence(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    let stored = entity::prelude::Goods::find()
        .filter(entity::goods::Column::ReceivingId.eq(reception.id))
        .count(db)
        .await?;
    assert_eq!(stored, accepted);

    let after_close = ProductRepository::new(db)
        .add(pickup_point.id, ProductType::Shoes)
        .await;
    assert!(matches!(
        after_close,
        Err(LifecycleError::NoActiveReception { .. })
    ));

    test.teardown().await.unwrap();

    Ok(())
}
