use super::*;

/// Tests concurrent closes of the same reception on Postgres.
///
/// Expected: exactly one Ok, the rest Err(NoActiveReception) or
/// Err(Persistence), the reception closed
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn closes_reception_once() -> Result<(), LifecycleError> {
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
        tasks.spawn(async move { ReceptionRepository::new(&db).close_last(pickup_point_id).await });
    }

    let mut closed = 0;
    while let Some(joined) = tasks.join_next().await {
        match joined.unwrap() {
            Ok(model) => {
                assert_eq!(model.id, reception.id);
                closed += 1;
            }
            Err(LifecycleError::NoActiveReception { .. } | LifecycleError::Persistence(_)) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(closed, 1);

    let stored = entity::prelude::Receiving::find_by_id(reception.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, ReceptionStatus::Closed);

    test.teardown().await.unwrap();

    Ok(())
}
