use super::*;
use entity::sea_orm_active_enums::ReceptionStatus;

/// Tests listing pickup points with nested receptions and products.
///
/// Expected: receptions and products in chronological order
#[tokio::test]
async fn nests_receptions_and_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let pickup_point = factory::create_pickup_point(db).await?;
    let older = factory::reception::ReceptionFactory::new(db, pickup_point.id)
        .status(ReceptionStatus::Closed)
        .receiving_datetime(now - Duration::days(1))
        .build()
        .await?;
    let newer = factory::reception::ReceptionFactory::new(db, pickup_point.id)
        .receiving_datetime(now)
        .build()
        .await?;
    let first = factory::product::ProductFactory::new(db, older.id)
        .accepted_datetime(now - Duration::hours(23))
        .build()
        .await?;
    let second = factory::product::ProductFactory::new(db, older.id)
        .accepted_datetime(now - Duration::hours(22))
        .build()
        .await?;

    let repo = PickupPointRepository::new(db);
    let page = repo.get_paginated_with_receptions(&filter(1, 10)).await?;

    assert_eq!(page.len(), 1);
    let entry = &page[0];
    assert_eq!(entry.pickup_point.id, pickup_point.id);

    let reception_ids: Vec<_> = entry.receptions.iter().map(|r| r.reception.id).collect();
    assert_eq!(reception_ids, vec![older.id, newer.id]);

    let product_ids: Vec<_> = entry.receptions[0]
        .products
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(product_ids, vec![first.id, second.id]);
    assert!(entry.receptions[1].products.is_empty());

    Ok(())
}

/// Tests that pickup points without receptions are left out.
///
/// Expected: only the pickup point with a reception is listed
#[tokio::test]
async fn omits_pickup_points_without_receptions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let _empty = factory::create_pickup_point(db).await?;
    let (busy, _reception) = factory::helpers::create_open_reception(db).await?;

    let repo = PickupPointRepository::new(db);
    let page = repo.get_paginated_with_receptions(&filter(1, 10)).await?;

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].pickup_point.id, busy.id);

    Ok(())
}

/// Tests restricting the listing to a date range.
///
/// Expected: only receptions inside the range, pickup points outside it omitted
#[tokio::test]
async fn filters_receptions_by_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();

    let recent_point = factory::create_pickup_point(db).await?;
    let stale = factory::reception::ReceptionFactory::new(db, recent_point.id)
        .status(ReceptionStatus::Closed)
        .receiving_datetime(now - Duration::days(10))
        .build()
        .await?;
    let fresh = factory::reception::ReceptionFactory::new(db, recent_point.id)
        .receiving_datetime(now - Duration::hours(1))
        .build()
        .await?;

    let old_point = factory::create_pickup_point(db).await?;
    factory::reception::ReceptionFactory::new(db, old_point.id)
        .status(ReceptionStatus::Closed)
        .receiving_datetime(now - Duration::days(20))
        .build()
        .await?;

    let repo = PickupPointRepository::new(db);
    let page = repo
        .get_paginated_with_receptions(&PickupPointFilter {
            start_date: Some(now - Duration::days(2)),
            end_date: Some(now),
            page: 1,
            limit: 10,
        })
        .await?;

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].pickup_point.id, recent_point.id);

    let reception_ids: Vec<_> = page[0].receptions.iter().map(|r| r.reception.id).collect();
    assert_eq!(reception_ids, vec![fresh.id]);
    assert!(!reception_ids.contains(&stale.id));

    Ok(())
}

/// Tests paging in registration order.
///
/// Expected: pages of two, three, then none
#[tokio::test]
async fn pages_in_registration_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let mut ids = Vec::new();
    for i in 0..5 {
        let pickup_point = factory::pickup_point::PickupPointFactory::new(db)
            .registration_date(now - Duration::days(10 - i))
            .build()
            .await?;
        factory::create_reception(db, pickup_point.id).await?;
        ids.push(pickup_point.id);
    }

    let repo = PickupPointRepository::new(db);

    let first = repo.get_paginated_with_receptions(&filter(1, 2)).await?;
    let third = repo.get_paginated_with_receptions(&filter(3, 2)).await?;
    let beyond = repo.get_paginated_with_receptions(&filter(4, 2)).await?;

    let first_ids: Vec<_> = first.iter().map(|e| e.pickup_point.id).collect();
    assert_eq!(first_ids, ids[0..2].to_vec());

    let third_ids: Vec<_> = third.iter().map(|e| e.pickup_point.id).collect();
    assert_eq!(third_ids, vec![ids[4]]);

    assert!(beyond.is_empty());

    Ok(())
}

/// Tests paging with a date range ignores pickup points outside it.
///
/// Expected: the first page is filled with in-range pickup points only
#[tokio::test]
async fn pages_only_pickup_points_in_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pvz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();

    // Registered first but only has old receptions
    let old_point = factory::pickup_point::PickupPointFactory::new(db)
        .registration_date(now - Duration::days(30))
        .build()
        .await?;
    factory::reception::ReceptionFactory::new(db, old_point.id)
        .status(ReceptionStatus::Closed)
        .receiving_datetime(now - Duration::days(25))
        .build()
        .await?;

    let recent_point = factory::pickup_point::PickupPointFactory::new(db)
        .registration_date(now - Duration::days(5))
        .build()
        .await?;
    factory::reception::ReceptionFactory::new(db, recent_point.id)
        .receiving_datetime(now - Duration::hours(2))
        .build()
        .await?;

    let repo = PickupPointRepository::new(db);
    let page = repo
        .get_paginated_with_receptions(&PickupPointFilter {
            start_date: Some(now - Duration::days(1)),
            end_date: None,
            page: 1,
            limit: 1,
        })
        .await?;

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].pickup_point.id, recent_point.id);

    Ok(())
}
