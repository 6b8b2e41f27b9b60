use chrono::Utc;
use entity::sea_orm_active_enums::ReceptionStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select, SqlErr,
};
use uuid::Uuid;

use crate::server::{
    data::unit_of_work::{is_serialization_failure, UnitOfWork},
    error::lifecycle::LifecycleError,
};

/// Reception lifecycle engine.
///
/// The `*_within` methods and the locking reads run on whatever connection the
/// repository was built with. [`ReceptionRepository::open`] and
/// [`ReceptionRepository::close_last`] are the transactional entry points and
/// are only available on the pool.
pub struct ReceptionRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReceptionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Reads the pickup point row with `FOR UPDATE`.
    ///
    /// Holding this lock serializes every Open for the pickup point, including
    /// the case where no reception row exists yet to lock.
    pub async fn lock_pickup_point(
        &self,
        pickup_point_id: Uuid,
    ) -> Result<Option<entity::pickup_point::Model>, DbErr> {
        entity::prelude::PickupPoint::find_by_id(pickup_point_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    fn in_progress(pickup_point_id: Uuid) -> Select<entity::prelude::Receiving> {
        entity::prelude::Receiving::find()
            .filter(entity::receiving::Column::PickupPointId.eq(pickup_point_id))
            .filter(entity::receiving::Column::Status.eq(ReceptionStatus::InProgress))
            .order_by_desc(entity::receiving::Column::ReceivingDatetime)
            .order_by_desc(entity::receiving::Column::Seq)
    }

    /// Reads the in-progress reception of a pickup point with `FOR UPDATE`.
    ///
    /// Ordered newest first with `seq` breaking timestamp ties, so a corrupted
    /// state with several open receptions still resolves to the latest one.
    pub async fn find_in_progress_for_update(
        &self,
        pickup_point_id: Uuid,
    ) -> Result<Option<entity::receiving::Model>, DbErr> {
        Self::in_progress(pickup_point_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Reads the in-progress reception of a pickup point without locking it.
    pub async fn find_in_progress(
        &self,
        pickup_point_id: Uuid,
    ) -> Result<Option<entity::receiving::Model>, DbErr> {
        Self::in_progress(pickup_point_id).one(self.db).await
    }

    /// Opens a reception on the current connection.
    ///
    /// # Returns
    /// - `Ok(Model)` - New reception in `in_progress` state
    /// - `Err(LifecycleError::PickupPointNotFound)` - No such pickup point
    /// - `Err(LifecycleError::Conflict)` - A reception is already in progress
    /// - `Err(LifecycleError::Persistence)` - Any other database failure
    pub async fn open_within(
        &self,
        pickup_point_id: Uuid,
    ) -> Result<entity::receiving::Model, LifecycleError> {
        if self.lock_pickup_point(pickup_point_id).await?.is_none() {
            return Err(LifecycleError::PickupPointNotFound(pickup_point_id));
        }

        if let Some(open) = self.find_in_progress_for_update(pickup_point_id).await? {
            tracing::debug!(
                "Reception {} still in progress at pickup point {}",
                open.id,
                pickup_point_id
            );
            return Err(LifecycleError::Conflict { pickup_point_id });
        }

        entity::receiving::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            receiving_datetime: ActiveValue::Set(Utc::now()),
            pickup_point_id: ActiveValue::Set(pickup_point_id),
            status: ActiveValue::Set(ReceptionStatus::InProgress),
            seq: ActiveValue::NotSet,
        }
        .insert(self.db)
        .await
        .map_err(|err| match err.sql_err() {
            // Lost a race the locks did not catch; the unique indexes did.
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                LifecycleError::Conflict { pickup_point_id }
            }
            _ => LifecycleError::Persistence(err),
        })
    }

    /// Closes the in-progress reception on the current connection.
    ///
    /// # Returns
    /// - `Ok(Model)` - The reception, now `closed`
    /// - `Err(LifecycleError::NoActiveReception)` - Nothing is in progress
    /// - `Err(LifecycleError::Persistence)` - Database failure
    pub async fn close_last_within(
        &self,
        pickup_point_id: Uuid,
    ) -> Result<entity::receiving::Model, LifecycleError> {
        let Some(reception) = self.find_in_progress_for_update(pickup_point_id).await? else {
            return Err(LifecycleError::NoActiveReception { pickup_point_id });
        };

        let mut active: entity::receiving::ActiveModel = reception.into();
        active.status = ActiveValue::Set(ReceptionStatus::Closed);

        Ok(active.update(self.db).await?)
    }
}

impl<'a> ReceptionRepository<'a> {
    /// Opens a new reception for the pickup point in its own transaction.
    ///
    /// A serialization abort is reported as `Conflict` only when another
    /// reception is in progress once this transaction has rolled back.
    pub async fn open(
        &self,
        pickup_point_id: Uuid,
    ) -> Result<entity::receiving::Model, LifecycleError> {
        let uow = UnitOfWork::begin(self.db).await?;
        let result = ReceptionRepository::new(uow.transaction())
            .open_within(pickup_point_id)
            .await;

        match uow.finish(result).await {
            Err(LifecycleError::Persistence(err)) if is_serialization_failure(&err) => {
                Err(self.resolve_open_abort(pickup_point_id, err).await)
            }
            other => other,
        }
    }

    /// Losing to a concurrent Open leaves its reception in progress. Losing to a
    /// concurrent CloseLast leaves none, and the abort stays `Persistence`.
    async fn resolve_open_abort(&self, pickup_point_id: Uuid, err: DbErr) -> LifecycleError {
        match self.find_in_progress(pickup_point_id).await {
            Ok(Some(open)) => {
                tracing::debug!(
                    "Open at pickup point {} lost to reception {}",
                    pickup_point_id,
                    open.id
                );
                LifecycleError::Conflict { pickup_point_id }
            }
            Ok(None) => LifecycleError::Persistence(err),
            Err(read_err) => {
                tracing::warn!(
                    "Failed to inspect pickup point {} after aborted open: {}",
                    pickup_point_id,
                    read_err
                );
                LifecycleError::Persistence(err)
            }
        }
    }

    /// Closes the pickup point's in-progress reception in its own transaction.
    pub async fn close_last(
        &self,
        pickup_point_id: Uuid,
    ) -> Result<entity::receiving::Model, LifecycleError> {
        let uow = UnitOfWork::begin(self.db).await?;
        let result = ReceptionRepository::new(uow.transaction())
            .close_last_within(pickup_point_id)
            .await;

        uow.finish(result).await
    }
}
