//! `PostgreSQL` repository implementation for discovery records.
//!
//! Metadata and category lists are stored as JSONB documents. Updates are
//! conditional on the stored revision so concurrent writers cannot silently
//! overwrite each other.

use super::{
    models::{DiscoveryRecordRow, NewDiscoveryRecordRow},
    schema::discovery_records,
};
use crate::discovery::{
    domain::{
        DiscoveryCategories, DiscoveryId, DiscoveryMetadata, DiscoveryRecord,
        PersistedDiscoveryData, Revision,
    },
    ports::{DiscoveryRepository, DiscoveryRepositoryError, DiscoveryRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by discovery adapters.
pub type DiscoveryPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed discovery repository.
#[derive(Debug, Clone)]
pub struct PostgresDiscoveryRepository {
    pool: DiscoveryPgPool,
}

impl PostgresDiscoveryRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DiscoveryPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> DiscoveryRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DiscoveryRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(DiscoveryRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(DiscoveryRepositoryError::persistence)?
    }
}

#[async_trait]
impl DiscoveryRepository for PostgresDiscoveryRepository {
    async fn store(&self, record: &DiscoveryRecord) -> DiscoveryRepositoryResult<()> {
        let record_id = record.id();
        let new_row = to_new_row(record)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(discovery_records::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        DiscoveryRepositoryError::DuplicateRecord(record_id)
                    }
                    _ => DiscoveryRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(
        &self,
        record: &DiscoveryRecord,
        expected: Revision,
    ) -> DiscoveryRepositoryResult<()> {
        let record_id = record.id();
        let row = to_new_row(record)?;
        let expected_val = revision_to_column(expected)?;

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(
                discovery_records::table.filter(
                    discovery_records::id
                        .eq(&row.id)
                        .and(discovery_records::revision.eq(expected_val)),
                ),
            )
            .set((
                discovery_records::categories.eq(&row.categories),
                discovery_records::revision.eq(row.revision),
                discovery_records::updated_at.eq(row.updated_at),
            ))
            .execute(connection)
            .map_err(DiscoveryRepositoryError::persistence)?;

            if updated_count == 0 {
                let still_present = id_exists(connection, &row.id)?;
                return Err(if still_present {
                    DiscoveryRepositoryError::ConcurrentModification {
                        id: record_id,
                        expected,
                    }
                } else {
                    DiscoveryRepositoryError::NotFound(record_id)
                });
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(
        &self,
        id: DiscoveryId,
    ) -> DiscoveryRepositoryResult<Option<DiscoveryRecord>> {
        let id_val = id.to_hex();
        self.run_blocking(move |connection| {
            let row = discovery_records::table
                .filter(discovery_records::id.eq(&id_val))
                .select(DiscoveryRecordRow::as_select())
                .first::<DiscoveryRecordRow>(connection)
                .optional()
                .map_err(DiscoveryRepositoryError::persistence)?;
            row.map(row_to_record).transpose()
        })
        .await
    }

    async fn exists(&self, id: DiscoveryId) -> DiscoveryRepositoryResult<bool> {
        let id_val = id.to_hex();
        self.run_blocking(move |connection| id_exists(connection, &id_val)).await
    }

    async fn count(&self) -> DiscoveryRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let total = discovery_records::table
                .count()
                .get_result::<i64>(connection)
                .map_err(DiscoveryRepositoryError::persistence)?;
            u64::try_from(total).map_err(DiscoveryRepositoryError::invalid_persisted_data)
        })
        .await
    }

    async fn list_all(&self) -> DiscoveryRepositoryResult<Vec<DiscoveryRecord>> {
        self.run_blocking(move |connection| {
            let rows = discovery_records::table
                .order((discovery_records::created_at.asc(), discovery_records::id.asc()))
                .select(DiscoveryRecordRow::as_select())
                .load::<DiscoveryRecordRow>(connection)
                .map_err(DiscoveryRepositoryError::persistence)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }

    async fn delete_all(&self) -> DiscoveryRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(discovery_records::table)
                .execute(connection)
                .map_err(DiscoveryRepositoryError::persistence)?;
            u64::try_from(removed).map_err(DiscoveryRepositoryError::persistence)
        })
        .await
    }
}

fn id_exists(connection: &mut PgConnection, id: &str) -> DiscoveryRepositoryResult<bool> {
    diesel::select(diesel::dsl::exists(
        discovery_records::table.filter(discovery_records::id.eq(id)),
    ))
    .get_result::<bool>(connection)
    .map_err(DiscoveryRepositoryError::persistence)
}

fn revision_to_column(revision: Revision) -> DiscoveryRepositoryResult<i64> {
    i64::try_from(revision.value()).map_err(DiscoveryRepositoryError::persistence)
}

/// Converts a domain record into its insert row.
pub(super) fn to_new_row(
    record: &DiscoveryRecord,
) -> DiscoveryRepositoryResult<NewDiscoveryRecordRow> {
    let metadata =
        serde_json::to_value(record.metadata()).map_err(DiscoveryRepositoryError::persistence)?;
    let categories =
        serde_json::to_value(record.categories()).map_err(DiscoveryRepositoryError::persistence)?;

    Ok(NewDiscoveryRecordRow {
        id: record.id().to_hex(),
        metadata,
        categories,
        revision: revision_to_column(record.revision())?,
        created_at: record.created_at(),
        updated_at: record.updated_at(),
    })
}

/// Reconstructs a domain record from a query row.
pub(super) fn row_to_record(
    row: DiscoveryRecordRow,
) -> DiscoveryRepositoryResult<DiscoveryRecord> {
    let DiscoveryRecordRow {
        id,
        metadata,
        categories,
        revision,
        created_at,
        updated_at,
    } = row;

    let parsed_id =
        DiscoveryId::parse(&id).map_err(DiscoveryRepositoryError::invalid_persisted_data)?;
    let parsed_metadata: DiscoveryMetadata = serde_json::from_value(metadata)
        .map_err(DiscoveryRepositoryError::invalid_persisted_data)?;
    let parsed_categories: DiscoveryCategories = serde_json::from_value(categories)
        .map_err(DiscoveryRepositoryError::invalid_persisted_data)?;
    let parsed_revision =
        u64::try_from(revision).map_err(DiscoveryRepositoryError::invalid_persisted_data)?;

    Ok(DiscoveryRecord::from_persisted(PersistedDiscoveryData {
        id: parsed_id,
        metadata: parsed_metadata,
        categories: parsed_categories,
        revision: Revision::new(parsed_revision),
        created_at,
        updated_at,
    }))
}
