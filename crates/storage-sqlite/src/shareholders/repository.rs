use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{ShareholderChangesDB, ShareholderDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::{not_found, IntoCore};
use crate::schema::shareholders;
use crate::utils::now;
use dealership_core::errors::{Error, Result};
use dealership_core::shareholders::{
    NewShareholder, Shareholder, ShareholderRepositoryTrait, ShareholderUpdate,
};

pub struct ShareholderRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ShareholderRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ShareholderRepository { pool, writer }
    }
}

fn load_active(conn: &mut SqliteConnection, shareholder_id: &str) -> Result<Shareholder> {
    shareholders::table
        .find(shareholder_id)
        .filter(shareholders::deleted_at.is_null())
        .select(ShareholderDB::as_select())
        .first::<ShareholderDB>(conn)
        .optional()
        .into_core()?
        .map(Shareholder::from)
        .ok_or_else(|| not_found("Shareholder", shareholder_id))
}

#[async_trait]
impl ShareholderRepositoryTrait for ShareholderRepository {
    fn get_by_id(&self, shareholder_id: &str) -> Result<Shareholder> {
        let mut conn = get_connection(&self.pool)?;
        load_active(&mut conn, shareholder_id)
    }

    fn list(&self) -> Result<Vec<Shareholder>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = shareholders::table
            .filter(shareholders::deleted_at.is_null())
            .order(shareholders::full_name.asc())
            .select(ShareholderDB::as_select())
            .load::<ShareholderDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Shareholder::from).collect())
    }

    fn list_all(&self) -> Result<Vec<Shareholder>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = shareholders::table
            .order(shareholders::full_name.asc())
            .select(ShareholderDB::as_select())
            .load::<ShareholderDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Shareholder::from).collect())
    }

    async fn create(&self, new_shareholder: NewShareholder) -> Result<Shareholder> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Shareholder> {
                let shareholder_id = new_shareholder
                    .id
                    .clone()
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                let shareholder_db = ShareholderDB::from_new(shareholder_id, new_shareholder);

                let result_db = diesel::insert_into(shareholders::table)
                    .values(&shareholder_db)
                    .returning(ShareholderDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Shareholder::from(result_db))
            })
            .await
    }

    async fn update(&self, shareholder_update: ShareholderUpdate) -> Result<Shareholder> {
        let shareholder_id = shareholder_update
            .id
            .clone()
            .ok_or_else(|| Error::invalid_input("Shareholder id is required for an update"))?;
        let changes = ShareholderChangesDB::from(shareholder_update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Shareholder> {
                let updated = diesel::update(
                    shareholders::table
                        .find(&shareholder_id)
                        .filter(shareholders::deleted_at.is_null()),
                )
                .set(&changes)
                .execute(conn)
                .into_core()?;
                if updated == 0 {
                    return Err(not_found("Shareholder", &shareholder_id));
                }
                load_active(conn, &shareholder_id)
            })
            .await
    }

    async fn soft_delete(&self, shareholder_id: &str) -> Result<usize> {
        let shareholder_id = shareholder_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let timestamp = now();
                diesel::update(
                    shareholders::table
                        .find(&shareholder_id)
                        .filter(shareholders::deleted_at.is_null()),
                )
                .set((
                    shareholders::deleted_at.eq(Some(timestamp)),
                    shareholders::updated_at.eq(timestamp),
                ))
                .execute(conn)
                .into_core()
            })
            .await
    }
}
