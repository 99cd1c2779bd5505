use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error::DatabaseError};
use uuid::Uuid;

use super::{ItemStore, StoreError};
use crate::db::DbPool;
use crate::models::{ItemFields, ItemRow};
use crate::schema::items;

/// Items table accessed through the shared r2d2 pool.
#[derive(Clone)]
pub struct PgItemStore {
    pool: DbPool,
}

impl PgItemStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ItemStore for PgItemStore {
    fn insert(&self, row: ItemRow) -> Result<ItemRow, StoreError> {
        let mut conn = self.pool.get()?;
        let id = row.id;
        let stored = diesel::insert_into(items::table)
            .values(&row)
            .returning(ItemRow::as_returning())
            .get_result(&mut conn)
            .map_err(|e| match e {
                DatabaseError(DatabaseErrorKind::UniqueViolation, _) => StoreError::Conflict(id),
                other => other.into(),
            })?;
        Ok(stored)
    }

    fn list(&self) -> Result<Vec<ItemRow>, StoreError> {
        let mut conn = self.pool.get()?;
        let rows = items::table
            .order((items::created_at.asc(), items::id.asc()))
            .select(ItemRow::as_select())
            .load(&mut conn)?;
        Ok(rows)
    }

    fn get(&self, id: Uuid) -> Result<Option<ItemRow>, StoreError> {
        let mut conn = self.pool.get()?;
        let row = items::table
            .find(id)
            .select(ItemRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row)
    }

    fn update(&self, id: Uuid, fields: ItemFields) -> Result<Option<ItemRow>, StoreError> {
        let mut conn = self.pool.get()?;
        let row = diesel::update(items::table.find(id))
            .set(&fields)
            .returning(ItemRow::as_returning())
            .get_result(&mut conn)
            .optional()?;
        Ok(row)
    }

    fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut conn = self.pool.get()?;
        let removed = diesel::delete(items::table.find(id)).execute(&mut conn)?;
        Ok(removed > 0)
    }
}
