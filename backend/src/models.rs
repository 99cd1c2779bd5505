use chrono::{DateTime, SubsecRound, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::items;

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Insertable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ItemRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Validated writable fields. Used as the changeset for updates.
#[derive(Debug, Clone, PartialEq, Eq, AsChangeset)]
#[diesel(table_name = items)]
pub struct ItemFields {
    pub name: String,
    pub description: String,
}

impl ItemRow {
    /// A fresh row with a new id, stamped with the current time at the
    /// microsecond precision `timestamptz` stores.
    pub fn new(fields: ItemFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            description: fields.description,
            created_at: Utc::now().trunc_subsecs(6),
        }
    }
}

impl From<ItemRow> for item_types::Item {
    fn from(row: ItemRow) -> Self {
        item_types::Item {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
        }
    }
}
