mod memory;
mod postgres;

pub use memory::MemoryItemStore;
pub use postgres::PgItemStore;

use uuid::Uuid;

use crate::models::{ItemFields, ItemRow};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database connection unavailable: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("database error: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("storage task failed: {0}")]
    Task(String),

    #[error("item {0} already exists")]
    Conflict(Uuid),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub trait ItemStore: Send + Sync + 'static {
    fn insert(&self, row: ItemRow) -> Result<ItemRow, StoreError>;

    fn list(&self) -> Result<Vec<ItemRow>, StoreError>;

    fn get(&self, id: Uuid) -> Result<Option<ItemRow>, StoreError>;

    /// Replace `name`/`description` of the matching row in one step.
    fn update(&self, id: Uuid, fields: ItemFields) -> Result<Option<ItemRow>, StoreError>;

    /// Returns whether a row was removed.
    fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
