use std::sync::Arc;

use item_types::{Item, ItemPayload};
use uuid::Uuid;

use crate::models::ItemRow;
use crate::store::{ItemStore, StoreError};
use crate::validation::{validate_item, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Validates writes before they reach the store. Ids that are not UUIDs
/// cannot name an item and are answered as not found without a store call.
#[derive(Clone)]
pub struct ItemGateway {
    store: Arc<dyn ItemStore>,
}

impl ItemGateway {
    pub fn new(store: impl ItemStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub async fn create(&self, payload: ItemPayload) -> Result<Item, GatewayError> {
        let fields = validate_item(&payload)?;
        let row = ItemRow::new(fields);
        let stored = self.run(move |store| store.insert(row)).await?;
        Ok(stored.into())
    }

    pub async fn find_all(&self) -> Result<Vec<Item>, GatewayError> {
        let rows = self.run(|store| store.list()).await?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Item>, GatewayError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let row = self.run(move |store| store.get(id)).await?;
        Ok(row.map(Item::from))
    }

    /// Validation runs before the id lookup, so an invalid body on an unknown
    /// id is still a validation error.
    pub async fn update_by_id(
        &self,
        id: &str,
        payload: ItemPayload,
    ) -> Result<Option<Item>, GatewayError> {
        let fields = validate_item(&payload)?;
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let row = self.run(move |store| store.update(id, fields)).await?;
        Ok(row.map(Item::from))
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<bool, GatewayError> {
        let Some(id) = parse_id(id) else {
            return Ok(false);
        };
        Ok(self.run(move |store| store.delete(id)).await?)
    }

    async fn run<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        F: FnOnce(&dyn ItemStore) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || op(store.as_ref()))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}
