use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use super::{ItemStore, StoreError};
use crate::models::{ItemFields, ItemRow};

/// Process-local store. Used in dev mode without a database and in tests.
/// Rows are kept in insertion order.
#[derive(Default)]
pub struct MemoryItemStore {
    rows: RwLock<Vec<ItemRow>>,
}

impl MemoryItemStore {
    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<ItemRow>>, StoreError> {
        self.rows
            .read()
            .map_err(|_| StoreError::Unavailable("item store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<ItemRow>>, StoreError> {
        self.rows
            .write()
            .map_err(|_| StoreError::Unavailable("item store lock poisoned".to_string()))
    }
}

impl ItemStore for MemoryItemStore {
    fn insert(&self, row: ItemRow) -> Result<ItemRow, StoreError> {
        let mut rows = self.write()?;
        if rows.iter().any(|r| r.id == row.id) {
            return Err(StoreError::Conflict(row.id));
        }
        rows.push(row.clone());
        Ok(row)
    }

    fn list(&self) -> Result<Vec<ItemRow>, StoreError> {
        Ok(self.read()?.clone())
    }

    fn get(&self, id: Uuid) -> Result<Option<ItemRow>, StoreError> {
        Ok(self.read()?.iter().find(|r| r.id == id).cloned())
    }

    fn update(&self, id: Uuid, fields: ItemFields) -> Result<Option<ItemRow>, StoreError> {
        let mut rows = self.write()?;
        Ok(rows.iter_mut().find(|r| r.id == id).map(|row| {
            row.name = fields.name;
            row.description = fields.description;
            row.clone()
        }))
    }

    fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut rows = self.write()?;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, description: &str) -> ItemFields {
        ItemFields {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn insert_then_get() {
        let store = MemoryItemStore::default();
        let row = ItemRow::new(fields("a", "b"));
        store.insert(row.clone()).unwrap();
        assert_eq!(store.get(row.id).unwrap(), Some(row));
        assert_eq!(store.get(Uuid::new_v4()).unwrap(), None);
    }

    #[test]
    fn list_keeps_insertion_order() {
        let store = MemoryItemStore::default();
        assert!(store.list().unwrap().is_empty());
        let first = store.insert(ItemRow::new(fields("1", "x"))).unwrap();
        let second = store.insert(ItemRow::new(fields("2", "y"))).unwrap();
        let ids: Vec<_> = store.list().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn update_keeps_id_and_created_at() {
        let store = MemoryItemStore::default();
        let row = store.insert(ItemRow::new(fields("old", "old"))).unwrap();
        let updated = store.update(row.id, fields("new", "newer")).unwrap().unwrap();
        assert_eq!(updated.id, row.id);
        assert_eq!(updated.created_at, row.created_at);
        assert_eq!(updated.name, "new");
        assert_eq!(updated.description, "newer");
        assert_eq!(store.update(Uuid::new_v4(), fields("n", "d")).unwrap(), None);
    }

    #[test]
    fn delete_reports_whether_removed() {
        let store = MemoryItemStore::default();
        let row = store.insert(ItemRow::new(fields("a", "b"))).unwrap();
        assert!(store.delete(row.id).unwrap());
        assert!(!store.delete(row.id).unwrap());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn rejects_duplicate_id() {
        let store = MemoryItemStore::default();
        let row = store.insert(ItemRow::new(fields("a", "b"))).unwrap();
        let id = row.id;
        let err = store.insert(row).unwrap_err();
        assert!(matches!(err, StoreError::Conflict(dup) if dup == id));
        assert_eq!(err.to_string(), format!("item {id} already exists"));
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
