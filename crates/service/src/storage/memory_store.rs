use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use models::Car;

use crate::cars::repository::CarStore;
use crate::errors::ServiceError;

/// Process-local car store: a `HashMap` behind a single reader/writer lock.
///
/// Nothing is persisted; the map lives as long as the store.
#[derive(Debug, Default)]
pub struct InMemoryCarStore {
    inner: RwLock<HashMap<String, Car>>,
}

impl InMemoryCarStore {
    pub fn new() -> Self { Self::default() }

    /// Number of stored records.
    pub fn len(&self) -> Result<usize, ServiceError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, ServiceError> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Car>>, ServiceError> {
        self.inner.read().map_err(|e| ServiceError::Storage(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, Car>>, ServiceError> {
        self.inner.write().map_err(|e| ServiceError::Storage(e.to_string()))
    }
}

impl CarStore for InMemoryCarStore {
    fn save(&self, id: &str, car: Car) -> Result<(), ServiceError> {
        let mut map = self.write()?;
        map.insert(id.to_string(), car);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Car, ServiceError> {
        let map = self.read()?;
        map.get(id).cloned().ok_or_else(|| ServiceError::not_found("car", id))
    }

    fn get_all(&self) -> Result<Vec<Car>, ServiceError> {
        let map = self.read()?;
        Ok(map.values().cloned().collect())
    }

    fn update(&self, id: &str, car: Car) -> Result<Car, ServiceError> {
        if car.id != id {
            return Err(ServiceError::IdMismatch { path: id.to_string(), payload: car.id });
        }
        // 读取与写入在同一把写锁内完成，避免并发删除/更新穿插
        let mut map = self.write()?;
        let slot = map.get_mut(id).ok_or_else(|| ServiceError::not_found("car", id))?;
        *slot = car;
        Ok(slot.clone())
    }

    fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let mut map = self.write()?;
        Ok(map.remove(id).is_some())
    }
}
