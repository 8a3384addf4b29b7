use models::Car;

use crate::errors::ServiceError;

/// Storage contract for car records keyed by id.
///
/// Implementations own the map; callers only ever see clones.
pub trait CarStore: Send + Sync {
    /// Insert or overwrite the record at `id`.
    fn save(&self, id: &str, car: Car) -> Result<(), ServiceError>;

    /// Fetch the record at `id`, or [`ServiceError::NotFound`].
    fn get(&self, id: &str) -> Result<Car, ServiceError>;

    /// All stored records; order is unspecified.
    fn get_all(&self) -> Result<Vec<Car>, ServiceError>;

    /// Replace the record at `id` and return it.
    ///
    /// Fails with `NotFound` when nothing is stored at `id`, and with
    /// `IdMismatch` when `car.id` names a different key. Lookup and write
    /// happen under one exclusive lock.
    fn update(&self, id: &str, car: Car) -> Result<Car, ServiceError>;

    /// Remove the record at `id`; returns whether one existed.
    fn delete(&self, id: &str) -> Result<bool, ServiceError>;
}
