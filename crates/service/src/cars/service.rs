use std::sync::Arc;

use models::Car;
use tracing::{debug, info, instrument};

use crate::cars::repository::CarStore;
use crate::errors::ServiceError;
use crate::ids::{IdGenerator, RandomIdGenerator};

/// Application service for car records.
/// Mints ids on creation and pins the id on update; everything else is
/// delegated to the store unchanged.
pub struct CarService<R: CarStore> {
    repo: Arc<R>,
    ids: Arc<dyn IdGenerator>,
}

impl<R: CarStore> CarService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self::with_id_generator(repo, Arc::new(RandomIdGenerator)) }

    pub fn with_id_generator(repo: Arc<R>, ids: Arc<dyn IdGenerator>) -> Self { Self { repo, ids } }

    /// Store a new car under a freshly generated id.
    /// Any id the caller put in the payload is discarded.
    #[instrument(skip(self, car), fields(make = %car.make, model = %car.model))]
    pub fn create_car(&self, car: Car) -> Result<Car, ServiceError> {
        if car.has_id() {
            debug!(supplied_id = %car.id, "discarding caller supplied id");
        }
        let car = car.with_id(self.ids.next_id());
        self.repo.save(&car.id, car.clone())?;
        info!(id = %car.id, "car_created");
        Ok(car)
    }

    pub fn get_car(&self, id: &str) -> Result<Car, ServiceError> { self.repo.get(id) }

    pub fn get_cars(&self) -> Result<Vec<Car>, ServiceError> { self.repo.get_all() }

    /// Replace the car at `id`.
    /// An empty payload id is filled in with `id`; a different one is rejected.
    #[instrument(skip(self, car))]
    pub fn update_car(&self, id: &str, car: Car) -> Result<Car, ServiceError> {
        if car.has_id() && car.id != id {
            return Err(ServiceError::IdMismatch { path: id.to_string(), payload: car.id });
        }
        let updated = self.repo.update(id, car.with_id(id))?;
        info!(id = %id, "car_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn delete_car(&self, id: &str) -> Result<(), ServiceError> {
        let existed = self.repo.delete(id)?;
        info!(id = %id, existed, "car_deleted");
        Ok(())
    }
}
