use std::sync::Arc;

use service::{CarService, InMemoryCarStore};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<CarService<InMemoryCarStore>>,
}

impl AppState {
    pub fn new(cars: Arc<CarService<InMemoryCarStore>>) -> Self { Self { cars } }

    /// Fresh, empty in-memory store with the default id generator.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(CarService::new(Arc::new(InMemoryCarStore::new()))))
    }
}
