//! Service layer for car records.
//! - `storage` holds the concrete stores behind the `CarStore` contract.
//! - `cars::service` owns id assignment and delegates CRUD to a store.

pub mod errors;
pub mod ids;
pub mod cars;
pub mod storage;

pub use cars::{repository::CarStore, service::CarService};
pub use errors::ServiceError;
pub use storage::InMemoryCarStore;
