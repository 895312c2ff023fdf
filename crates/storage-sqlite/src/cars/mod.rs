//! SQLite storage implementation for cars.

mod model;
mod repository;

pub use model::{CarChangesDB, CarDB};
pub use repository::CarRepository;
