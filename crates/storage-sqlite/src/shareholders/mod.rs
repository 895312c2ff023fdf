//! SQLite storage implementation for shareholders.

mod model;
mod repository;

pub use model::{ShareholderChangesDB, ShareholderDB};
pub use repository::ShareholderRepository;
