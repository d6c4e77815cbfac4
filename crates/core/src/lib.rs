pub mod catalog;
pub mod content;
pub mod error;
pub mod model;
pub mod portfolio;
pub mod progress;
pub mod time;

pub use catalog::{Catalog, CatalogError, curriculum};
pub use error::Error;
pub use time::Clock;
