//! Activity catalog adapters.

mod error;
mod file;
mod in_memory;

pub use error::CatalogLoadError;
pub use file::FileActivityCatalog;
pub use in_memory::InMemoryActivityCatalog;
