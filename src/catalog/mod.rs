pub mod models;
pub mod store;

pub use models::{Product, ProductBuilder, Tag, TagKind, User};
pub use store::{CatalogStore, MemoryCatalog, StoreError};
