pub mod query;
pub mod store;
pub mod types;
pub mod validation;

pub use query::CatalogQuery;
pub use store::CatalogStore;
pub use types::{Book, BookEntry, BookStatus, CatalogData, SearchField};
