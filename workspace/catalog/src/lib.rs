//! Shared storefront catalog types and the logic behind the category landing page.
//! Everything here is plain Rust so the backend, the frontend and the tests can
//! use the same count, list and search code.

mod categories;
mod error;
mod routes;
mod search;
mod store;

pub use categories::{CATEGORY_TABLE, CategoryDescriptor, CategorySpec, build_category_list, find_category, format_item_count};
pub use error::CatalogError;
pub use routes::{CATEGORY_INDEX_PATH, SEARCH_PATH, category_path, search_path};
pub use search::{Navigate, SearchQuery};
pub use store::{CategoryEntry, Product, ProductCatalog, SearchHit};
