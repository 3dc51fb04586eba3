pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{CatalogError, CatalogProvider};
pub use providers::OpenAiProvider;
pub use types::{Catalog, ModelRecord, format_unix_timestamp};
