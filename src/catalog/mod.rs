pub mod basics;
pub mod card;
pub mod query;
pub mod source;

pub use basics::{basic_names, BasicCache};
pub use card::{Card, CardId, Category, Color, Prices};
pub use query::{derive_theme_fragments, pool_query};
pub use source::{fetch_pool, normalize_pool, CatalogError, CatalogPage, CatalogSource, NamedLookup};
