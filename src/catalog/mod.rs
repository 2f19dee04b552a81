//! Equipment catalog: data source and category filtering.

pub mod filter;
pub mod source;

pub use filter::{category_counts, count_for, filter_rentable, CategoryCount, CategoryFilter};
pub use source::{Catalog, CatalogError, CatalogSource};
