//! Catalog domain module.
//!
//! This crate contains the product catalog and the filter/paginate
//! view-model, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage). The only data source is the bundled product file,
//! parsed once per process.

pub mod facets;
pub mod product;
pub mod query;
pub mod store;
pub mod view;

pub use facets::FacetOptions;
pub use product::{
    ComponentRow, LocalizedList, PerformanceSpec, Product, ProductId, Specifications, ValveModel,
};
pub use query::FacetSelection;
pub use store::{Catalog, CatalogError};
pub use view::{CatalogQuery, CatalogView, PAGE_SIZE};
