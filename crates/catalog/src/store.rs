//! The catalog store: an immutable, ordered product list.

use std::collections::HashSet;
use std::sync::OnceLock;

use thiserror::Error;

use crate::product::{Product, ProductId};

/// The bundled catalog data, compiled into the binary.
const BUILTIN_DATA: &str = include_str!("../data/products.json");

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog is empty")]
    Empty,

    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// The complete, static set of product records.
///
/// Read-only process-wide state: populated once from the bundled data file
/// and never mutated. All view-model derivations borrow from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Parse and validate a catalog from its JSON source.
    ///
    /// An empty catalog or a duplicated id is rejected here rather than
    /// producing undefined lookup behavior later.
    pub fn from_json(data: &str) -> Result<Catalog, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(data)?;
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.clone()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Catalog { products })
    }

    /// The bundled catalog, parsed once per process.
    ///
    /// The bundled file is pinned valid by tests, so the parse cannot fail
    /// at runtime.
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            Catalog::from_json(BUILTIN_DATA).expect("bundled catalog data must be valid")
        })
    }

    /// All products, in data-file order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Legacy lookup policy carried over from the original site: an unknown
    /// id resolves to the first catalog entry instead of a miss. New callers
    /// should prefer [`Catalog::get`] and surface not-found explicitly.
    pub fn get_or_first(&self, id: &ProductId) -> &Product {
        self.get(id).unwrap_or(&self.products[0])
    }

    /// Up to `limit` products sharing the English category, excluding the
    /// product itself, in catalog order.
    pub fn related(&self, id: &ProductId, limit: usize) -> Vec<&Product> {
        let Some(current) = self.get(id) else {
            return Vec::new();
        };
        self.products
            .iter()
            .filter(|p| p.category_key() == current.category_key() && &p.id != id)
            .take(limit)
            .collect()
    }
}
