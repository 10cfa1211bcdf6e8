//! Facet option extraction.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::product::Product;

/// The distinct option sets offered for each filterable facet.
///
/// Each list contains every value appearing on at least one product, without
/// duplicates, in lexicographic order. Category options are the English
/// variants (category identity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub categories: Vec<String>,
    pub certifications: Vec<String>,
    pub series: Vec<String>,
}

impl FacetOptions {
    pub fn extract(products: &[Product]) -> FacetOptions {
        let mut categories = BTreeSet::new();
        let mut certifications = BTreeSet::new();
        let mut series = BTreeSet::new();

        for product in products {
            categories.insert(product.category_key().to_owned());
            for cert in &product.certifications {
                certifications.insert(cert.clone());
            }
            series.insert(product.series.clone());
        }

        FacetOptions {
            categories: categories.into_iter().collect(),
            certifications: certifications.into_iter().collect(),
            series: series.into_iter().collect(),
        }
    }
}
