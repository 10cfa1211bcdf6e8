//! The filter predicate over facet selections.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// The user's current multi-select state for each facet.
///
/// Semantics are conjunctive across facets and disjunctive within one: a
/// product matches when every non-empty facet set admits it, and a facet set
/// admits it when it shares at least one value. An empty set is the identity
/// (no constraint on that facet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection {
    pub categories: BTreeSet<String>,
    pub certifications: BTreeSet<String>,
    pub series: BTreeSet<String>,
}

impl FacetSelection {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.certifications.is_empty() && self.series.is_empty()
    }

    /// One-click reset.
    pub fn clear(&mut self) {
        self.categories.clear();
        self.certifications.clear();
        self.series.clear();
    }

    pub fn toggle_category(&mut self, value: &str) {
        toggle(&mut self.categories, value);
    }

    pub fn toggle_certification(&mut self, value: &str) {
        toggle(&mut self.certifications, value);
    }

    pub fn toggle_series(&mut self, value: &str) {
        toggle(&mut self.series, value);
    }

    /// Whether `product` passes all three facet checks.
    pub fn matches(&self, product: &Product) -> bool {
        let category_match = self.categories.is_empty()
            || self.categories.contains(product.category_key());

        let certification_match = self.certifications.is_empty()
            || product
                .certifications
                .iter()
                .any(|cert| self.certifications.contains(cert));

        let series_match = self.series.is_empty() || self.series.contains(&product.series);

        category_match && certification_match && series_match
    }

    /// Matching products in their original catalog order.
    pub fn filter<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_owned());
    }
}
