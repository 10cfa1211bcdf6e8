//! The filter/paginate view-model.
//!
//! `CatalogQuery` is the ephemeral per-page-view state (selection + cursor);
//! `CatalogView` is the pure derivation consumed by the presentation layer.
//! Nothing here mutates the catalog.

use serde::Serialize;

use crate::facets::FacetOptions;
use crate::product::Product;
use crate::query::FacetSelection;
use crate::store::Catalog;

/// Fixed page size of the products grid.
pub const PAGE_SIZE: usize = 6;

/// Current selection and 1-based page cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub selection: FacetSelection,
    pub page: u32,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            selection: FacetSelection::default(),
            page: 1,
        }
    }
}

impl CatalogQuery {
    /// Replace the facet selection. Any selection change resets the cursor
    /// to page 1, unconditionally, so a stale cursor can never outlive the
    /// filter state that produced it.
    pub fn with_selection(self, selection: FacetSelection) -> CatalogQuery {
        if selection == self.selection {
            self
        } else {
            CatalogQuery { selection, page: 1 }
        }
    }

    /// Move the cursor. Pages below 1 clamp to 1; pages beyond the filtered
    /// range collapse to 1 at derivation time.
    pub fn with_page(self, page: u32) -> CatalogQuery {
        CatalogQuery {
            page: page.max(1),
            ..self
        }
    }
}

/// 1-based inclusive display range ("Showing 7-12 of 14 results").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowingRange {
    pub start: usize,
    pub end: usize,
}

/// The derived, UI-ready slice of the catalog.
#[derive(Debug)]
pub struct CatalogView<'a> {
    /// Products on the current page, in catalog order.
    pub items: Vec<&'a Product>,
    /// Total products matching the selection.
    pub filtered_count: usize,
    /// Effective page (an out-of-range request collapses to 1).
    pub page: u32,
    /// `ceil(filtered_count / PAGE_SIZE)`; 0 when nothing matches.
    pub page_count: u32,
    /// Display range, `None` in the "no results" state.
    pub showing: Option<ShowingRange>,
    /// Facet options, always derived from the full catalog so the filter UI
    /// never loses options while a selection is active.
    pub facets: FacetOptions,
}

impl<'a> CatalogView<'a> {
    pub fn derive(catalog: &'a Catalog, query: &CatalogQuery) -> CatalogView<'a> {
        let facets = FacetOptions::extract(catalog.products());
        let filtered = query.selection.filter(catalog.products());
        let filtered_count = filtered.len();
        let page_count = filtered_count.div_ceil(PAGE_SIZE) as u32;

        let page = if query.page > page_count { 1 } else { query.page.max(1) };

        let start = (page as usize - 1) * PAGE_SIZE;
        let items: Vec<&Product> = filtered.into_iter().skip(start).take(PAGE_SIZE).collect();

        let showing = if items.is_empty() {
            None
        } else {
            Some(ShowingRange {
                start: start + 1,
                end: start + items.len(),
            })
        };

        CatalogView {
            items,
            filtered_count,
            page,
            page_count,
            showing,
            facets,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
