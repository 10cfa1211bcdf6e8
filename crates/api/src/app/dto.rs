//! Request DTOs and localized JSON mapping helpers.

use serde::Deserialize;
use serde_json::json;

use sudood_catalog::{CatalogView, FacetSelection, Product};
use sudood_core::Language;

// -------------------------
// Request DTOs
// -------------------------

/// Query string for the products listing. Facet values are comma-separated
/// multi-selects; `page` is 1-based.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
    pub certification: Option<String>,
    pub series: Option<String>,
    pub page: Option<u32>,
}

impl ListProductsQuery {
    pub fn selection(&self) -> FacetSelection {
        FacetSelection {
            categories: split_csv(self.category.as_deref()),
            certifications: split_csv(self.certification.as_deref()),
            series: split_csv(self.series.as_deref()),
        }
    }
}

fn split_csv(value: Option<&str>) -> std::collections::BTreeSet<String> {
    value
        .into_iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

// -------------------------
// Response mapping
// -------------------------

/// Card-level product fields, resolved to one language.
pub fn product_summary_json(product: &Product, lang: Language) -> serde_json::Value {
    json!({
        "id": product.id.to_string(),
        "name": product.name.get(lang),
        "description": product.description.get(lang),
        "category": product.category.get(lang),
        "categoryKey": product.category_key(),
        "series": product.series,
        "certifications": product.certifications,
        "image": product.primary_image(),
    })
}

pub fn catalog_view_json(view: &CatalogView<'_>, lang: Language) -> serde_json::Value {
    json!({
        "items": view
            .items
            .iter()
            .map(|p| product_summary_json(p, lang))
            .collect::<Vec<_>>(),
        "filteredCount": view.filtered_count,
        "page": view.page,
        "pageCount": view.page_count,
        "showing": view.showing.map(|r| json!({ "start": r.start, "end": r.end })),
        "facets": {
            "categories": view.facets.categories,
            "certifications": view.facets.certifications,
            "series": view.facets.series,
        },
    })
}

/// Detail-page payload: the summary plus every optional technical section
/// present on the record, resolved to one language.
pub fn product_detail_json(
    product: &Product,
    related: &[&Product],
    lang: Language,
) -> serde_json::Value {
    let mut detail = product_summary_json(product, lang);
    let obj = detail.as_object_mut().expect("summary is an object");

    obj.insert("images".into(), json!(product.image));

    if let Some(specs) = &product.specifications {
        obj.insert(
            "specifications".into(),
            json!({
                "pressure": specs.pressure,
                "temperatureRange": specs.temperature_range.as_ref().map(|t| t.get(lang)),
                "material": specs.material.as_ref().map(|m| m.get(lang)),
            }),
        );
    }

    if let Some(list) = &product.technical_specs {
        let items = match lang {
            Language::En => &list.en,
            Language::Ar => &list.ar,
        };
        obj.insert("technicalSpecs".into(), json!(items));
    }

    if let Some(perf) = &product.performance_specs {
        obj.insert(
            "performanceSpecs".into(),
            json!(perf
                .iter()
                .map(|p| json!({ "label": p.label.get(lang), "value": p.value.get(lang) }))
                .collect::<Vec<_>>()),
        );
    }

    if let Some(components) = &product.components {
        obj.insert(
            "components".into(),
            json!(components
                .iter()
                .map(|c| json!({
                    "no": c.no,
                    "part": c.part.get(lang),
                    "material": c.material.get(lang),
                    "qty": c.qty,
                }))
                .collect::<Vec<_>>()),
        );
    }

    if let Some(drawing) = &product.sectional_drawing {
        obj.insert("sectionalDrawing".into(), json!(drawing));
    }

    if let Some(models) = &product.models {
        obj.insert(
            "models".into(),
            json!(models
                .iter()
                .map(|m| json!({ "code": m.code, "size": m.size, "diameter": m.diameter }))
                .collect::<Vec<_>>()),
        );
    }

    obj.insert(
        "related".into(),
        json!(related
            .iter()
            .map(|p| product_summary_json(p, lang))
            .collect::<Vec<_>>()),
    );

    detail
}
