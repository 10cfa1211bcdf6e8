//! Product record as stored in the bundled data file.

use serde::{Deserialize, Serialize};

use sudood_core::{Localized, TextOrLocalized};

/// Product identifier (a stable slug from the data file, e.g. `bv-100`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Headline specifications shown on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specifications {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_range: Option<Localized>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<Localized>,
}

/// Parallel per-language bullet lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedList {
    pub ar: Vec<String>,
    pub en: Vec<String>,
}

/// A labelled performance figure; the value may be plain (dimensions, units)
/// or bilingual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSpec {
    pub label: Localized,
    pub value: TextOrLocalized,
}

/// One row of the parts/materials table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRow {
    pub no: u32,
    pub part: Localized,
    pub material: Localized,
    pub qty: u32,
}

/// A purchasable size variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValveModel {
    pub code: String,
    pub size: String,
    pub diameter: u32,
}

/// A catalog product.
///
/// The filtering logic only looks at `category` (English variant), `series`
/// and `certifications`; everything under `specifications` and below is
/// opaque detail-page payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: Localized,
    pub description: Localized,
    pub image: Vec<String>,
    pub category: Localized,
    pub series: String,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<Specifications>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_specs: Option<LocalizedList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_specs: Option<Vec<PerformanceSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<ComponentRow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sectional_drawing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<ValveModel>>,
}

impl Product {
    /// Category identity: always the English variant, regardless of the
    /// language the catalog is being browsed in.
    pub fn category_key(&self) -> &str {
        &self.category.en
    }

    /// First image is the canonical/primary one.
    pub fn primary_image(&self) -> Option<&str> {
        self.image.first().map(String::as_str)
    }

    pub fn has_certification(&self, label: &str) -> bool {
        self.certifications.iter().any(|c| c == label)
    }
}
