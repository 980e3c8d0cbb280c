//! The shared product catalog: category slug to product list.
//!
//! The catalog is read-only once loaded. Lookups never fail: a slug that is
//! missing, or an entry that carries no `products` list, reads as an empty list.
//! Loading is lenient per entry: a malformed entry reads as empty and a product
//! record that cannot be read is skipped, both with a warning.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, trace, warn};
use utoipa::ToSchema;

use crate::categories::CATEGORY_TABLE;
use crate::error::Result;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// A single product record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Product {
    #[serde(default, deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Accepts `"id": "dome"` as well as `"id": 7`.
fn id_from_string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

impl Product {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

/// Catalog entry for one category.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CategoryEntry {
    pub products: Option<Vec<Product>>,
}

impl CategoryEntry {
    /// Read one slug's entry from raw JSON, never failing.
    ///
    /// Anything other than an object, or a `products` value that is not an
    /// array, reads as an entry without products.
    fn from_value(slug: &str, value: Value) -> Self {
        let products = match value {
            Value::Object(mut fields) => fields.remove("products"),
            Value::Null => None,
            other => {
                warn!("Catalog entry '{}' is not an object ({}), treating as empty", slug, other);
                None
            }
        };

        let products = match products {
            None | Some(Value::Null) => None,
            Some(Value::Array(records)) => Some(
                records
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, record)| match serde_json::from_value::<Product>(record) {
                        Ok(product) => Some(product),
                        Err(e) => {
                            warn!("Skipping product #{} in '{}': {}", index, slug, e);
                            None
                        }
                    })
                    .collect(),
            ),
            Some(other) => {
                warn!("Products of '{}' are not a list ({}), treating as empty", slug, other);
                None
            }
        };

        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        self.products.as_deref().unwrap_or(&[])
    }
}

/// A product matched by [`ProductCatalog::search`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct SearchHit {
    pub category_slug: String,
    pub category_name: String,
    pub product: Product,
}

/// Mapping from category slug to its products.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ProductCatalog {
    categories: BTreeMap<String, CategoryEntry>,
}

impl ProductCatalog {
    /// Parse a catalog from its JSON form: an object keyed by slug.
    ///
    /// Only a document that is not a JSON object is an error; each entry is
    /// read on its own by [`CategoryEntry::from_value`].
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Value> = serde_json::from_str(json)?;
        let categories = raw
            .into_iter()
            .map(|(slug, value)| {
                let entry = CategoryEntry::from_value(&slug, value);
                (slug, entry)
            })
            .collect();
        let catalog = Self { categories };
        debug!("Parsed catalog with {} categories", catalog.categories.len());
        Ok(catalog)
    }

    /// Read and parse a catalog JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading catalog from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Register `products` under `slug`, replacing any previous entry.
    pub fn insert(&mut self, slug: impl Into<String>, products: Vec<Product>) {
        self.categories.insert(slug.into(), CategoryEntry { products: Some(products) });
    }

    pub fn entry(&self, slug: &str) -> Option<&CategoryEntry> {
        self.categories.get(slug)
    }

    /// Products registered under `slug`; empty when the slug is absent.
    pub fn products(&self, slug: &str) -> &[Product] {
        self.entry(slug).map(CategoryEntry::products).unwrap_or(&[])
    }

    /// Number of products under `slug`, 0 when absent or without a products list.
    pub fn product_count(&self, slug: &str) -> usize {
        let count = self.products(slug).len();
        trace!("Product count for '{}': {}", slug, count);
        count
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Case-insensitive substring search over product names and descriptions.
    ///
    /// Hits follow the category table order, then any slug outside the table in
    /// lexical order, then product order within a category. Blank text matches nothing.
    pub fn search(&self, text: &str) -> Vec<SearchHit> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let needle = needle.as_str();
        let table = CATEGORY_TABLE.iter().map(|spec| (spec.slug, spec.name));
        let unlisted = self
            .slugs()
            .filter(|slug| CATEGORY_TABLE.iter().all(|spec| spec.slug != *slug))
            .map(|slug| (slug, slug));

        let hits: Vec<SearchHit> = table
            .chain(unlisted)
            .flat_map(move |(slug, name)| {
                self.products(slug)
                    .iter()
                    .filter(move |product| product.matches(needle))
                    .map(move |product| SearchHit {
                        category_slug: slug.to_string(),
                        category_name: name.to_string(),
                        product: product.clone(),
                    })
            })
            .collect();

        debug!("Search for '{}' returned {} hits", needle, hits.len());
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    fn product(id: &str, name: &str, description: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            image: None,
            features: Vec::new(),
        }
    }

    #[test]
    fn test_product_count_matches_list_length() {
        let mut catalog = ProductCatalog::default();
        catalog.insert(
            "cctv",
            vec![
                product("a", "Dome", "camera"),
                product("b", "Bullet", "camera"),
                product("c", "NVR", "recorder"),
            ],
        );

        assert_eq!(catalog.product_count("cctv"), 3);
    }

    #[test]
    fn test_product_count_absent_slug_is_zero() {
        let catalog = ProductCatalog::default();
        assert_eq!(catalog.product_count("cctv"), 0);
        assert!(catalog.products("cctv").is_empty());
    }

    #[test]
    fn test_entry_without_products_counts_zero() {
        let catalog = ProductCatalog::from_json(r#"{"satellite": {}, "fiber-solution": {"products": null}}"#)
            .expect("Should parse catalog");

        assert!(catalog.entry("satellite").is_some());
        assert_eq!(catalog.product_count("satellite"), 0);
        assert_eq!(catalog.product_count("fiber-solution"), 0);
    }

    #[test]
    fn test_from_json_rejects_non_object_document() {
        assert!(matches!(ProductCatalog::from_json("not json"), Err(CatalogError::Parse(_))));
        assert!(matches!(ProductCatalog::from_json("[1, 2]"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_malformed_entry_does_not_affect_others() {
        let catalog = ProductCatalog::from_json(
            r#"{
                "cctv": {"products": [{"id": "a", "name": "Dome", "description": "cam"}]},
                "satellite": {"products": "not-a-list"},
                "softwares": 42
            }"#,
        )
        .expect("Should parse catalog");

        assert_eq!(catalog.product_count("cctv"), 1);
        assert_eq!(catalog.product_count("satellite"), 0);
        assert_eq!(catalog.product_count("softwares"), 0);
        assert!(catalog.entry("satellite").is_some());
    }

    #[test]
    fn test_loose_product_records_are_kept() {
        let catalog = ProductCatalog::from_json(r#"{"cctv": {"products": [{"id": 7, "title": "Dome"}, {}]}}"#)
            .expect("Should parse catalog");

        assert_eq!(catalog.product_count("cctv"), 2);
        assert_eq!(catalog.products("cctv")[0].id, "7");
        assert_eq!(catalog.products("cctv")[0].name, "");
    }

    #[test]
    fn test_unreadable_product_record_is_skipped() {
        let catalog = ProductCatalog::from_json(
            r#"{"cctv": {"products": ["just text", {"id": "b", "name": "Bullet", "description": "cam"}]}}"#,
        )
        .expect("Should parse catalog");

        assert_eq!(catalog.product_count("cctv"), 1);
        assert_eq!(catalog.products("cctv")[0].id, "b");
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"softwares": {"products": [{"id": "pos", "name": "POS", "description": "Billing"}]}}"#,
        )
        .expect("Should write catalog file");

        let catalog = ProductCatalog::from_path(&path).expect("Should load catalog");
        assert_eq!(catalog.product_count("softwares"), 1);
        assert_eq!(catalog.products("softwares")[0].name, "POS");
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let result = ProductCatalog::from_path(dir.path().join("missing.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = ProductCatalog::builtin().expect("Bundled catalog should parse");

        assert_eq!(catalog.product_count("cctv"), 6);
        assert_eq!(catalog.product_count("network-solution"), 4);
        assert_eq!(catalog.product_count("3d-printers-cnc"), 0);
        assert_eq!(catalog.product_count("automation-system"), 0);
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let mut catalog = ProductCatalog::default();
        catalog.insert("cctv", vec![product("dome", "Dome Camera", "Indoor")]);
        catalog.insert("network-solution", vec![product("switch", "Switch", "Gigabit")]);

        let hits = catalog.search("  CAMERA ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product.id, "dome");
        assert_eq!(hits[0].category_slug, "cctv");
        assert_eq!(hits[0].category_name, "CCTV");
    }

    #[test]
    fn test_search_matches_description() {
        let mut catalog = ProductCatalog::default();
        catalog.insert("softwares", vec![product("pos", "POS Suite", "Billing with barcode support")]);

        let hits = catalog.search("barcode");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product.id, "pos");
    }

    #[test]
    fn test_search_follows_table_order_then_unlisted_slugs() {
        let mut catalog = ProductCatalog::default();
        catalog.insert("zz-extra", vec![product("z", "Smart box", "")]);
        catalog.insert("automation-system", vec![product("auto", "Smart relay", "")]);
        catalog.insert("cctv", vec![product("cam", "Smart camera", "")]);
        catalog.insert("aa-extra", vec![product("a", "Smart plug", "")]);

        let ids: Vec<String> = catalog.search("smart").into_iter().map(|hit| hit.product.id).collect();
        assert_eq!(ids, vec!["cam", "auto", "a", "z"]);
    }

    #[test]
    fn test_search_unlisted_slug_uses_slug_as_name() {
        let mut catalog = ProductCatalog::default();
        catalog.insert("drones", vec![product("d1", "Survey drone", "")]);

        let hits = catalog.search("drone");
        assert_eq!(hits[0].category_name, "drones");
    }

    #[test]
    fn test_search_blank_text_matches_nothing() {
        let catalog = ProductCatalog::builtin().expect("Bundled catalog should parse");
        assert!(catalog.search("").is_empty());
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn test_serializes_as_slug_map() {
        let mut catalog = ProductCatalog::default();
        catalog.insert("satellite", vec![product("dish", "Dish", "Ku-band")]);

        let json = serde_json::to_value(&catalog).expect("Should serialize");
        assert_eq!(json["satellite"]["products"][0]["id"], "dish");
    }
}
