//! Category table and the descriptors rendered on the landing page.

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::error::{CatalogError, Result};
use crate::store::ProductCatalog;

/// One row of the category table.
///
/// `unit` is the noun shown after the product count on the card badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySpec {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub unit: &'static str,
}

/// Categories shown on the landing page, in display order.
pub const CATEGORY_TABLE: [CategorySpec; 9] = [
    CategorySpec {
        slug: "cctv",
        name: "CCTV",
        description: "Security cameras and surveillance systems",
        image: "https://images.unsplash.com/photo-1605810230434-7631ac76ec81?auto=format&fit=crop&w=600&q=80",
        unit: "products",
    },
    CategorySpec {
        slug: "network-solution",
        name: "Network Solution",
        description: "Latest electronic devices and gadgets",
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&fit=crop&w=600&q=80",
        unit: "items",
    },
    CategorySpec {
        slug: "softwares",
        name: "Softwares",
        description: "Custom software and applications",
        image: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?auto=format&fit=crop&w=600&q=80",
        unit: "solutions",
    },
    CategorySpec {
        slug: "computer-laptops",
        name: "Computer and Laptops",
        description: "Quality hardware parts and components",
        image: "https://images.unsplash.com/photo-1531297484001-80022131f5a1?auto=format&fit=crop&w=600&q=80",
        unit: "components",
    },
    CategorySpec {
        slug: "satellite",
        name: "Satellite",
        description: "Professional business and productivity tools",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=600&q=80",
        unit: "tools",
    },
    CategorySpec {
        slug: "fiber-solution",
        name: "Fiber Solution",
        description: "Digital products and online services",
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=600&q=80",
        unit: "services",
    },
    CategorySpec {
        slug: "interphone-solution",
        name: "Interphone Solution",
        description: "Expert consultation and advisory services",
        image: "https://images.unsplash.com/photo-1519389950473-47ba0277781c?auto=format&fit=crop&w=600&q=80",
        unit: "packages",
    },
    CategorySpec {
        slug: "3d-printers-cnc",
        name: "3D Printers & CNC",
        description: "3D printing and CNC machining solutions",
        image: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?auto=format&fit=crop&w=600&q=80",
        unit: "machines",
    },
    CategorySpec {
        slug: "automation-system",
        name: "Automation System",
        description: "Smart automation and control systems",
        image: "https://images.unsplash.com/photo-1487887235947-a955ef187fcc?auto=format&fit=crop&w=600&q=80",
        unit: "systems",
    },
];

/// Look up a category table row by slug.
pub fn find_category(slug: &str) -> Result<&'static CategorySpec> {
    CATEGORY_TABLE
        .iter()
        .find(|spec| spec.slug == slug)
        .ok_or_else(|| CatalogError::UnknownCategory(slug.to_string()))
}

/// Badge text for a category card, e.g. `16+ products`.
pub fn format_item_count(count: usize, unit: &str) -> String {
    format!("{}+ {}", count, unit)
}

/// Display record for one category card.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub name: String,
    pub description: String,
    /// Card image URL
    pub image: String,
    /// Formatted count badge
    pub item_count: String,
    pub slug: String,
    /// Raw product count behind `item_count`
    pub count: usize,
}

impl CategoryDescriptor {
    fn from_spec(spec: &CategorySpec, catalog: &ProductCatalog) -> Self {
        let count = catalog.product_count(spec.slug);
        Self {
            name: spec.name.to_string(),
            description: spec.description.to_string(),
            image: spec.image.to_string(),
            item_count: format_item_count(count, spec.unit),
            slug: spec.slug.to_string(),
            count,
        }
    }
}

/// Build the landing page cards from the category table and the catalog.
///
/// Always yields one descriptor per table row, in table order.
pub fn build_category_list(catalog: &ProductCatalog) -> Vec<CategoryDescriptor> {
    let list: Vec<CategoryDescriptor> = CATEGORY_TABLE
        .iter()
        .map(|spec| CategoryDescriptor::from_spec(spec, catalog))
        .collect();
    debug!("Built {} category descriptors", list.len());
    list
}
