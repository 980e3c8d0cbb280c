use anyhow::Result;
use catalog::{ProductCatalog, build_category_list};
use std::path::Path;
use tracing::debug;

use crate::config::load_catalog;

/// Render the category list as pretty-printed JSON.
pub fn render_categories(catalog: &ProductCatalog) -> Result<String> {
    let categories = build_category_list(catalog);
    debug!("Rendering {} categories", categories.len());
    Ok(serde_json::to_string_pretty(&categories)?)
}

pub fn print_categories(catalog_path: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    println!("{}", render_categories(&catalog)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_categories() {
        let catalog = ProductCatalog::builtin().expect("Bundled catalog should parse");
        let json = render_categories(&catalog).expect("Should render");

        let value: serde_json::Value = serde_json::from_str(&json).expect("Should be JSON");
        let list = value.as_array().expect("Should be an array");
        assert_eq!(list.len(), 9);
        assert_eq!(list[0]["slug"], "cctv");
        assert_eq!(list[0]["item_count"], "6+ products");
        assert_eq!(list[8]["item_count"], "0+ systems");
    }
}
