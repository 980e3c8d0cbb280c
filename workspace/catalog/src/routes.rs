//! Route paths shared by the landing page links, the search redirect and the server.

/// Landing page listing every category.
pub const CATEGORY_INDEX_PATH: &str = "/products";

/// Search results route; the text travels in the `query` parameter.
pub const SEARCH_PATH: &str = "/search";

/// Detail page path for a category, `/products/{slug}`.
pub fn category_path(slug: &str) -> String {
    format!("{}/{}", CATEGORY_INDEX_PATH, slug)
}

/// Search results path with `text` percent-encoded, `/search?query={text}`.
///
/// The caller is expected to pass already trimmed text.
pub fn search_path(text: &str) -> String {
    format!("{}?query={}", SEARCH_PATH, urlencoding::encode(text))
}
