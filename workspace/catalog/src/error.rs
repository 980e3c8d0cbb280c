use thiserror::Error;

/// Error types for the catalog crate
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog data is not valid JSON or has the wrong shape
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog file could not be read
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Slug is not part of the category table
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
