pub mod product_category;
pub mod products;
pub mod search;
