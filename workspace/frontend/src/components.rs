pub mod categories;
pub mod layout;
pub mod products;
pub mod search;
