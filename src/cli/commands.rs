pub mod categories;
pub mod serve;

pub use categories::print_categories;
pub use serve::serve;
