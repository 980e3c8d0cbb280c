pub mod category_card;
pub mod category_grid;
pub mod hero;

pub use category_grid::CategoryGrid;
pub use hero::Hero;
