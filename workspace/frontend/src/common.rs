pub mod catalog_context;
pub mod empty_state;
