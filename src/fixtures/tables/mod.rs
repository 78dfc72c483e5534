// fixtures/tables/mod.rs - Test table definitions

pub mod catalog;

pub use catalog::{CategoriesTable, ProductsTable};
