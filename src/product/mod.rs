mod delete;
mod gendata;
mod product_error;

pub use delete::{delete_product_by_id, DeleteOutcome, Product, ProductDelete};
pub use gendata::{seed_products, ProductSeeder};
pub use product_error::{ProductError, ProductErrorType};
