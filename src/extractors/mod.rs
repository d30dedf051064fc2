pub mod product_body;
pub mod product_id;

pub use product_body::ProductBody;
pub use product_id::ProductId;
