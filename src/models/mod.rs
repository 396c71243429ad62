pub mod category;
pub mod generic;
pub mod manufacturer;
pub mod product;
pub mod product_generic;
pub mod product_type;
pub mod schedule_type;
pub mod tax;
