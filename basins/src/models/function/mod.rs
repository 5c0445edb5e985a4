pub mod descriptor;
pub mod function;
pub mod polynomial;
pub mod root_product;
