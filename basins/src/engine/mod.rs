pub mod error;
pub mod field;
pub mod result;
pub mod root_finder;
