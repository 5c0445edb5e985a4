pub mod catalog;
pub mod function;
pub mod quality;
pub mod resolution;
pub mod sample;
pub mod task;
pub mod viewport;
