pub mod controller;
pub mod document;
pub mod fields;
pub mod form;
pub mod utils;

pub use controller::RateController;
pub use document::{FormDocument, MemoryForm};
