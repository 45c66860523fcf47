pub mod calculations;
pub mod models;

pub use calculations::rate_sheet::{RateSheetCalculator, RateSheetInput, RateSheetOutputs};
pub use models::*;
