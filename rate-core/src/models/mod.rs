mod client;
mod orientation;
mod rate_config;

pub use client::Client;
pub use orientation::OrientationType;
pub use rate_config::{RateConfig, RateConfigError};
