#![doc = include_str!("../README.md")]

pub use crate::atis::decode_atis;
pub use crate::bulletin::WeatherBulletin;
pub use crate::error::{Error, Result};
pub use crate::types::*;
pub use crate::warning::decode_warning;

mod atis;
mod bulletin;
mod error;
mod types;
pub mod utils;
mod warning;
