pub mod config;
pub mod errors;
pub mod string_utils;

pub use errors::{Pl0Error, Pl0Result};
