//! Core MO catalog parsing module

pub mod decoder;
pub mod format;
pub mod types;
mod parser;
mod utils;

pub use decoder::{EncodingRsDecoder, TextDecoder};
pub use parser::{parse, parse_with_decoder};
pub use types::error::{MoError, Result};
