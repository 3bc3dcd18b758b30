//! Parsing of raw statement and chart-of-accounts text

pub mod amount;
pub mod records;
pub mod tokenizer;

pub use amount::*;
pub use records::*;
pub use tokenizer::*;
