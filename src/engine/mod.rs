//! Classification engine and journal construction

pub mod classifier;
pub mod journal;
pub mod keywords;

pub use classifier::*;
pub use journal::*;
pub use keywords::*;
