//! # SiJO Core
//!
//! Offline, rule-based conversion of loosely formatted bank statement text
//! into balanced double-entry journal entries.
//!
//! ## Features
//!
//! - **Lenient parsing**: tab, semicolon, comma or space-aligned columns, detected per line
//! - **Regional amounts**: `1.000.000,50` and `1,000,000.50` both normalize to the same value
//! - **Classification**: keyword dictionary, name overlap, category and first-account fallbacks
//! - **Balanced output**: every entry has one bank/cash leg and one classified leg of equal amount
//! - **Swappable backends**: trait-based journal generation and snapshot storage
//!
//! ## Quick Start
//!
//! ```rust
//! use sijo_core::{build_journals, default_chart_of_accounts, parse_transactions};
//!
//! let coa = default_chart_of_accounts();
//! let transactions = parse_transactions("01/10/2023\tBiaya Admin Bank\t15000\tDB");
//! let entries = build_journals(&coa, &transactions);
//!
//! assert_eq!(entries[0].lines[0].account_name, "Beban Administrasi Bank");
//! assert!(entries[0].is_balanced());
//! ```

pub mod config;
pub mod engine;
pub mod export;
pub mod generator;
pub mod parser;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use engine::*;
pub use generator::*;
pub use parser::*;
pub use traits::*;
pub use types::*;

/// Build journal entries with the default engine configuration.
///
/// Returns an empty list when either input is empty.
pub fn build_journals(coa: &[CoaItem], transactions: &[TransactionItem]) -> Vec<JournalEntry> {
    JournalBuilder::default().build(coa, transactions)
}
