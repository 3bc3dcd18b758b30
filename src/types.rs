//! Core types and data structures for statement-to-journal conversion

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

/// Direction of a bank statement movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionType {
    /// Funds left the bank/cash account
    #[default]
    #[serde(rename = "DB")]
    Debit,
    /// Funds entered the bank/cash account
    #[serde(rename = "CR")]
    Credit,
}

impl TransactionType {
    /// Interpret a free-form type token from a statement line.
    ///
    /// Recognizes `CR`, `K`, `CREDIT`, `KREDIT` as credit and `DB`, `D`, `DEBIT`
    /// as debit, case-insensitively. Anything else falls back to debit.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_uppercase().as_str() {
            "CR" | "K" | "CREDIT" | "KREDIT" => TransactionType::Credit,
            _ => TransactionType::Debit,
        }
    }

    /// Short statement code (`DB` / `CR`)
    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::Debit => "DB",
            TransactionType::Credit => "CR",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One chart-of-accounts entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoaItem {
    /// External account code, e.g. `1-1001`
    pub code: String,
    /// Human-readable account name
    pub name: String,
    /// Free-form category label (`Aset`, `Beban`, ...)
    pub category: String,
}

impl CoaItem {
    pub fn new(code: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            category: category.into(),
        }
    }
}

/// One bank statement movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionItem {
    /// Sequential identifier (`TXN-1`, `TXN-2`, ...)
    pub id: String,
    /// Date exactly as it appeared in the statement
    pub date: String,
    pub description: String,
    /// Always non-negative; direction is carried by `transaction_type`
    pub amount: BigDecimal,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// One leg of a journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalLine {
    pub account_code: String,
    pub account_name: String,
    pub debit: BigDecimal,
    pub credit: BigDecimal,
}

impl JournalLine {
    /// Create a debit line against an account
    pub fn debit(account: &CoaItem, amount: BigDecimal) -> Self {
        Self {
            account_code: account.code.clone(),
            account_name: account.name.clone(),
            debit: amount,
            credit: BigDecimal::zero(),
        }
    }

    /// Create a credit line against an account
    pub fn credit(account: &CoaItem, amount: BigDecimal) -> Self {
        Self {
            account_code: account.code.clone(),
            account_name: account.name.clone(),
            debit: BigDecimal::zero(),
            credit: amount,
        }
    }

    /// True when exactly one side of the line carries a nonzero amount
    pub fn is_one_sided(&self) -> bool {
        self.debit.is_zero() != self.credit.is_zero()
    }
}

/// Balanced journal entry produced from one statement movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub date: String,
    pub description: String,
    pub narration: String,
    pub lines: Vec<JournalLine>,
    pub is_valid: bool,
}

impl JournalEntry {
    /// Calculate total debits
    pub fn total_debits(&self) -> BigDecimal {
        self.lines.iter().map(|l| &l.debit).sum()
    }

    /// Calculate total credits
    pub fn total_credits(&self) -> BigDecimal {
        self.lines.iter().map(|l| &l.credit).sum()
    }

    /// Check if the entry is balanced (debits = credits)
    pub fn is_balanced(&self) -> bool {
        self.total_debits() == self.total_credits()
    }
}

/// Which step of the classification fallback chain picked an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    /// Keyword dictionary hit on a canonical account name
    Keyword,
    /// Account name and description overlap
    NameOverlap,
    /// Expense/revenue category or code-prefix fallback
    Category,
    /// First account of the chart
    FirstAccount,
}

/// Counters collected while parsing one text blob
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Non-blank lines seen
    pub lines_read: usize,
    /// Non-blank lines dropped for having too few fields
    pub lines_dropped: usize,
    /// Records whose amount normalized to zero (transactions only)
    pub zero_amounts: usize,
}

/// Journal entries plus per-entry diagnostics for one batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    pub entries: Vec<JournalEntry>,
    /// Match tier per entry, aligned with `entries`
    pub tiers: Vec<MatchTier>,
    /// Number of entries whose legs are both zero
    pub zero_amount_entries: usize,
}

/// Errors raised at the outer seams (session, storage, generators, export)
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("Empty input: {0}")]
    EmptyInput(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Export error: {0}")]
    Export(String),
    #[error("Generator error: {0}")]
    Generator(String),
}

/// Result type for journal operations
pub type JournalResult<T> = Result<T, JournalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_token_synonyms() {
        for token in ["CR", "cr", "K", "credit", "Kredit"] {
            assert_eq!(TransactionType::from_token(token), TransactionType::Credit);
        }
        for token in ["DB", "d", "Debit", "", "transfer"] {
            assert_eq!(TransactionType::from_token(token), TransactionType::Debit);
        }
    }

    #[test]
    fn test_journal_line_sides() {
        let account = CoaItem::new("1-1002", "Bank BCA", "Aset");
        let line = JournalLine::debit(&account, BigDecimal::from(500));
        assert!(line.is_one_sided());
        assert_eq!(line.credit, BigDecimal::zero());

        let empty = JournalLine::credit(&account, BigDecimal::zero());
        assert!(!empty.is_one_sided());
    }

    #[test]
    fn test_serialized_shape() {
        let entry = JournalEntry {
            id: "TXN-1".to_string(),
            date: "01/10/2023".to_string(),
            description: "Biaya Admin Bank".to_string(),
            narration: "Pembayaran atas Biaya Admin Bank".to_string(),
            lines: vec![],
            is_valid: true,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["isValid"], serde_json::json!(true));

        let txn = TransactionItem {
            id: "TXN-1".to_string(),
            date: "01/10/2023".to_string(),
            description: "Setoran".to_string(),
            amount: BigDecimal::from(10),
            transaction_type: TransactionType::Credit,
        };
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], serde_json::json!("CR"));
    }
}
