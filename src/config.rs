//! Engine configuration and the bundled default chart of accounts

use serde::{Deserialize, Serialize};

use crate::engine::keywords::KeywordDictionary;
use crate::types::*;

/// Key under which the latest journal snapshot is persisted
pub const SNAPSHOT_KEY: &str = "sijo_journals";

/// Sample statement text matching [`default_chart_of_accounts`]
pub const SAMPLE_TRANSACTIONS: &str = "01/10/2023\tBiaya Admin Bank\t15000\tDB
02/10/2023\tPembayaran Invoice #Inv-001 PT Maju\t25000000\tCR
03/10/2023\tBeli Kertas & Tinta Printer\t450000\tDB
05/10/2023\tBayar Listrik Bulan Sept\t1200000\tDB
10/10/2023\tTerima Jasa Konsultasi\t5000000\tCR";

/// Settings for classification and bank account selection.
///
/// Every field has a default, so a partial JSON document is enough to
/// override a single setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Lowercase fragments identifying the bank/cash account by name
    pub bank_markers: Vec<String>,
    /// Category of expense accounts (compared case-insensitively)
    pub expense_category: String,
    pub expense_code_prefix: String,
    /// Category of revenue accounts (compared case-insensitively)
    pub revenue_category: String,
    pub revenue_code_prefix: String,
    pub keywords: KeywordDictionary,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bank_markers: vec!["bank".to_string(), "kas".to_string()],
            expense_category: "beban".to_string(),
            expense_code_prefix: "6".to_string(),
            revenue_category: "pendapatan".to_string(),
            revenue_code_prefix: "4".to_string(),
            keywords: KeywordDictionary::standard(),
        }
    }
}

impl EngineConfig {
    /// Load a configuration from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> JournalResult<Self> {
        serde_json::from_str(json).map_err(|e| JournalError::Serialization(e.to_string()))
    }

    /// Replace the keyword dictionary
    pub fn with_keywords(mut self, keywords: KeywordDictionary) -> Self {
        self.keywords = keywords;
        self
    }
}

/// The 12-account chart used when the caller supplies none
pub fn default_chart_of_accounts() -> Vec<CoaItem> {
    [
        ("1-1001", "Kas Besar", "Aset"),
        ("1-1002", "Bank BCA", "Aset"),
        ("1-1003", "Bank Mandiri", "Aset"),
        ("2-1001", "Utang Usaha", "Liabilitas"),
        ("4-1001", "Pendapatan Jasa", "Pendapatan"),
        ("4-1002", "Pendapatan Penjualan", "Pendapatan"),
        ("6-1001", "Beban Gaji", "Beban"),
        ("6-1002", "Beban Sewa", "Beban"),
        ("6-1003", "Beban Listrik & Air", "Beban"),
        ("6-1004", "Beban Iklan", "Beban"),
        ("6-1005", "Beban Administrasi Bank", "Beban"),
        ("6-1006", "Beban Perlengkapan Kantor", "Beban"),
    ]
    .into_iter()
    .map(|(code, name, category)| CoaItem::new(code, name, category))
    .collect()
}
