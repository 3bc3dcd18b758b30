//! Keyword dictionary mapping description fragments to canonical accounts

use serde::{Deserialize, Serialize};

/// Keywords that point at one canonical account name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Account name looked up in the chart (case-insensitive)
    pub account_name: String,
    /// Lowercase fragments searched for in the description
    pub keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new(account_name: &str, keywords: &[&str]) -> Self {
        Self {
            account_name: account_name.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// True when any keyword occurs in the already-lowercased description
    pub fn matches(&self, lowered_description: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered_description.contains(keyword.as_str()))
    }
}

/// Ordered, immutable keyword table. Earlier rules win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordDictionary {
    rules: Vec<KeywordRule>,
}

impl KeywordDictionary {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    /// Empty dictionary; classification then starts at name overlap
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Dictionary for the standard Indonesian small-business chart
    pub fn standard() -> Self {
        Self::new(vec![
            KeywordRule::new(
                "Beban Listrik & Air",
                &["listrik", "pln", "token", "pdam", "air pam", "telkom", "indihome", "internet"],
            ),
            KeywordRule::new(
                "Beban Gaji",
                &["gaji", "payroll", "salary", "upah", "honor", "lembur", "tunjangan"],
            ),
            KeywordRule::new(
                "Beban Administrasi Bank",
                &["admin", "biaya adm", "administrasi", "provisi", "materai", "biaya transfer"],
            ),
            KeywordRule::new("Beban Sewa", &["sewa", "rent", "kontrakan", "lease"]),
            KeywordRule::new(
                "Beban Iklan",
                &["iklan", "promosi", "marketing", "google ads", "facebook", "instagram", "baliho"],
            ),
            KeywordRule::new(
                "Beban Perlengkapan Kantor",
                &["atk", "alat tulis", "kertas", "tinta", "printer", "perlengkapan", "fotokopi"],
            ),
            KeywordRule::new(
                "Beban Kendaraan",
                &["bensin", "bbm", "pertamina", "solar", "parkir", "e-toll", "servis kendaraan"],
            ),
            KeywordRule::new(
                "Pendapatan Jasa",
                &["jasa", "konsultasi", "consulting", "komisi", "fee"],
            ),
            KeywordRule::new(
                "Pendapatan Penjualan",
                &["penjualan", "invoice", "inv-", "jual", "sales", "omzet"],
            ),
            KeywordRule::new("Piutang Usaha", &["piutang", "pelunasan dari", "cicilan pelanggan"]),
            KeywordRule::new("Utang Usaha", &["utang", "hutang", "supplier", "pemasok"]),
        ])
    }

    /// Rules in priority order
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for KeywordDictionary {
    fn default() -> Self {
        Self::standard()
    }
}
