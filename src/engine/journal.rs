//! Journal entry construction from classified statement movements

use bigdecimal::Zero;

use crate::config::EngineConfig;
use crate::engine::classifier::{select_bank_account, Classifier};
use crate::types::*;

/// Narration for a movement: `Penerimaan atas ...` for credits,
/// `Pembayaran atas ...` for debits.
pub fn narration(transaction_type: TransactionType, description: &str) -> String {
    match transaction_type {
        TransactionType::Credit => format!("Penerimaan atas {description}"),
        TransactionType::Debit => format!("Pembayaran atas {description}"),
    }
}

/// Builds one balanced two-line entry per statement movement
#[derive(Debug, Clone, Default)]
pub struct JournalBuilder {
    classifier: Classifier,
}

impl JournalBuilder {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            classifier: Classifier::new(config),
        }
    }

    pub fn with_classifier(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Build journal entries in transaction order.
    ///
    /// Returns an empty list when either input is empty.
    pub fn build(&self, coa: &[CoaItem], transactions: &[TransactionItem]) -> Vec<JournalEntry> {
        self.build_with_report(coa, transactions).entries
    }

    /// Build journal entries together with the match tier of each entry
    pub fn build_with_report(
        &self,
        coa: &[CoaItem],
        transactions: &[TransactionItem],
    ) -> BuildReport {
        let mut report = BuildReport::default();
        if coa.is_empty() || transactions.is_empty() {
            return report;
        }

        let Some(bank) = select_bank_account(coa, &self.classifier.config().bank_markers) else {
            return report;
        };

        for transaction in transactions {
            let Some(classification) = self.classifier.classify_with_bank(
                coa,
                Some(bank),
                &transaction.description,
                transaction.transaction_type,
            ) else {
                continue;
            };
            tracing::debug!(
                id = %transaction.id,
                account = %classification.account.code,
                tier = ?classification.tier,
                "classified transaction"
            );

            if transaction.amount.is_zero() {
                report.zero_amount_entries += 1;
                tracing::warn!(id = %transaction.id, "journal entry with zero amount");
            }

            report.entries.push(journal_entry(transaction, bank, classification.account));
            report.tiers.push(classification.tier);
        }

        report
    }
}

fn journal_entry(transaction: &TransactionItem, bank: &CoaItem, account: &CoaItem) -> JournalEntry {
    let amount = transaction.amount.clone();
    let lines = match transaction.transaction_type {
        TransactionType::Credit => vec![
            JournalLine::debit(bank, amount.clone()),
            JournalLine::credit(account, amount),
        ],
        TransactionType::Debit => vec![
            JournalLine::debit(account, amount.clone()),
            JournalLine::credit(bank, amount),
        ],
    };

    JournalEntry {
        id: transaction.id.clone(),
        date: transaction.date.clone(),
        description: transaction.description.clone(),
        narration: narration(transaction.transaction_type, &transaction.description),
        lines,
        is_valid: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_chart_of_accounts;
    use bigdecimal::BigDecimal;

    fn txn(id: &str, description: &str, amount: i64, transaction_type: TransactionType) -> TransactionItem {
        TransactionItem {
            id: id.to_string(),
            date: "02/10/2023".to_string(),
            description: description.to_string(),
            amount: BigDecimal::from(amount),
            transaction_type,
        }
    }

    #[test]
    fn test_credit_debits_bank() {
        let coa = default_chart_of_accounts();
        let entries = JournalBuilder::default().build(
            &coa,
            &[txn("TXN-1", "Pembayaran Invoice #Inv-001 PT Maju", 25_000_000, TransactionType::Credit)],
        );

        let entry = &entries[0];
        assert_eq!(entry.lines[0].account_name, "Kas Besar");
        assert_eq!(entry.lines[0].debit, BigDecimal::from(25_000_000));
        assert_eq!(entry.lines[1].account_name, "Pendapatan Penjualan");
        assert_eq!(entry.lines[1].credit, BigDecimal::from(25_000_000));
        assert_eq!(entry.narration, "Penerimaan atas Pembayaran Invoice #Inv-001 PT Maju");
        assert!(entry.is_balanced());
    }

    #[test]
    fn test_debit_credits_bank() {
        let coa = default_chart_of_accounts();
        let entries = JournalBuilder::default().build(
            &coa,
            &[txn("TXN-1", "Bayar Listrik Bulan Sept", 1_200_000, TransactionType::Debit)],
        );

        let entry = &entries[0];
        assert_eq!(entry.lines[0].account_code, "6-1003");
        assert_eq!(entry.lines[0].debit, BigDecimal::from(1_200_000));
        assert_eq!(entry.lines[1].account_code, "1-1001");
        assert_eq!(entry.lines[1].credit, BigDecimal::from(1_200_000));
        assert_eq!(entry.narration, "Pembayaran atas Bayar Listrik Bulan Sept");
    }

    #[test]
    fn test_empty_inputs() {
        let builder = JournalBuilder::default();
        let coa = default_chart_of_accounts();
        assert!(builder.build(&coa, &[]).is_empty());
        assert!(builder
            .build(&[], &[txn("TXN-1", "x", 1, TransactionType::Debit)])
            .is_empty());
    }

    #[test]
    fn test_report_tiers_and_order() {
        let coa = default_chart_of_accounts();
        let report = JournalBuilder::default().build_with_report(
            &coa,
            &[
                txn("TXN-1", "Biaya Admin Bank", 15_000, TransactionType::Debit),
                txn("TXN-2", "Mutasi xyz", 0, TransactionType::Credit),
            ],
        );

        let ids: Vec<&str> = report.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["TXN-1", "TXN-2"]);
        assert_eq!(report.tiers, vec![MatchTier::Keyword, MatchTier::Category]);
        assert_eq!(report.zero_amount_entries, 1);
    }

    #[test]
    fn test_zero_amount_entry_still_marked_valid() {
        let coa = default_chart_of_accounts();
        let entries = JournalBuilder::default()
            .build(&coa, &[txn("TXN-1", "Setoran", 0, TransactionType::Credit)]);

        assert!(entries[0].is_valid);
        assert!(entries[0].is_balanced());
        assert!(!entries[0].lines[0].is_one_sided());
    }
}
