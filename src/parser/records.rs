//! Record parsing for chart-of-accounts and bank statement text

use bigdecimal::Zero;

use crate::parser::amount::parse_amount;
use crate::parser::tokenizer::split_fields;
use crate::types::*;

/// Category assigned to accounts whose line has no third field
pub const DEFAULT_CATEGORY: &str = "General";

/// Parse chart-of-accounts text, one `code, name[, category]` per line.
///
/// Lines with fewer than two fields are skipped.
pub fn parse_coa(text: &str) -> Vec<CoaItem> {
    parse_coa_with_stats(text).0
}

/// Parse chart-of-accounts text and report how many lines were dropped
pub fn parse_coa_with_stats(text: &str) -> (Vec<CoaItem>, ParseStats) {
    let mut stats = ParseStats::default();
    let mut items = Vec::new();

    for (line_no, line) in non_blank_lines(text) {
        stats.lines_read += 1;
        let mut fields = split_fields(line).into_iter();

        let (Some(code), Some(name)) = (fields.next(), fields.next()) else {
            stats.lines_dropped += 1;
            tracing::debug!(line_no, "dropping chart line with fewer than 2 fields");
            continue;
        };
        let category = fields
            .next()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        items.push(CoaItem {
            code,
            name,
            category,
        });
    }

    (items, stats)
}

/// Parse bank statement text, one `date, description, amount[, type]` per line.
///
/// Lines with fewer than three fields are skipped. Ids are assigned in order
/// over the records actually produced (`TXN-1`, `TXN-2`, ...).
pub fn parse_transactions(text: &str) -> Vec<TransactionItem> {
    parse_transactions_with_stats(text).0
}

/// Parse bank statement text and report dropped lines and zero amounts
pub fn parse_transactions_with_stats(text: &str) -> (Vec<TransactionItem>, ParseStats) {
    let mut stats = ParseStats::default();
    let mut items: Vec<TransactionItem> = Vec::new();

    for (line_no, line) in non_blank_lines(text) {
        stats.lines_read += 1;
        let mut fields = split_fields(line).into_iter();

        let (Some(date), Some(description), Some(raw_amount)) =
            (fields.next(), fields.next(), fields.next())
        else {
            stats.lines_dropped += 1;
            tracing::debug!(line_no, "dropping statement line with fewer than 3 fields");
            continue;
        };

        let amount = parse_amount(&raw_amount);
        if amount.is_zero() {
            stats.zero_amounts += 1;
            tracing::warn!(line_no, raw_amount = %raw_amount, "amount normalized to zero");
        }
        let transaction_type = fields
            .next()
            .map(|token| TransactionType::from_token(&token))
            .unwrap_or_default();

        items.push(TransactionItem {
            id: format!("TXN-{}", items.len() + 1),
            date,
            description,
            amount,
            transaction_type,
        });
    }

    tracing::debug!(
        parsed = items.len(),
        dropped = stats.lines_dropped,
        "parsed statement lines"
    );
    (items, stats)
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    #[test]
    fn test_coa_delimiters_agree() {
        let expected = CoaItem::new("1-1001", "Kas Besar", "Aset");
        for line in [
            "1-1001\tKas Besar\tAset",
            "1-1001;Kas Besar;Aset",
            "1-1001,Kas Besar,Aset",
            "1-1001   Kas Besar   Aset",
        ] {
            assert_eq!(parse_coa(line), vec![expected.clone()], "line: {line:?}");
        }
    }

    #[test]
    fn test_coa_default_category_and_drops() {
        let (items, stats) = parse_coa_with_stats("4-1001;Pendapatan Jasa\n\nOrphan\n");
        assert_eq!(items, vec![CoaItem::new("4-1001", "Pendapatan Jasa", "General")]);
        assert_eq!(stats.lines_read, 2);
        assert_eq!(stats.lines_dropped, 1);
    }

    #[test]
    fn test_transaction_type_inference() {
        let text = "01/10/2023\tBiaya Admin Bank\t15000\tDB\n\
                    02/10/2023\tSetoran Tunai\t500000\n\
                    03/10/2023\tTransfer Masuk\t750000\tK";
        let items = parse_transactions(text);

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].transaction_type, TransactionType::Debit);
        assert_eq!(items[1].transaction_type, TransactionType::Debit);
        assert_eq!(items[2].transaction_type, TransactionType::Credit);
        assert_eq!(items[2].amount, BigDecimal::from(750000));
    }

    #[test]
    fn test_ids_count_only_produced_records() {
        let text = "01/10/2023;Admin;15000\n\njunk line\n02/10/2023;Gaji;9.000.000;D";
        let (items, stats) = parse_transactions_with_stats(text);

        let ids: Vec<&str> = items.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["TXN-1", "TXN-2"]);
        assert_eq!(stats.lines_dropped, 1);
        assert_eq!(items[1].amount, BigDecimal::from(9_000_000));
    }

    #[test]
    fn test_direction_marker_in_amount_column() {
        let (items, stats) = parse_transactions_with_stats("01/10/2023\tBiaya Admin\t15,000.00 DB");
        assert_eq!(items[0].amount, BigDecimal::from(15_000));
        assert_eq!(stats.zero_amounts, 0);
    }

    #[test]
    fn test_quoted_description_loses_quote_characters() {
        let items = parse_transactions(r#"02/10/2023,"PT Maju" Jaya,25000000,CR"#);
        assert_eq!(items[0].description, "PT Maju Jaya");
    }

    #[test]
    fn test_date_kept_verbatim_and_zero_amount_counted() {
        let (items, stats) = parse_transactions_with_stats("kemarin;Titipan;n/a;CR");
        assert_eq!(items[0].date, "kemarin");
        assert!(items[0].amount.is_zero());
        assert_eq!(stats.zero_amounts, 1);
    }
}
