//! Presentation projection of journal entries for spreadsheet import

use bigdecimal::{BigDecimal, Zero};
use serde::Serialize;
use std::io::Write;

use crate::types::*;

/// External transaction number for the entry at `index` (0-based): `JV-0001`, ...
pub fn transaction_number(index: usize) -> String {
    format!("JV-{:04}", index + 1)
}

/// One flattened journal line, as accounting import sheets expect it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "*TransactionNumber")]
    pub transaction_number: String,
    /// Date prefixed with `'` so spreadsheets keep it as text
    #[serde(rename = "*TransactionDate")]
    pub transaction_date: String,
    #[serde(rename = "*AccountCode")]
    pub account_code: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "*Debit")]
    pub debit: String,
    #[serde(rename = "*Credit")]
    pub credit: String,
    #[serde(rename = "Memo")]
    pub memo: String,
    #[serde(rename = "Tag")]
    pub tag: String,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "Rate to Base")]
    pub rate_to_base: String,
}

/// Flatten entries into one row per journal line
pub fn flatten(entries: &[JournalEntry]) -> Vec<ExportRow> {
    entries
        .iter()
        .enumerate()
        .flat_map(|(index, entry)| {
            let number = transaction_number(index);
            entry.lines.iter().map(move |line| ExportRow {
                transaction_number: number.clone(),
                transaction_date: format!("'{}", entry.date),
                account_code: line.account_code.clone(),
                description: line.account_name.clone(),
                debit: line.debit.normalized().to_plain_string(),
                credit: line.credit.normalized().to_plain_string(),
                memo: entry.narration.clone(),
                tag: String::new(),
                currency: "IDR".to_string(),
                rate_to_base: String::new(),
            })
        })
        .collect()
}

/// UTF-8 byte order mark, so spreadsheet apps decode the file as UTF-8
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write entries as CSV with a leading UTF-8 BOM and a header row
pub fn write_csv<W: Write>(entries: &[JournalEntry], mut writer: W) -> JournalResult<()> {
    writer
        .write_all(UTF8_BOM)
        .map_err(|e| JournalError::Export(e.to_string()))?;
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in flatten(entries) {
        csv_writer
            .serialize(row)
            .map_err(|e| JournalError::Export(e.to_string()))?;
    }
    csv_writer
        .flush()
        .map_err(|e| JournalError::Export(e.to_string()))
}

/// Format an amount as whole rupiah, e.g. `Rp 25.000.000`
pub fn format_rupiah(amount: &BigDecimal) -> String {
    let rounded = amount.round(0).with_scale(0);
    let digits = rounded.abs().to_plain_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if rounded < BigDecimal::zero() {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn entry(date: &str, amount: i64) -> JournalEntry {
        let bank = CoaItem::new("1-1001", "Kas Besar", "Aset");
        let fee = CoaItem::new("6-1005", "Beban Administrasi Bank", "Beban");
        JournalEntry {
            id: "TXN-1".to_string(),
            date: date.to_string(),
            description: "Biaya Admin Bank".to_string(),
            narration: "Pembayaran atas Biaya Admin Bank".to_string(),
            lines: vec![
                JournalLine::debit(&fee, BigDecimal::from(amount)),
                JournalLine::credit(&bank, BigDecimal::from(amount)),
            ],
            is_valid: true,
        }
    }

    #[test]
    fn test_transaction_numbers() {
        assert_eq!(transaction_number(0), "JV-0001");
        assert_eq!(transaction_number(41), "JV-0042");
    }

    #[test]
    fn test_flatten_rows() {
        let rows = flatten(&[entry("01/10/2023", 15000), entry("02/10/2023", 2000)]);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].transaction_number, "JV-0001");
        assert_eq!(rows[0].transaction_date, "'01/10/2023");
        assert_eq!(rows[0].debit, "15000");
        assert_eq!(rows[0].credit, "0");
        assert_eq!(rows[1].account_code, "1-1001");
        assert_eq!(rows[3].transaction_number, "JV-0002");
        assert_eq!(rows[3].memo, "Pembayaran atas Biaya Admin Bank");
    }

    #[test]
    fn test_csv_header_and_rows() {
        let mut buffer = Vec::new();
        write_csv(&[entry("01/10/2023", 15000)], &mut buffer).unwrap();
        assert!(buffer.starts_with(UTF8_BOM));
        let text = String::from_utf8(buffer[UTF8_BOM.len()..].to_vec()).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "*TransactionNumber,*TransactionDate,*AccountCode,Description,*Debit,*Credit,Memo,Tag,Currency,Rate to Base"
        );
        assert_eq!(
            lines.next().unwrap(),
            "JV-0001,'01/10/2023,6-1005,Beban Administrasi Bank,15000,0,Pembayaran atas Biaya Admin Bank,,IDR,"
        );
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(&BigDecimal::from(25_000_000)), "Rp 25.000.000");
        assert_eq!(format_rupiah(&BigDecimal::from(450)), "Rp 450");
        assert_eq!(format_rupiah(&BigDecimal::from_str("1000000.40").unwrap()), "Rp 1.000.000");
        assert_eq!(format_rupiah(&BigDecimal::from(-1500)), "-Rp 1.500");
    }
}
