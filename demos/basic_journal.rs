//! Basic statement-to-journal example
//!
//! Parses the bundled sample statement against the default chart of
//! accounts, prints each journal entry and the spreadsheet export.

use sijo_core::{
    default_chart_of_accounts, export, parse_transactions_with_stats, JournalBuilder,
    SAMPLE_TRANSACTIONS,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== SiJO Core Example ===\n");

    let coa = default_chart_of_accounts();
    let (transactions, stats) = parse_transactions_with_stats(SAMPLE_TRANSACTIONS);
    println!(
        "Parsed {} transactions ({} lines dropped)\n",
        transactions.len(),
        stats.lines_dropped
    );

    let report = JournalBuilder::default().build_with_report(&coa, &transactions);
    for (index, (entry, tier)) in report.entries.iter().zip(&report.tiers).enumerate() {
        println!(
            "{} {} {} [{:?}]",
            export::transaction_number(index),
            entry.date,
            entry.narration,
            tier
        );
        for line in &entry.lines {
            println!(
                "    {:<8} {:<28} D {:>16}  C {:>16}",
                line.account_code,
                line.account_name,
                export::format_rupiah(&line.debit),
                export::format_rupiah(&line.credit)
            );
        }
    }

    println!("\n=== CSV Export ===\n");
    export::write_csv(&report.entries, std::io::stdout())?;

    Ok(())
}
