use chrono::SecondsFormat;
use serde::Serialize;
use std::io::Write;

use crate::domain::types::TransactionKind;
use crate::domain::Statement;

const HEADER: [&str; 4] = ["timestamp", "type", "amount", "balance"];

/// One printed statement row; `balance` is the running balance after the
/// transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementLine {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: String,
    pub balance: String,
}

impl StatementLine {
    pub fn from_statement(statement: &Statement) -> Vec<StatementLine> {
        let mut balance = statement.opening_balance();
        statement
            .iter()
            .map(|tx| {
                balance += tx.signed_amount();
                StatementLine {
                    timestamp: tx.timestamp().to_rfc3339_opts(SecondsFormat::Secs, true),
                    kind: tx.kind(),
                    amount: tx.amount().to_string(),
                    balance: balance.to_string(),
                }
            })
            .collect()
    }
}

pub fn write_statement<W: Write>(writer: W, statement: &Statement) -> csv::Result<()> {
    write_lines(writer, StatementLine::from_statement(statement))
}

pub fn write_lines<W: Write>(
    writer: W,
    lines: impl IntoIterator<Item = StatementLine>,
) -> csv::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for line in lines {
        csv_writer.serialize(line)?;
    }
    csv_writer.flush()?;
    Ok(())
}
