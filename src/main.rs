use std::fs::File;
use std::io::{self, BufReader};
use std::process;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use clap::Parser;

use bank_ledger::config::Config;
use bank_ledger::domain::{Account, Statement};
use bank_ledger::parser::CsvParser;
use bank_ledger::writer::write_statement;

fn main() {
    init_tracing();
    let config = Config::parse();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the statement CSV.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(config: &Config) -> Result<(), String> {
    let file = File::open(&config.input)
        .map_err(|e| format!("Failed to open '{}': {}", config.input.display(), e))?;
    let reader = BufReader::new(file);

    let parser = CsvParser::new(reader).map_err(|e| e.to_string())?;

    let mut account = Account::with_shared_clock(config.opening_balance, config.clock());
    for result in parser {
        match result {
            Ok(op) => {
                if let Err(e) = account.apply(op.kind, op.amount) {
                    warn!(line = op.line, kind = %op.kind, amount = %op.amount, "rejected: {}", e);
                }
            }
            Err(e) => warn!("skipped: {}", e),
        }
    }

    let (from, to) = config.statement_range();
    let statement = Statement::for_account(&account, from, to);

    let stdout = io::stdout();
    let handle = stdout.lock();
    write_statement(handle, &statement).map_err(|e| format!("Failed to write output: {}", e))?;

    Ok(())
}
