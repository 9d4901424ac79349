//! Till CLI
//!
//! Loads a price fixture, scans the given items in order and prints the total.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use till::{checkout::Checkout, fixtures::Fixture};

#[derive(Debug, Parser)]
#[command(name = "till", about = "Checkout pricing calculator", long_about = None)]
struct Cli {
    /// YAML fixture holding prices and discounts
    #[arg(short, long, default_value = "fixtures/standard.yml")]
    fixture: PathBuf,

    /// Also print the undiscounted subtotal and the savings
    #[arg(short, long)]
    subtotal: bool,

    /// Items to scan, in order
    skus: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let fixture = Fixture::from_path(&cli.fixture)
        .with_context(|| format!("loading fixture {}", cli.fixture.display()))?;

    let mut till = fixture.till()?;

    till.scan_all(cli.skus.iter().map(String::as_str))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if cli.subtotal {
        writeln!(handle, "subtotal {}", till.subtotal()?)?;
        writeln!(handle, "savings {}", till.savings()?)?;
        writeln!(handle, "total {}", till.total_price()?)?;
    } else {
        writeln!(handle, "{}", till.total_price()?)?;
    }

    Ok(())
}
