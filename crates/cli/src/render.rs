//! Console formatting of records and totals.

use std::io::{self, Write};

use stockledger_inventory::{Ledger, Record, Totals};

const RULE: &str = "-------------------------------------------";

pub fn record<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "ID: {}", record.id)?;
    writeln!(out, "Name: {}", record.name)?;
    writeln!(out, "Category: {}", record.category)?;
    writeln!(out, "Price: Rs. {}", record.unit_price)?;
    writeln!(out, "Quantity: {}", record.quantity)?;
    writeln!(out, "Margin: {}%", record.margin_percent)?;
    writeln!(out, "{RULE}")
}

pub fn totals<W: Write>(out: &mut W, totals: Totals) -> io::Result<()> {
    writeln!(out, "Total Inventory Value: Rs. {}", totals.value)?;
    writeln!(out, "Estimated Profit: Rs. {}", totals.profit)
}

/// Every record in id order, then the totals.
pub fn listing<W: Write>(out: &mut W, ledger: &Ledger) -> io::Result<()> {
    if ledger.is_empty() {
        writeln!(out, "No products in inventory.")?;
    }
    for entry in ledger {
        record(out, entry)?;
    }
    totals(out, ledger.totals())
}
