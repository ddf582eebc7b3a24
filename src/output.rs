use color_eyre::eyre::Result;
use contract_registry::contract::id::short_id;
use contract_registry::numbering::NumberingReport;
use contract_registry::Contract;
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

/// Writes command results to stdout, either human-readable or as JSON.
pub struct Output {
    json: bool,
}

impl Output {
    #[must_use]
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn number(&self, number: u32) -> Result<()> {
        if self.json {
            return write_json(&number);
        }
        writeln!(io::stdout().lock(), "{number}")?;
        Ok(())
    }

    pub fn contract(&self, contract: &Contract) -> Result<()> {
        if self.json {
            return write_json(contract);
        }
        let mut out = io::stdout().lock();
        writeln!(out, "{}", summary(contract))?;
        let fm = &contract.frontmatter;
        for (label, party) in [("Party A", &fm.party_a), ("Party B", &fm.party_b)] {
            if party.is_empty() {
                continue;
            }
            writeln!(
                out,
                "{label}: {} / {} / signed by {}{}",
                party.co_contractor.as_deref().unwrap_or("-"),
                party.contract_person.as_deref().unwrap_or("-"),
                party.signer.as_deref().unwrap_or("-"),
                party
                    .signing_date
                    .map(|d| format!(" on {d}"))
                    .unwrap_or_default(),
            )?;
        }
        if let Some(filing) = &fm.filing {
            writeln!(out, "Filed: {filing}")?;
        }
        if !contract.body.trim().is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", contract.body.trim_end())?;
        }
        Ok(())
    }

    pub fn contracts(&self, contracts: &[Contract]) -> Result<()> {
        if self.json {
            return write_json(contracts);
        }
        let mut out = io::stdout().lock();
        for contract in contracts {
            writeln!(out, "{}", summary(contract))?;
        }
        Ok(())
    }

    pub fn values<T: Serialize + Display>(&self, values: &[T]) -> Result<()> {
        if self.json {
            return write_json(values);
        }
        let mut out = io::stdout().lock();
        for value in values {
            writeln!(out, "{value}")?;
        }
        Ok(())
    }

    pub fn report(&self, report: &NumberingReport) -> Result<()> {
        if self.json {
            return write_json(report);
        }
        let mut out = io::stdout().lock();
        match report.max_number {
            Some(max) => writeln!(
                out,
                "{} numbered contracts, {}..={max}",
                report.numbered, report.start_number
            )?,
            None => writeln!(out, "No numbered contracts")?,
        }
        for duplicate in &report.duplicates {
            writeln!(
                out,
                "Duplicate number {}: {}",
                duplicate.number,
                duplicate.ids.join(", ")
            )?;
        }
        for gap in &report.gaps {
            writeln!(out, "Missing numbers {}..={}", gap.from, gap.to)?;
        }
        for number in &report.below_start {
            writeln!(out, "Number {number} is below the start number")?;
        }
        for id in &report.unnumbered {
            writeln!(out, "Contract {id} has no number")?;
        }
        for id in &report.unreadable {
            writeln!(out, "Contract {id} could not be read")?;
        }
        Ok(())
    }
}

fn summary(contract: &Contract) -> String {
    let fm = &contract.frontmatter;
    format!(
        "{:>6}  {:<10}  {:<11}  {:<8}  {}  ({})",
        fm.number.map(|n| n.to_string()).unwrap_or_default(),
        fm.date.map(|d| d.to_string()).unwrap_or_default(),
        fm.status.as_deref().unwrap_or_default(),
        fm.contract_type.as_deref().unwrap_or_default(),
        contract.title,
        short_id(contract.id.as_deref().unwrap_or_default()),
    )
}

fn write_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
