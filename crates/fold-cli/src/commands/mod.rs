pub mod analyze;
pub mod inspect;
pub mod predict;

use crate::cli::EXAMPLE_SEQUENCE;
use crate::error::{CliError, Result};
use foldcast::core::structure::confidence::ConfidenceBand;
use std::path::Path;

/// Resolves the sequence text from the three input affordances. File input
/// tolerates FASTA: header lines are dropped and the remaining lines are
/// concatenated.
pub(crate) fn resolve_sequence_input(
    sequence: Option<&str>,
    input: Option<&Path>,
    example: bool,
) -> Result<String> {
    if example {
        return Ok(EXAMPLE_SEQUENCE.to_string());
    }
    if let Some(seq) = sequence {
        return Ok(seq.to_string());
    }
    if let Some(path) = input {
        let content = std::fs::read_to_string(path)?;
        let seq: String = content
            .lines()
            .filter(|line| !line.starts_with('>'))
            .map(str::trim)
            .collect();
        return Ok(seq);
    }
    Err(CliError::Argument(
        "provide a sequence, --input FILE, or --example".to_string(),
    ))
}

pub(crate) fn print_confidence_legend() {
    println!();
    println!("pLDDT bands");
    println!("  90-100  {}", ConfidenceBand::VeryHigh.label());
    println!("  70-90   {}", ConfidenceBand::Good.label());
    println!("  50-70   {}", ConfidenceBand::Low.label());
    println!("  0-50    {}", ConfidenceBand::VeryUncertain.label());
}
