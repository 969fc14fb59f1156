//! Increment command implementation.

use anyhow::{Context, Result};
use stepup::SequenceExt;
use stepup_config::StepupConfig;
use stepup_types::StartIndex;

pub fn run(config: &StepupConfig, values: &[String], from: usize) -> Result<()> {
    let mut sequence = super::resolve_sequence(config, values)?;

    sequence
        .increment_from(StartIndex::new(from))
        .with_context(|| format!("Cannot increment from index {from}"))?;

    super::print_sequence(config, &sequence);
    Ok(())
}
