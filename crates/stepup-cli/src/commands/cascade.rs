//! Cascade command implementation.

use anyhow::Result;
use stepup::SequenceExt;
use stepup_config::StepupConfig;

pub fn run(config: &StepupConfig, values: &[String]) -> Result<()> {
    let mut sequence = super::resolve_sequence(config, values)?;
    sequence.cascade();

    super::print_sequence(config, &sequence);
    Ok(())
}
