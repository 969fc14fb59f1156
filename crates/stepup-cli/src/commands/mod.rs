//! CLI command implementations.

pub mod cascade;
pub mod config;
pub mod increment;
pub mod version;

use anyhow::{Context, Result};
use stepup_config::StepupConfig;
use stepup_types::Sequence;

/// Parses the positional values, falling back to the configured default.
///
/// Each argument may carry several comma or space separated integers.
fn resolve_sequence(config: &StepupConfig, values: &[String]) -> Result<Sequence> {
    if values.is_empty() {
        return Ok(config.sequence.default.clone());
    }

    let mut merged = Vec::new();
    for value in values {
        let parsed: Sequence = value
            .parse()
            .with_context(|| format!("Failed to parse sequence from {value:?}"))?;
        merged.extend(parsed.into_inner());
    }

    Ok(Sequence::from(merged))
}

fn print_sequence(config: &StepupConfig, sequence: &Sequence) {
    println!("{}", sequence.join(&config.output.separator));
}
