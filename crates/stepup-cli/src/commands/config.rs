//! Configuration management commands.

use anyhow::{Result, bail};
use stepup_config::StepupConfig;

use crate::style::{print_header, print_labeled, print_spacer};

/// Show the resolved configuration.
pub fn show(config: &StepupConfig, format: &str) -> Result<()> {
    match format {
        "json" => {
            let json = serde_json::to_string_pretty(config)?;
            println!("{json}");
        }
        "toml" => {
            let toml_str = toml::to_string_pretty(config)?;
            println!("{toml_str}");
        }
        "text" => {
            print_header("stepup Configuration");
            print_spacer();

            println!("Sequence:");
            print_labeled("Default", &config.sequence.default.to_string());
            print_spacer();

            println!("Output:");
            print_labeled("Separator", &format!("{:?}", config.output.separator));
            print_spacer();

            println!("Logging:");
            print_labeled("Level", &config.logging.level);
        }
        other => bail!("Unknown format {other:?} (expected text, json or toml)"),
    }

    Ok(())
}
