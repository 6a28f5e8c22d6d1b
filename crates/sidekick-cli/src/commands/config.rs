use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sidekick_core::config::SidekickConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the active configuration as TOML. Without `--config` this
/// is the full set of built-in defaults.
pub fn run(args: &ConfigArgs, config: &SidekickConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
