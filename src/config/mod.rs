pub mod slack;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// Actor name used when the CLI has no caller identity.
pub const DEFAULT_ACTOR: &str = "Someone";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dice-roller")]
#[command(about = "Roll dice from notation like 2d6+1")]
pub struct CliConfig {
    /// Dice notation, e.g. 2d6+1
    pub notation: String,

    #[arg(long, default_value = DEFAULT_ACTOR)]
    pub actor: String,

    #[arg(long, help = "Seed the random generator for reproducible rolls")]
    pub seed: Option<u64>,

    #[arg(long, help = "Print the Slack response payload as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("actor", &self.actor)?;
        tracing::debug!("CLI configuration validation passed");
        Ok(())
    }
}
