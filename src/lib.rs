pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::slack::{SlackReply, SlashCommandHandler};
pub use config::slack::SlackConfig;
pub use core::roller::DiceRoller;
pub use domain::model::{FormattedResponse, RollOutcome, RollReply, RollRequest};
pub use utils::error::{DiceRollerError, Result};
