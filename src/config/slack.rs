use crate::core::CommandTokenProvider;
use crate::utils::error::{DiceRollerError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use std::env;

pub const TOKEN_ENV: &str = "SLACK_COMMAND_TOKEN";
pub const RESPONSE_TYPE_ENV: &str = "SLACK_RESPONSE_TYPE";

pub const IN_CHANNEL: &str = "in_channel";
pub const EPHEMERAL: &str = "ephemeral";

/// Settings for the slash command webhook. Built once at start-up and
/// handed to the handler; the token is expected to be decrypted already.
#[derive(Clone)]
pub struct SlackConfig {
    pub expected_token: String,
    pub response_type: String,
}

// Keep the token out of logs.
impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field("expected_token", &"<redacted>")
            .field("response_type", &self.response_type)
            .finish()
    }
}

impl SlackConfig {
    pub fn new(expected_token: impl Into<String>) -> Self {
        Self {
            expected_token: expected_token.into(),
            response_type: IN_CHANNEL.to_string(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self {
            expected_token: env::var(TOKEN_ENV).map_err(|_| DiceRollerError::ConfigError {
                message: format!("{} environment variable is required", TOKEN_ENV),
            })?,
            response_type: env::var(RESPONSE_TYPE_ENV).unwrap_or_else(|_| IN_CHANNEL.to_string()),
        })
    }
}

impl CommandTokenProvider for SlackConfig {
    fn expected_token(&self) -> &str {
        &self.expected_token
    }

    fn response_type(&self) -> &str {
        &self.response_type
    }
}

impl Validate for SlackConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("expected_token", &self.expected_token)?;
        validate_one_of("response_type", &self.response_type, &[IN_CHANNEL, EPHEMERAL])?;

        tracing::info!("Slack configuration validation passed");
        Ok(())
    }
}
