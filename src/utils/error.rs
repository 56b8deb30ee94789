use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiceRollerError {
    #[error("No dice roller notation provided, use '/roll 2d6+1' or similar syntax")]
    EmptyNotation,

    #[error("No correct dice roller notation found in '{notation}', use '/roll 2d6+1' or similar syntax")]
    InvalidNotation { notation: String },

    #[error("You may only roll a maximum of 1000 dice at a time")]
    TooManyDice { count: String },

    #[error("Dice may have at most 1000 sides, '{sides}' is too many")]
    DieTooLarge { sides: String },

    #[error("Request token does not match the configured command token")]
    Unauthorized,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad dice notation from the end user; shown to them verbatim.
    Input,
    Auth,
    Config,
    Internal,
}

impl DiceRollerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DiceRollerError::EmptyNotation
            | DiceRollerError::InvalidNotation { .. }
            | DiceRollerError::TooManyDice { .. }
            | DiceRollerError::DieTooLarge { .. } => ErrorCategory::Input,
            DiceRollerError::Unauthorized => ErrorCategory::Auth,
            DiceRollerError::ConfigError { .. }
            | DiceRollerError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            DiceRollerError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Use notation like 2d6, 1d20+5 or 3d8-2",
            ErrorCategory::Auth => "Check that SLACK_COMMAND_TOKEN matches the slash command token",
            ErrorCategory::Config => "Check the environment variables and command line arguments",
            ErrorCategory::Internal => "This is a bug, please report it",
        }
    }
}

pub type Result<T> = std::result::Result<T, DiceRollerError>;
