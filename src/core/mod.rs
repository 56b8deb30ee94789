pub mod engine;
pub mod formatter;
pub mod notation;
pub mod roller;

pub use crate::domain::model::{FormattedResponse, RollOutcome, RollReply, RollRequest};
pub use crate::domain::ports::{CommandTokenProvider, DieSource};
pub use crate::utils::error::Result;
