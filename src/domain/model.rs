use serde::Serialize;
use std::fmt;

/// Most dice a single request may roll.
pub const MAX_DICE: u32 = 1000;
/// Most faces a single die may have.
pub const MAX_SIDES: u32 = 1000;

/// A parsed `NdM[op K]` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRequest {
    pub dice_count: u32,
    pub die_type: u32,
    pub modifier: i32,
}

impl RollRequest {
    pub fn new(dice_count: u32, die_type: u32, modifier: i32) -> Self {
        Self {
            dice_count,
            die_type,
            modifier,
        }
    }

    /// Lowest possible total
    pub fn min(&self) -> i64 {
        i64::from(self.dice_count) + i64::from(self.modifier)
    }

    /// Highest possible total
    pub fn max(&self) -> i64 {
        i64::from(self.dice_count) * i64::from(self.die_type) + i64::from(self.modifier)
    }
}

impl fmt::Display for RollRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier > 0 {
            write!(f, "{}d{}+{}", self.dice_count, self.die_type, self.modifier)
        } else if self.modifier < 0 {
            write!(f, "{}d{}{}", self.dice_count, self.die_type, self.modifier)
        } else {
            write!(f, "{}d{}", self.dice_count, self.die_type)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    pub request: RollRequest,
    /// Individual dice, ascending.
    pub rolls: Vec<u32>,
    pub total: i64,
}

/// The user-facing result of a roll, ready for a transport to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedResponse {
    pub headline: String,
    pub dice_field: String,
    pub sum_field: String,
    pub summary: String,
}

impl fmt::Display for FormattedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline)?;
        write!(f, "{}", self.summary)
    }
}

/// What the core hands back to a transport: either a formatted roll or a
/// plain message explaining why the notation was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollReply {
    Rolled(FormattedResponse),
    Rejected(String),
}
