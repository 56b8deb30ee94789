//! Dice notation parser
//!
//! Accepts `NdM` with an optional single modifier clause: `2d6`, `1d20+5`,
//! `4D6-2`. Both the count and the die type are required.

use crate::domain::model::{RollRequest, MAX_DICE, MAX_SIDES};
use crate::utils::error::{DiceRollerError, Result};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static NOTATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)[dD]([0-9]+)(?:([-+*/])([0-9]+))?$").unwrap());

/// Parse a dice notation string like "2d6+1".
///
/// `*K` and `/K` are accepted but only ever offset the sum by `K`, the same
/// as `+K`.
pub fn parse(notation: &str) -> Result<RollRequest> {
    let notation = notation.trim();
    if notation.is_empty() {
        return Err(DiceRollerError::EmptyNotation);
    }

    let invalid = || DiceRollerError::InvalidNotation {
        notation: notation.to_string(),
    };

    let caps = NOTATION_REGEX.captures(notation).ok_or_else(invalid)?;

    // Groups are ASCII digit runs, so a failed parse can only mean overflow.
    let count_str = &caps[1];
    let dice_count = count_str
        .parse::<u32>()
        .ok()
        .filter(|count| *count <= MAX_DICE)
        .ok_or_else(|| DiceRollerError::TooManyDice {
            count: count_str.to_string(),
        })?;

    let sides_str = &caps[2];
    let die_type = sides_str
        .parse::<u32>()
        .ok()
        .filter(|sides| *sides <= MAX_SIDES)
        .ok_or_else(|| DiceRollerError::DieTooLarge {
            sides: sides_str.to_string(),
        })?;

    if dice_count == 0 || die_type == 0 {
        return Err(invalid());
    }

    let modifier = match (caps.get(3), caps.get(4)) {
        (Some(op), Some(value)) => {
            // Parse the sign with the digits so i32::MIN is reachable.
            let signed = if op.as_str() == "-" {
                format!("-{}", value.as_str())
            } else {
                value.as_str().to_string()
            };
            signed.parse::<i32>().map_err(|_| invalid())?
        }
        _ => 0,
    };

    let request = RollRequest::new(dice_count, die_type, modifier);
    tracing::debug!(%request, "parsed dice notation");
    Ok(request)
}

impl FromStr for RollRequest {
    type Err = DiceRollerError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
