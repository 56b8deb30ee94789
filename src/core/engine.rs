use crate::domain::model::{RollOutcome, RollRequest};
use crate::domain::ports::DieSource;

/// Roll every die in `request` and total them with the modifier.
///
/// The returned rolls are sorted ascending.
pub fn roll<S: DieSource + ?Sized>(request: &RollRequest, source: &mut S) -> RollOutcome {
    let mut rolls: Vec<u32> = (0..request.dice_count)
        .map(|_| source.roll_die(request.die_type))
        .collect();
    rolls.sort_unstable();

    let sum: i64 = rolls.iter().map(|&die| i64::from(die)).sum();
    let total = sum + i64::from(request.modifier);

    tracing::debug!(%request, ?rolls, total, "rolled dice");

    RollOutcome {
        request: *request,
        rolls,
        total,
    }
}
