use crate::domain::model::{FormattedResponse, RollOutcome};

/// Render a single die, marking the extremes with Slack mrkdwn: `_1_` for the
/// lowest face and `*N*` for the highest. On a one-sided die the highest
/// marker wins.
fn annotate_die(value: u32, die_type: u32) -> String {
    if value == die_type {
        format!("*{}*", value)
    } else if value == 1 {
        format!("_{}_", value)
    } else {
        value.to_string()
    }
}

pub fn format(outcome: &RollOutcome, actor: &str, notation: &str) -> FormattedResponse {
    let die_type = outcome.request.die_type;
    let dice_field = outcome
        .rolls
        .iter()
        .map(|&die| annotate_die(die, die_type))
        .collect::<Vec<_>>()
        .join(", ");

    let plain_dice = outcome
        .rolls
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    FormattedResponse {
        headline: format!("{} is rolling {}", actor, notation),
        summary: format!(
            "For your convenience, I've rolled {}, the dice turning up [{}] for a sum of {}",
            notation, plain_dice, outcome.total
        ),
        dice_field,
        sum_field: outcome.total.to_string(),
    }
}
