use crate::core::{engine, formatter, notation};
use crate::domain::model::RollReply;
use crate::domain::ports::DieSource;
use crate::utils::error::DiceRollerError;

/// Turn a rejected notation into the plain message shown to the user.
pub fn to_reply(error: &DiceRollerError) -> RollReply {
    RollReply::Rejected(error.to_string())
}

/// Runs parse, roll and format for one command.
///
/// Holds no state, so one instance can serve any number of requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiceRoller;

impl DiceRoller {
    pub fn new() -> Self {
        Self
    }

    /// Roll using the calling thread's random generator.
    pub fn handle(&self, actor: &str, notation: &str) -> RollReply {
        self.handle_with(actor, notation, &mut rand::rng())
    }

    pub fn handle_with<S: DieSource + ?Sized>(
        &self,
        actor: &str,
        notation: &str,
        source: &mut S,
    ) -> RollReply {
        let request = match notation::parse(notation) {
            Ok(request) => request,
            Err(e) => {
                tracing::info!("Rejected notation from {}: {}", actor, e);
                return to_reply(&e);
            }
        };

        let outcome = engine::roll(&request, source);
        tracing::info!(
            "{} rolled {} for a total of {}",
            actor,
            request,
            outcome.total
        );

        RollReply::Rolled(formatter::format(&outcome, actor, notation.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_handle_rolls() {
        let mut rng = StdRng::seed_from_u64(9);
        match DiceRoller::new().handle_with("alice", " 2d6+1 ", &mut rng) {
            RollReply::Rolled(response) => {
                assert_eq!(response.headline, "alice is rolling 2d6+1");
                let total: i64 = response.sum_field.parse().unwrap();
                assert!((3..=13).contains(&total));
            }
            RollReply::Rejected(message) => panic!("unexpected rejection: {}", message),
        }
    }

    #[test]
    fn test_handle_rejects_with_message() {
        let reply = DiceRoller::new().handle("alice", "abc");
        assert_eq!(
            reply,
            RollReply::Rejected(
                "No correct dice roller notation found in 'abc', use '/roll 2d6+1' or similar syntax"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_to_reply_uses_display_text() {
        let reply = to_reply(&DiceRollerError::TooManyDice {
            count: "5000".to_string(),
        });
        assert_eq!(
            reply,
            RollReply::Rejected("You may only roll a maximum of 1000 dice at a time".to_string())
        );
    }
}
