use dice_roller::core::{engine, formatter, notation};
use dice_roller::domain::ports::DieSource;
use dice_roller::{DiceRoller, DiceRollerError, RollReply, RollRequest};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Replays a fixed list of faces, in order.
struct Replay(Vec<u32>);

impl DieSource for Replay {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let face = self.0.remove(0);
        assert!(face >= 1 && face <= sides, "scripted face {} out of 1..={}", face, sides);
        face
    }
}

#[test]
fn test_two_d_six_plus_one_end_to_end() {
    let request = notation::parse("2d6+1").unwrap();
    assert_eq!(request, RollRequest::new(2, 6, 1));

    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let outcome = engine::roll(&request, &mut rng);
        assert_eq!(outcome.rolls.len(), 2);
        assert!(outcome.rolls.iter().all(|die| (1..=6).contains(die)));
        assert_eq!(
            outcome.total,
            i64::from(outcome.rolls[0]) + i64::from(outcome.rolls[1]) + 1
        );
    }
}

#[test]
fn test_scripted_roll_is_sorted_and_annotated() {
    let request = notation::parse("5d6-2").unwrap();
    let outcome = engine::roll(&request, &mut Replay(vec![6, 3, 1, 4, 6]));
    assert_eq!(outcome.rolls, vec![1, 3, 4, 6, 6]);
    assert_eq!(outcome.total, 18);

    let response = formatter::format(&outcome, "alice", "5d6-2");
    assert_eq!(response.headline, "alice is rolling 5d6-2");
    assert_eq!(response.dice_field, "_1_, 3, 4, *6*, *6*");
    assert_eq!(response.sum_field, "18");
}

#[test]
fn test_one_d_one_always_rolls_one_with_max_marker() {
    let roller = DiceRoller::new();
    for _ in 0..10 {
        match roller.handle("bob", "1d1") {
            RollReply::Rolled(response) => {
                assert_eq!(response.dice_field, "*1*");
                assert_eq!(response.sum_field, "1");
            }
            RollReply::Rejected(message) => panic!("unexpected rejection: {}", message),
        }
    }
}

#[test]
fn test_rejections_carry_user_messages() {
    let roller = DiceRoller::new();

    let RollReply::Rejected(message) = roller.handle("carol", "") else {
        panic!("empty notation should be rejected");
    };
    assert!(message.contains("/roll 2d6+1"));

    let RollReply::Rejected(message) = roller.handle("carol", "abc") else {
        panic!("garbage notation should be rejected");
    };
    assert!(message.contains("abc"));

    let RollReply::Rejected(message) = roller.handle("carol", "1001d6") else {
        panic!("too many dice should be rejected");
    };
    assert_eq!(message, "You may only roll a maximum of 1000 dice at a time");

    // Full-width digits are not dice notation, however many there are
    let RollReply::Rejected(message) = roller.handle("carol", "\u{FF12}d6") else {
        panic!("non-ASCII digits should be rejected");
    };
    assert!(message.starts_with("No correct dice roller notation found in"));
}

#[test]
fn test_limits() {
    assert!(notation::parse("1000d1000").is_ok());
    assert!(matches!(
        notation::parse("1001d6"),
        Err(DiceRollerError::TooManyDice { .. })
    ));
    assert!(matches!(
        notation::parse("6d1001"),
        Err(DiceRollerError::DieTooLarge { .. })
    ));
}

#[test]
fn test_largest_roll_stays_in_bounds() {
    let request = notation::parse("1000d1000+7").unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let outcome = engine::roll(&request, &mut rng);

    assert_eq!(outcome.rolls.len(), 1000);
    assert!(outcome.rolls.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(outcome.total >= request.min() && outcome.total <= request.max());
}

#[test]
fn test_round_trip_through_display() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        use rand::Rng;
        let request = RollRequest::new(
            rng.random_range(1..=1000),
            rng.random_range(1..=1000),
            rng.random_range(-500..=500),
        );
        let reparsed = notation::parse(&request.to_string()).unwrap();
        assert_eq!(request, reparsed);
    }
}
