use rand::Rng;

/// Source of individual die faces.
///
/// Every `rand::Rng` is a die source; tests plug in scripted sources to make
/// rolls deterministic.
pub trait DieSource {
    /// Returns a value in `1..=sides`. `sides` is never zero.
    fn roll_die(&mut self, sides: u32) -> u32;
}

impl<R: Rng> DieSource for R {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides)
    }
}

pub trait CommandTokenProvider: Send + Sync {
    fn expected_token(&self) -> &str;
    fn response_type(&self) -> &str;
}
