pub mod error;
pub mod player;
pub mod rules;
pub mod team;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::player::{PlayerId, Roster};
    use crate::rules::GameRules;

    /// Names used by every test roster, in roster order.
    pub const NAMES: [&str; 5] = ["A", "B", "C", "D", "E"];

    /// Roster of players "A" through "E".
    pub fn make_roster() -> Roster {
        Roster::new(NAMES).expect("test roster must be valid")
    }

    /// Owned player id for a test name.
    pub fn pid(name: &str) -> PlayerId {
        name.to_string()
    }

    /// Standard 18-hole rules with the doubling offer on hole index 14.
    pub fn default_rules() -> GameRules {
        GameRules::default()
    }

    /// Rules for a shortened round, useful for walking a whole game quickly.
    pub fn short_rules(hole_count: usize, doubling_hole: usize) -> GameRules {
        GameRules {
            hole_count,
            doubling_hole,
            ..GameRules::default()
        }
    }

    /// Split of the test roster used across scenarios: A+B vs C+D, E alone.
    pub fn standard_split() -> ([&'static str; 2], [&'static str; 2], [&'static str; 1]) {
        (["A", "B"], ["C", "D"], ["E"])
    }
}
