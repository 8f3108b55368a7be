use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// Unique identifier for a player within a game: the name they entered.
pub type PlayerId = String;

/// Every game is played by exactly this many players.
pub const PLAYER_COUNT: usize = 5;

/// The fixed, ordered set of players in a game.
///
/// Names are trimmed on entry. Roster order is the order scores are listed
/// and validated in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PlayerId>", into = "Vec<PlayerId>")]
pub struct Roster {
    players: Vec<PlayerId>,
}

impl Roster {
    pub fn new<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let players: Vec<PlayerId> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .collect();

        if players.len() != PLAYER_COUNT {
            return Err(RosterError::PlayerCount {
                expected: PLAYER_COUNT,
                actual: players.len(),
            });
        }

        let mut seen = HashSet::with_capacity(PLAYER_COUNT);
        for name in &players {
            if name.is_empty() {
                return Err(RosterError::EmptyName);
            }
            if !seen.insert(name.as_str()) {
                return Err(RosterError::DuplicatePlayer {
                    player: name.clone(),
                });
            }
        }

        Ok(Self { players })
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn contains(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlayerId> {
        self.players.iter()
    }

    /// Position of a player in roster order.
    pub fn position(&self, player: &str) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }
}

impl TryFrom<Vec<PlayerId>> for Roster {
    type Error = RosterError;

    fn try_from(names: Vec<PlayerId>) -> Result<Self, Self::Error> {
        Roster::new(names)
    }
}

impl From<Roster> for Vec<PlayerId> {
    fn from(roster: Roster) -> Self {
        roster.players
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a PlayerId;
    type IntoIter = std::slice::Iter<'a, PlayerId>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_five_unique_names() {
        let roster = Roster::new(["A", "B", "C", "D", "E"]).unwrap();
        assert_eq!(roster.players().len(), PLAYER_COUNT);
        assert!(roster.contains("C"));
        assert_eq!(roster.position("E"), Some(4));
    }

    #[test]
    fn trims_names() {
        let roster = Roster::new([" Ann ", "Bo", "Cy", "Di", "Ed"]).unwrap();
        assert_eq!(roster.players()[0], "Ann");
    }

    #[test]
    fn rejects_wrong_count() {
        let err = Roster::new(["A", "B", "C", "D"]).unwrap_err();
        assert_eq!(
            err,
            RosterError::PlayerCount {
                expected: 5,
                actual: 4
            }
        );
    }

    #[test]
    fn rejects_duplicates_after_trim() {
        let err = Roster::new(["A", "B", "C", "D", " A"]).unwrap_err();
        assert_eq!(
            err,
            RosterError::DuplicatePlayer {
                player: "A".to_string()
            }
        );
    }

    #[test]
    fn rejects_blank_names() {
        let err = Roster::new(["A", "B", "  ", "D", "E"]).unwrap_err();
        assert_eq!(err, RosterError::EmptyName);
    }
}
