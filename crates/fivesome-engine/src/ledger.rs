use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use fivesome_core::error::ScoreError;
use fivesome_core::player::PlayerId;

/// Raw stroke counts per hole and player.
///
/// Values are stored as entered, so a zero or negative number can sit in a
/// slot while the hole is in progress. Positivity is enforced when the hole
/// is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    holes: BTreeMap<usize, BTreeMap<PlayerId, i32>>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw score, replacing whatever was in the slot.
    pub fn record_raw_score(&mut self, player: &str, hole: usize, value: i32) {
        self.holes
            .entry(hole)
            .or_default()
            .insert(player.to_string(), value);
    }

    /// Store a score typed as text. Blank text clears the slot.
    pub fn record_raw_text(
        &mut self,
        player: &str,
        hole: usize,
        text: &str,
    ) -> Result<(), ScoreError> {
        let text = text.trim();
        if text.is_empty() {
            self.clear_slot(player, hole);
            return Ok(());
        }
        let value = text.parse::<i32>().map_err(|_| ScoreError::InvalidScore {
            player: player.to_string(),
            hole,
            value: None,
        })?;
        self.record_raw_score(player, hole, value);
        Ok(())
    }

    pub fn raw_score(&self, player: &str, hole: usize) -> Option<i32> {
        self.holes.get(&hole)?.get(player).copied()
    }

    /// True when every player has a strictly positive score for the hole.
    pub fn is_hole_complete(&self, hole: usize, players: &[PlayerId]) -> bool {
        self.validate_hole(hole, players).is_ok()
    }

    /// Fails on the first player, in the given order, whose score is missing
    /// or not positive.
    pub fn validate_hole(&self, hole: usize, players: &[PlayerId]) -> Result<(), ScoreError> {
        for player in players {
            match self.raw_score(player, hole) {
                Some(v) if v > 0 => {},
                value => {
                    return Err(ScoreError::InvalidScore {
                        player: player.clone(),
                        hole,
                        value,
                    });
                },
            }
        }
        Ok(())
    }

    /// Positive scores recorded for a hole.
    pub fn scores_for(&self, hole: usize) -> HashMap<PlayerId, u32> {
        self.holes
            .get(&hole)
            .map(|slots| {
                slots
                    .iter()
                    .filter(|&(_, &v)| v > 0)
                    .map(|(p, &v)| (p.clone(), v.unsigned_abs()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn clear_hole(&mut self, hole: usize) {
        self.holes.remove(&hole);
    }

    fn clear_slot(&mut self, player: &str, hole: usize) {
        if let Some(slots) = self.holes.get_mut(&hole) {
            slots.remove(player);
            if slots.is_empty() {
                self.holes.remove(&hole);
            }
        }
    }

    /// Holes with at least one recorded slot.
    pub fn holes(&self) -> impl Iterator<Item = usize> + '_ {
        self.holes.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivesome_core::test_helpers::make_roster;

    fn fill(ledger: &mut ScoreLedger, hole: usize, values: [i32; 5]) {
        for (name, v) in ["A", "B", "C", "D", "E"].into_iter().zip(values) {
            ledger.record_raw_score(name, hole, v);
        }
    }

    #[test]
    fn complete_when_all_positive() {
        let roster = make_roster();
        let mut ledger = ScoreLedger::new();
        fill(&mut ledger, 0, [4, 5, 4, 4, 3]);
        assert!(ledger.is_hole_complete(0, roster.players()));
        assert!(!ledger.is_hole_complete(1, roster.players()));
    }

    #[test]
    fn re_entry_overwrites() {
        let mut ledger = ScoreLedger::new();
        ledger.record_raw_score("A", 0, 7);
        ledger.record_raw_score("A", 0, 4);
        assert_eq!(ledger.raw_score("A", 0), Some(4));
    }

    #[test]
    fn zero_score_fails_validation() {
        let roster = make_roster();
        let mut ledger = ScoreLedger::new();
        fill(&mut ledger, 0, [4, 5, 0, 4, 3]);
        assert_eq!(
            ledger.validate_hole(0, roster.players()),
            Err(ScoreError::InvalidScore {
                player: "C".to_string(),
                hole: 0,
                value: Some(0)
            })
        );
    }

    #[test]
    fn missing_score_fails_validation() {
        let roster = make_roster();
        let mut ledger = ScoreLedger::new();
        ledger.record_raw_score("A", 2, 4);
        let err = ledger.validate_hole(2, roster.players()).unwrap_err();
        assert_eq!(
            err,
            ScoreError::InvalidScore {
                player: "B".to_string(),
                hole: 2,
                value: None
            }
        );
    }

    #[test]
    fn text_entry_parses_and_clears() {
        let mut ledger = ScoreLedger::new();
        ledger.record_raw_text("A", 0, " 5 ").unwrap();
        assert_eq!(ledger.raw_score("A", 0), Some(5));

        ledger.record_raw_text("A", 0, "").unwrap();
        assert_eq!(ledger.raw_score("A", 0), None);
        assert_eq!(ledger.holes().count(), 0);
    }

    #[test]
    fn text_entry_rejects_garbage() {
        let mut ledger = ScoreLedger::new();
        let err = ledger.record_raw_text("B", 3, "five").unwrap_err();
        assert_eq!(
            err,
            ScoreError::InvalidScore {
                player: "B".to_string(),
                hole: 3,
                value: None
            }
        );
        assert_eq!(ledger.raw_score("B", 3), None);
    }

    #[test]
    fn scores_for_skips_non_positive() {
        let mut ledger = ScoreLedger::new();
        fill(&mut ledger, 1, [4, -1, 0, 6, 3]);
        let scores = ledger.scores_for(1);
        assert_eq!(scores.len(), 3);
        assert_eq!(scores["D"], 6);
        assert!(!scores.contains_key("B"));
    }

    #[test]
    fn clear_hole_only_touches_that_hole() {
        let mut ledger = ScoreLedger::new();
        fill(&mut ledger, 0, [4, 5, 4, 4, 3]);
        fill(&mut ledger, 1, [4, 5, 4, 4, 3]);
        ledger.clear_hole(1);
        assert_eq!(ledger.raw_score("A", 0), Some(4));
        assert_eq!(ledger.raw_score("A", 1), None);
    }
}
