use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use fivesome_core::player::{PlayerId, Roster};
use fivesome_core::rules::GameRules;

use crate::error::EngineError;
use crate::ledger::ScoreLedger;
use crate::navigator::HolePhase;
use crate::roster::{TeamAssignment, validate};
use crate::stake::StakeController;

/// What a finalized hole contributed, kept so rewinding it is exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleRecord {
    pub hole: usize,
    pub deltas: BTreeMap<PlayerId, i32>,
    /// Multiplier the deltas were scaled by.
    pub multiplier: u32,
    /// Stake state before the doubling decision, if it was taken on this hole.
    pub stake_before: Option<StakeController>,
}

/// One five-player round: roster, per-hole teams and scores, running points.
///
/// Mutated only through the transitions in [`crate::navigator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) players: Roster,
    pub(crate) rules: GameRules,
    pub(crate) current_hole: usize,
    pub(crate) phase: HolePhase,
    pub(crate) teams_by_hole: BTreeMap<usize, TeamAssignment>,
    pub(crate) scores: ScoreLedger,
    pub(crate) points_by_player: BTreeMap<PlayerId, i32>,
    pub(crate) stake: StakeController,
    pub(crate) history: Vec<HoleRecord>,
}

impl Game {
    pub fn new(players: Roster, rules: GameRules) -> Result<Self, EngineError> {
        rules.validate()?;
        let points_by_player = players.iter().map(|p| (p.clone(), 0)).collect();
        Ok(Self {
            players,
            rules,
            current_hole: 0,
            phase: HolePhase::AwaitingRoster,
            teams_by_hole: BTreeMap::new(),
            scores: ScoreLedger::new(),
            points_by_player,
            stake: StakeController::new(),
            history: Vec::new(),
        })
    }

    /// Build the roster from raw names and start a game.
    pub fn from_names<I, S>(names: I, rules: GameRules) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Roster::new(names)?, rules)
    }

    pub fn players(&self) -> &Roster {
        &self.players
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// 0-based index of the hole being played, or `hole_count` once finished.
    pub fn current_hole(&self) -> usize {
        self.current_hole
    }

    pub fn hole_count(&self) -> usize {
        self.rules.hole_count
    }

    pub fn doubling_hole(&self) -> usize {
        self.rules.doubling_hole
    }

    pub fn phase(&self) -> HolePhase {
        self.phase
    }

    pub fn points(&self) -> &BTreeMap<PlayerId, i32> {
        &self.points_by_player
    }

    pub fn points_for(&self, player: &str) -> Option<i32> {
        self.points_by_player.get(player).copied()
    }

    pub fn multiplier(&self) -> u32 {
        self.stake.multiplier()
    }

    pub fn stake(&self) -> &StakeController {
        &self.stake
    }

    pub fn teams_for(&self, hole: usize) -> Option<&TeamAssignment> {
        self.teams_by_hole.get(&hole)
    }

    pub fn score(&self, player: &str, hole: usize) -> Option<i32> {
        self.scores.raw_score(player, hole)
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.scores
    }

    pub fn history(&self) -> &[HoleRecord] {
        &self.history
    }

    /// Whether the doubling prompt will be asked when the current hole is
    /// finalized. The current hole is still scored at the existing stake; an
    /// accepted offer only applies to the holes after it.
    pub fn doubling_offer_pending(&self) -> bool {
        !self.phase.is_terminal()
            && self
                .stake
                .should_offer(self.current_hole, self.rules.doubling_hole)
    }

    pub fn is_finished(&self) -> bool {
        self.phase == HolePhase::Finished
    }

    pub fn is_abandoned(&self) -> bool {
        self.phase == HolePhase::Abandoned
    }

    /// Players by points, highest first. Ties keep roster order.
    pub fn standings(&self) -> Vec<(PlayerId, i32)> {
        let mut table: Vec<(PlayerId, i32)> = self
            .players
            .iter()
            .map(|p| (p.clone(), self.points_for(p).unwrap_or_default()))
            .collect();
        table.sort_by(|a, b| b.1.cmp(&a.1));
        table
    }

    /// Encode the whole aggregate as MessagePack.
    pub fn serialize_state(&self) -> Result<Vec<u8>, EngineError> {
        rmp_serde::to_vec(self).map_err(|e| EngineError::Snapshot(e.to_string()))
    }

    /// Decode a snapshot written by [`Game::serialize_state`].
    ///
    /// Rules and stored team assignments are re-validated against the roster,
    /// and the undo history must account for every finalized hole and every
    /// point, so rewinding a restored game stays exact.
    pub fn from_state(data: &[u8]) -> Result<Self, EngineError> {
        let game: Game =
            rmp_serde::from_slice(data).map_err(|e| EngineError::Snapshot(e.to_string()))?;
        game.rules.validate()?;
        for assignment in game.teams_by_hole.values() {
            validate(
                assignment.left(),
                assignment.right(),
                std::slice::from_ref(assignment.center()),
                &game.players,
            )?;
        }
        game.check_consistency().map_err(EngineError::Snapshot)?;
        Ok(game)
    }

    fn check_consistency(&self) -> Result<(), String> {
        let hole_count = self.rules.hole_count;
        if self.current_hole > hole_count {
            return Err(format!(
                "current hole {} is past the last hole",
                self.current_hole
            ));
        }

        let phase_fits = match self.phase {
            HolePhase::Finished => self.current_hole == hole_count,
            HolePhase::Abandoned => self.current_hole == 0,
            HolePhase::AwaitingRoster => self.current_hole < hole_count,
            HolePhase::AwaitingScores | HolePhase::HoleComplete => {
                self.current_hole < hole_count
                    && self.teams_by_hole.contains_key(&self.current_hole)
            },
        };
        if !phase_fits {
            return Err(format!(
                "phase {} does not fit hole {}",
                self.phase, self.current_hole
            ));
        }

        if self.history.len() != self.current_hole {
            return Err(format!(
                "history has {} holes but {} were finalized",
                self.history.len(),
                self.current_hole
            ));
        }

        let mut expected: BTreeMap<PlayerId, i32> =
            self.players.iter().map(|p| (p.clone(), 0)).collect();
        let mut decisions = 0;
        for (index, record) in self.history.iter().enumerate() {
            if record.hole != index {
                return Err(format!("history entry {index} is for hole {}", record.hole));
            }
            if record.stake_before.is_some() {
                if record.hole != self.rules.doubling_hole {
                    return Err(format!(
                        "stake decision recorded on hole {}",
                        record.hole
                    ));
                }
                decisions += 1;
            }
            for (player, delta) in &record.deltas {
                let total = expected
                    .get_mut(player)
                    .ok_or_else(|| format!("history names unknown player {player}"))?;
                *total = total
                    .checked_add(*delta)
                    .ok_or_else(|| format!("points for {player} overflow"))?;
            }
        }
        if expected != self.points_by_player {
            return Err("points do not match the hole history".to_string());
        }
        if self.stake.offered() != (decisions == 1) {
            return Err("doubling offer state does not match the hole history".to_string());
        }

        Ok(())
    }
}
