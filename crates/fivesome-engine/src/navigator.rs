//! Hole-by-hole transitions on [`Game`].
//!
//! Each hole moves `AwaitingRoster -> AwaitingScores -> HoleComplete` and is
//! then finalized, which banks its points and moves to the next hole.
//! `go_back` rewinds one hole, or abandons the game from the first hole.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use fivesome_core::error::RosterError;
use fivesome_core::player::PlayerId;

use crate::error::EngineError;
use crate::game::{Game, HoleRecord};
use crate::points::{SideMatchRule, compute_points};
use crate::roster::validate;
use crate::stake::DoublingPrompt;

/// Where the current hole is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HolePhase {
    /// No valid team split yet for the current hole.
    AwaitingRoster,
    /// Teams set, scores still being entered.
    AwaitingScores,
    /// Teams and scores validated, ready to finalize.
    HoleComplete,
    /// Every hole has been finalized.
    Finished,
    /// Rewound past the first hole.
    Abandoned,
}

impl HolePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, HolePhase::Finished | HolePhase::Abandoned)
    }
}

impl fmt::Display for HolePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HolePhase::AwaitingRoster => "awaiting roster",
            HolePhase::AwaitingScores => "awaiting scores",
            HolePhase::HoleComplete => "hole complete",
            HolePhase::Finished => "finished",
            HolePhase::Abandoned => "abandoned",
        };
        f.write_str(s)
    }
}

/// Result of a finalized hole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoleOutcome {
    pub hole: usize,
    pub deltas: HashMap<PlayerId, i32>,
    /// Multiplier applied to this hole's deltas.
    pub multiplier: u32,
    /// Multiplier for the holes that follow.
    pub next_multiplier: u32,
    pub doubled: bool,
}

/// Result of `go_back`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Now replaying `hole`, with its previous teams, scores and points removed.
    Rewound { hole: usize },
    /// Went back from the first hole; the game is over and should be discarded.
    Abandoned,
}

impl Game {
    fn expect_phase(
        &self,
        operation: &'static str,
        allowed: &[HolePhase],
    ) -> Result<(), EngineError> {
        if allowed.contains(&self.phase) {
            return Ok(());
        }
        tracing::error!(
            operation,
            phase = %self.phase,
            hole = self.current_hole,
            "Invalid hole transition"
        );
        Err(EngineError::InvalidTransition {
            operation,
            phase: self.phase,
        })
    }

    /// Set the teams for the current hole.
    pub fn submit_roster<S: AsRef<str>>(
        &mut self,
        left: &[S],
        right: &[S],
        center: &[S],
    ) -> Result<(), EngineError> {
        self.expect_phase("submit_roster", &[HolePhase::AwaitingRoster])?;
        let assignment = validate(left, right, center, &self.players)?;
        tracing::debug!(
            hole = self.current_hole,
            center = %assignment.center(),
            "Teams set"
        );
        self.teams_by_hole.insert(self.current_hole, assignment);
        self.phase = HolePhase::AwaitingScores;
        Ok(())
    }

    /// Record a raw score for the current hole. Re-entry overwrites.
    pub fn record_score(&mut self, player: &str, value: i32) -> Result<(), EngineError> {
        self.check_score_entry("record_score", player)?;
        self.scores.record_raw_score(player, self.current_hole, value);
        tracing::debug!(hole = self.current_hole, player, value, "Score entered");
        self.reopen_scores();
        Ok(())
    }

    /// Record a score typed as text. Blank text clears the slot.
    pub fn record_score_text(&mut self, player: &str, text: &str) -> Result<(), EngineError> {
        self.check_score_entry("record_score_text", player)?;
        self.scores.record_raw_text(player, self.current_hole, text)?;
        tracing::debug!(hole = self.current_hole, player, text, "Score entered");
        self.reopen_scores();
        Ok(())
    }

    fn check_score_entry(&self, operation: &'static str, player: &str) -> Result<(), EngineError> {
        self.expect_phase(
            operation,
            &[
                HolePhase::AwaitingRoster,
                HolePhase::AwaitingScores,
                HolePhase::HoleComplete,
            ],
        )?;
        if !self.players.contains(player) {
            return Err(RosterError::UnknownPlayer {
                player: player.to_string(),
            }
            .into());
        }
        Ok(())
    }

    // Editing a validated hole sends it back for another check.
    fn reopen_scores(&mut self) {
        if self.phase == HolePhase::HoleComplete {
            self.phase = HolePhase::AwaitingScores;
        }
    }

    /// Check that every player has a positive score for the current hole.
    pub fn submit_scores(&mut self) -> Result<(), EngineError> {
        self.expect_phase("submit_scores", &[HolePhase::AwaitingScores])?;
        self.scores
            .validate_hole(self.current_hole, self.players.players())?;
        self.phase = HolePhase::HoleComplete;
        Ok(())
    }

    /// Bank the current hole's points and move to the next hole.
    ///
    /// On the doubling hole `prompt` is asked whether to double the stakes
    /// for the remaining holes.
    pub fn finalize_hole<P: DoublingPrompt + ?Sized>(
        &mut self,
        prompt: &mut P,
    ) -> Result<HoleOutcome, EngineError> {
        self.expect_phase("finalize_hole", &[HolePhase::HoleComplete])?;
        let hole = self.current_hole;
        let assignment = self
            .teams_by_hole
            .get(&hole)
            .ok_or(EngineError::InvalidTransition {
                operation: "finalize_hole",
                phase: self.phase,
            })?;

        let multiplier = self.stake.multiplier();
        let rule = SideMatchRule::from(&self.rules.points);
        let strokes = self.scores.scores_for(hole);
        let deltas = compute_points(&rule, assignment, &strokes, multiplier)?;
        for (player, delta) in &deltas {
            *self.points_by_player.entry(player.clone()).or_default() += delta;
        }

        let mut stake_before = None;
        if self.stake.should_offer(hole, self.rules.doubling_hole) {
            stake_before = Some(self.stake);
            let accepted = prompt.offer_doubling(hole);
            self.stake.maybe_double(hole, self.rules.doubling_hole, accepted);
        }
        let next_multiplier = self.stake.multiplier();

        self.history.push(HoleRecord {
            hole,
            deltas: deltas.iter().map(|(p, d)| (p.clone(), *d)).collect(),
            multiplier,
            stake_before,
        });
        self.current_hole += 1;
        self.phase = if self.current_hole == self.rules.hole_count {
            HolePhase::Finished
        } else {
            HolePhase::AwaitingRoster
        };

        tracing::info!(
            hole,
            multiplier,
            next_multiplier,
            finished = self.is_finished(),
            "Hole finalized"
        );

        Ok(HoleOutcome {
            hole,
            deltas,
            multiplier,
            next_multiplier,
            doubled: next_multiplier > multiplier,
        })
    }

    /// Step back one hole.
    ///
    /// Discards anything entered for the current hole, then reverses the
    /// previous hole's points and clears its teams and scores so it can be
    /// replayed. From the first hole the game is abandoned instead.
    pub fn go_back(&mut self) -> Result<Navigation, EngineError> {
        self.expect_phase(
            "go_back",
            &[
                HolePhase::AwaitingRoster,
                HolePhase::AwaitingScores,
                HolePhase::HoleComplete,
                HolePhase::Finished,
            ],
        )?;

        self.discard_hole(self.current_hole);

        if self.current_hole == 0 {
            self.phase = HolePhase::Abandoned;
            tracing::info!("Game abandoned");
            return Ok(Navigation::Abandoned);
        }

        self.current_hole -= 1;
        let hole = self.current_hole;
        if let Some(record) = self.history.pop() {
            debug_assert_eq!(record.hole, hole, "history out of step with current hole");
            for (player, delta) in &record.deltas {
                *self.points_by_player.entry(player.clone()).or_default() -= delta;
            }
            if let Some(earlier) = record.stake_before {
                self.stake.restore(earlier);
            }
        }
        self.discard_hole(hole);
        self.phase = HolePhase::AwaitingRoster;

        tracing::info!(hole, "Rewound to hole");
        Ok(Navigation::Rewound { hole })
    }

    fn discard_hole(&mut self, hole: usize) {
        self.teams_by_hole.remove(&hole);
        self.scores.clear_hole(hole);
    }
}
