use std::cmp::Ordering;
use std::collections::HashMap;

use fivesome_core::error::ScoreError;
use fivesome_core::player::PlayerId;
use fivesome_core::rules::PointValues;

use crate::roster::TeamAssignment;

/// Payout table for a single hole.
///
/// Implementations receive a score for every assigned player and must return
/// deltas that sum to zero. Scaling by the stake multiplier happens in
/// [`compute_points`].
pub trait PointsRule {
    fn hole_deltas(
        &self,
        assignment: &TeamAssignment,
        strokes: &HashMap<PlayerId, u32>,
    ) -> HashMap<PlayerId, i32>;
}

/// Left and Right play a pair match on summed strokes while Center plays
/// each of the other four individually. Lower strokes win; ties push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideMatchRule {
    pub team_points: i32,
    pub center_points: i32,
}

impl Default for SideMatchRule {
    fn default() -> Self {
        Self::from(&PointValues::default())
    }
}

impl From<&PointValues> for SideMatchRule {
    fn from(values: &PointValues) -> Self {
        Self {
            team_points: values.team_points,
            center_points: values.center_points,
        }
    }
}

impl PointsRule for SideMatchRule {
    fn hole_deltas(
        &self,
        assignment: &TeamAssignment,
        strokes: &HashMap<PlayerId, u32>,
    ) -> HashMap<PlayerId, i32> {
        let score = |p: &PlayerId| strokes.get(p).copied().unwrap_or_default();
        let mut deltas: HashMap<PlayerId, i32> =
            assignment.iter().map(|(_, p)| (p.clone(), 0)).collect();

        // Pair match
        let left_total: u32 = assignment.left().iter().map(score).sum();
        let right_total: u32 = assignment.right().iter().map(score).sum();
        let (winners, losers) = match left_total.cmp(&right_total) {
            Ordering::Less => (assignment.left(), assignment.right()),
            Ordering::Greater => (assignment.right(), assignment.left()),
            Ordering::Equal => (&[] as &[PlayerId], &[] as &[PlayerId]),
        };
        for p in winners {
            *deltas.entry(p.clone()).or_default() += self.team_points;
        }
        for p in losers {
            *deltas.entry(p.clone()).or_default() -= self.team_points;
        }

        // Center against the field
        let center = assignment.center();
        let center_score = score(center);
        for opponent in assignment.left().iter().chain(assignment.right()) {
            let swing = match center_score.cmp(&score(opponent)) {
                Ordering::Less => self.center_points,
                Ordering::Greater => -self.center_points,
                Ordering::Equal => 0,
            };
            *deltas.entry(center.clone()).or_default() += swing;
            *deltas.entry(opponent.clone()).or_default() -= swing;
        }

        deltas
    }
}

/// Point deltas for one hole, scaled by the stake multiplier.
///
/// Fails if any assigned player has no positive score.
pub fn compute_points<R: PointsRule + ?Sized>(
    rule: &R,
    assignment: &TeamAssignment,
    raw_scores: &HashMap<PlayerId, u32>,
    multiplier: u32,
) -> Result<HashMap<PlayerId, i32>, ScoreError> {
    for (_, player) in assignment.iter() {
        if !raw_scores.get(player).is_some_and(|&s| s > 0) {
            return Err(ScoreError::IncompleteData {
                player: player.clone(),
            });
        }
    }

    let multiplier = multiplier as i32;
    Ok(rule
        .hole_deltas(assignment, raw_scores)
        .into_iter()
        .map(|(p, d)| (p, d * multiplier))
        .collect())
}
