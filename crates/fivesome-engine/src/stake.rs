use serde::{Deserialize, Serialize};

/// Yes/no decision on the doubling offer, supplied by whoever talks to the user.
pub trait DoublingPrompt {
    /// Asked once per game, on the doubling hole. `hole` is 0-based.
    fn offer_doubling(&mut self, hole: usize) -> bool;
}

impl<F: FnMut(usize) -> bool> DoublingPrompt for F {
    fn offer_doubling(&mut self, hole: usize) -> bool {
        self(hole)
    }
}

/// A prompt that always gives the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl DoublingPrompt for FixedAnswer {
    fn offer_doubling(&mut self, _hole: usize) -> bool {
        self.0
    }
}

/// Current point multiplier and whether the one-time doubling offer was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeController {
    multiplier: u32,
    offered: bool,
}

impl Default for StakeController {
    fn default() -> Self {
        Self::new()
    }
}

impl StakeController {
    pub fn new() -> Self {
        Self {
            multiplier: 1,
            offered: false,
        }
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn offered(&self) -> bool {
        self.offered
    }

    /// Whether the doubling question should be put to the players on `hole`.
    pub fn should_offer(&self, hole: usize, doubling_hole: usize) -> bool {
        hole == doubling_hole && !self.offered
    }

    /// Apply the players' answer to the doubling offer.
    ///
    /// Does nothing off the doubling hole or once the offer has been made.
    /// Returns the multiplier for the holes that follow.
    pub fn maybe_double(
        &mut self,
        hole: usize,
        doubling_hole: usize,
        user_confirmed: bool,
    ) -> u32 {
        if !self.should_offer(hole, doubling_hole) {
            return self.multiplier;
        }
        self.offered = true;
        if user_confirmed {
            self.multiplier *= 2;
            tracing::info!(hole, multiplier = self.multiplier, "Stakes doubled");
        } else {
            tracing::info!(hole, multiplier = self.multiplier, "Doubling declined");
        }
        self.multiplier
    }

    /// Roll back to an earlier controller state when the hole that took the
    /// doubling decision is rewound.
    pub fn restore(&mut self, earlier: StakeController) {
        tracing::debug!(
            from = self.multiplier,
            to = earlier.multiplier,
            "Stake decision rolled back"
        );
        *self = earlier;
    }
}
