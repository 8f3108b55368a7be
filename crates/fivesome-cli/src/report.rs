use serde::Serialize;

use fivesome_engine::Game;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub player: String,
    pub points: i32,
}

/// End-of-run summary printed by the `fivesome` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Number of holes finalized so far.
    pub holes_played: usize,
    pub hole_count: usize,
    pub multiplier: u32,
    pub finished: bool,
    pub standings: Vec<Standing>,
}

impl Report {
    pub fn from_game(game: &Game) -> Self {
        Self {
            holes_played: game.current_hole(),
            hole_count: game.hole_count(),
            multiplier: game.multiplier(),
            finished: game.is_finished(),
            standings: game
                .standings()
                .into_iter()
                .map(|(player, points)| Standing { player, points })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_text(&self) -> String {
        let mut out = format!(
            "Holes played: {}/{}  Stakes: x{}{}\n",
            self.holes_played,
            self.hole_count,
            self.multiplier,
            if self.finished { "  (final)" } else { "" }
        );
        let width = self
            .standings
            .iter()
            .map(|s| s.player.chars().count())
            .max()
            .unwrap_or(0);
        for (rank, s) in self.standings.iter().enumerate() {
            out.push_str(&format!(
                "{:>2}. {:<width$}  {:+}\n",
                rank + 1,
                s.player,
                s.points
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivesome_core::test_helpers::{make_roster, short_rules};
    use fivesome_engine::FixedAnswer;

    fn played_game() -> Game {
        let mut game = Game::new(make_roster(), short_rules(2, 1)).unwrap();
        game.submit_roster(&["A", "B"], &["C", "D"], &["E"]).unwrap();
        for (name, v) in [("A", 4), ("B", 5), ("C", 4), ("D", 4), ("E", 3)] {
            game.record_score(name, v).unwrap();
        }
        game.submit_scores().unwrap();
        game.finalize_hole(&mut FixedAnswer(false)).unwrap();
        game
    }

    #[test]
    fn report_lists_leader_first() {
        let report = Report::from_game(&played_game());
        assert_eq!(report.holes_played, 1);
        assert!(!report.finished);
        assert_eq!(
            report.standings[0],
            Standing {
                player: "E".to_string(),
                points: 4
            }
        );
    }

    #[test]
    fn text_rendering() {
        let text = Report::from_game(&played_game()).render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Holes played: 1/2  Stakes: x1");
        assert_eq!(lines[1], " 1. E  +4");
        assert_eq!(lines[5], " 5. B  -2");
        assert_eq!(lines.len(), 6);
        assert!(text.ends_with("-2\n"));
    }

    #[test]
    fn json_rendering() {
        let json = Report::from_game(&played_game()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["standings"][0]["player"], "E");
        assert_eq!(value["hole_count"], 2);
    }
}
