use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three groups players are split into on every hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Center,
}

impl Side {
    /// All sides, in the order rosters are entered and validated.
    pub const ALL: [Side; 3] = [Side::Left, Side::Right, Side::Center];

    /// Number of players this side must hold.
    pub const fn required_size(self) -> usize {
        match self {
            Side::Left | Side::Right => 2,
            Side::Center => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
            Side::Center => "Center",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_cover_five_players() {
        let total: usize = Side::ALL.iter().map(|s| s.required_size()).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Side::Center.to_string(), "Center");
    }
}
