use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use fivesome_core::error::RosterError;
use fivesome_core::player::{PLAYER_COUNT, PlayerId, Roster};
use fivesome_core::team::Side;

/// A legal split of the roster for one hole: two pairs and a lone Center.
///
/// Only produced by [`validate`], so the three groups are always disjoint
/// and together cover the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssignment {
    left: [PlayerId; 2],
    right: [PlayerId; 2],
    center: [PlayerId; 1],
}

impl TeamAssignment {
    pub fn left(&self) -> &[PlayerId] {
        &self.left
    }

    pub fn right(&self) -> &[PlayerId] {
        &self.right
    }

    pub fn center(&self) -> &PlayerId {
        &self.center[0]
    }

    pub fn members(&self, side: Side) -> &[PlayerId] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
            Side::Center => &self.center,
        }
    }

    pub fn side_of(&self, player: &str) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.members(side).iter().any(|p| p == player))
    }

    /// Every assigned player with their side, Left first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &PlayerId)> {
        Side::ALL
            .into_iter()
            .flat_map(move |side| self.members(side).iter().map(move |p| (side, p)))
    }
}

/// Check a proposed Left/Right/Center split against the roster.
///
/// Group sizes are checked first (Left, Right, Center), then each named
/// player must be unique across groups and belong to the game.
pub fn validate<S: AsRef<str>>(
    left: &[S],
    right: &[S],
    center: &[S],
    all_players: &Roster,
) -> Result<TeamAssignment, RosterError> {
    check_size(Side::Left, left.len())?;
    check_size(Side::Right, right.len())?;
    check_size(Side::Center, center.len())?;

    let mut seen: HashSet<&str> = HashSet::with_capacity(PLAYER_COUNT);
    for name in left.iter().chain(right).chain(center).map(AsRef::as_ref) {
        if !seen.insert(name) {
            return Err(RosterError::Overlap {
                player: name.to_string(),
            });
        }
        if !all_players.contains(name) {
            return Err(RosterError::UnknownPlayer {
                player: name.to_string(),
            });
        }
    }

    let owned = |s: &S| s.as_ref().to_string();
    Ok(TeamAssignment {
        left: [owned(&left[0]), owned(&left[1])],
        right: [owned(&right[0]), owned(&right[1])],
        center: [owned(&center[0])],
    })
}

fn check_size(side: Side, actual: usize) -> Result<(), RosterError> {
    let expected = side.required_size();
    if actual != expected {
        return Err(RosterError::Size {
            side,
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivesome_core::test_helpers::make_roster;

    #[test]
    fn valid_split_is_accepted() {
        let roster = make_roster();
        let a = validate(&["A", "B"], &["C", "D"], &["E"], &roster).unwrap();
        assert_eq!(a.left(), ["A", "B"]);
        assert_eq!(a.right(), ["C", "D"]);
        assert_eq!(a.center(), "E");
        assert_eq!(a.side_of("D"), Some(Side::Right));
        assert_eq!(a.side_of("Z"), None);
        assert_eq!(a.iter().count(), 5);
    }

    #[test]
    fn player_in_two_groups_is_overlap() {
        let roster = make_roster();
        let err = validate(&["A", "B"], &["B", "C"], &["D"], &roster).unwrap_err();
        assert_eq!(
            err,
            RosterError::Overlap {
                player: "B".to_string()
            }
        );
    }

    #[test]
    fn player_twice_in_one_group_is_overlap() {
        let roster = make_roster();
        let err = validate(&["A", "A"], &["C", "D"], &["E"], &roster).unwrap_err();
        assert!(matches!(err, RosterError::Overlap { .. }));
    }

    #[test]
    fn wrong_sizes_report_first_offending_side() {
        let roster = make_roster();
        let err = validate(&["A"], &["B", "C"], &["D", "E"], &roster).unwrap_err();
        assert_eq!(
            err,
            RosterError::Size {
                side: Side::Left,
                expected: 2,
                actual: 1
            }
        );

        let err = validate(&["A", "B"], &["C", "D"], &[] as &[&str], &roster).unwrap_err();
        assert_eq!(
            err,
            RosterError::Size {
                side: Side::Center,
                expected: 1,
                actual: 0
            }
        );
    }

    #[test]
    fn stranger_is_rejected() {
        let roster = make_roster();
        let err = validate(&["A", "B"], &["C", "D"], &["Z"], &roster).unwrap_err();
        assert_eq!(
            err,
            RosterError::UnknownPlayer {
                player: "Z".to_string()
            }
        );
    }

    mod proptests {
        use super::*;
        use fivesome_core::test_helpers::NAMES;
        use proptest::prelude::*;
        use proptest::sample::subsequence;

        fn permutation() -> impl Strategy<Value = Vec<&'static str>> {
            Just(NAMES.to_vec()).prop_shuffle()
        }

        proptest! {
            #[test]
            fn every_two_two_one_split_is_valid(order in permutation()) {
                let roster = make_roster();
                let a = validate(&order[0..2], &order[2..4], &order[4..5], &roster).unwrap();

                let mut covered: Vec<&str> = a.iter().map(|(_, p)| p.as_str()).collect();
                covered.sort_unstable();
                prop_assert_eq!(covered, NAMES.to_vec());
                for name in NAMES {
                    prop_assert!(a.side_of(name).is_some());
                }
            }

            #[test]
            fn duplicated_player_is_always_overlap(
                order in permutation(),
                from in 0usize..4,
                offset in 1usize..4,
            ) {
                // Overwrite a later slot with a player already placed earlier.
                let mut picks = order.clone();
                let target = (from + offset).min(4);
                picks[target] = picks[from];

                let roster = make_roster();
                let err = validate(&picks[0..2], &picks[2..4], &picks[4..5], &roster).unwrap_err();
                let is_overlap = matches!(err, RosterError::Overlap { .. });
                prop_assert!(is_overlap);
            }

            #[test]
            fn wrong_group_size_is_always_size_error(
                picks in subsequence(NAMES.to_vec(), 0..=5),
                split_a in 0usize..=5,
                split_b in 0usize..=5,
            ) {
                let a = split_a.min(picks.len());
                let b = split_b.min(picks.len()).max(a);
                let (left, rest) = picks.split_at(a);
                let (right, center) = rest.split_at(b - a);
                prop_assume!(!(left.len() == 2 && right.len() == 2 && center.len() == 1));

                let roster = make_roster();
                let err = validate(left, right, center, &roster).unwrap_err();
                let is_size = matches!(err, RosterError::Size { .. });
                prop_assert!(is_size);
            }
        }
    }
}
