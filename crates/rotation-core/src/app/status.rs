//! Status - rotation cycle の集計
//!
//! Re-derived from the player set on every call; there is no cached cycle
//! object that could drift from the per-player flags.

use crate::domain::{Player, RotationStatus};

use super::ranking::next_candidate;

pub fn rotation_status(current_cycle: u32, players: &[Player]) -> RotationStatus {
    let active: Vec<&Player> = players.iter().filter(|p| p.is_active).collect();
    let total_active_players = active.len();
    let players_been_mvp = active
        .iter()
        .filter(|p| p.mvp.has_been_mvp_this_cycle)
        .count();

    RotationStatus {
        current_cycle_number: current_cycle,
        total_active_players,
        players_been_mvp,
        players_pending_mvp: total_active_players - players_been_mvp,
        // An empty rotation is not "complete": nothing to reset.
        rotation_complete: total_active_players > 0 && players_been_mvp == total_active_players,
        next_recommended_player: next_candidate(players),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MvpFields, PlayerId};
    use rstest::rstest;
    use ulid::Ulid;

    fn player(n: u64, flagged: bool) -> Player {
        Player::new(PlayerId::from_ulid(Ulid::from_parts(n, 0)), format!("P{n}")).with_mvp(
            MvpFields {
                has_been_mvp_this_cycle: flagged,
                ..MvpFields::default()
            },
        )
    }

    #[test]
    fn zero_active_players_is_not_complete() {
        let status = rotation_status(1, &[]);
        assert!(!status.rotation_complete);
        assert_eq!(status.total_active_players, 0);
        assert!(status.next_recommended_player.is_none());

        let status = rotation_status(1, &[player(1, true).inactive()]);
        assert!(!status.rotation_complete);
        assert_eq!(status.total_active_players, 0);
    }

    #[rstest]
    #[case::none_flagged(vec![false, false, false], 0, false)]
    #[case::some_flagged(vec![true, false, true], 2, false)]
    #[case::all_flagged(vec![true, true, true], 3, true)]
    fn counts_and_completion(
        #[case] flags: Vec<bool>,
        #[case] been: usize,
        #[case] complete: bool,
    ) {
        let players: Vec<Player> = flags
            .iter()
            .enumerate()
            .map(|(i, f)| player(i as u64 + 1, *f))
            .collect();

        let status = rotation_status(4, &players);

        assert_eq!(status.current_cycle_number, 4);
        assert_eq!(status.total_active_players, flags.len());
        assert_eq!(status.players_been_mvp, been);
        assert_eq!(status.players_pending_mvp, flags.len() - been);
        assert_eq!(status.rotation_complete, complete);
        assert!(status.next_recommended_player.is_some());
    }

    #[test]
    fn inactive_flagged_players_are_not_counted() {
        let players = vec![player(1, true), player(2, true).inactive()];
        let status = rotation_status(1, &players);
        assert_eq!(status.total_active_players, 1);
        assert_eq!(status.players_been_mvp, 1);
        assert!(status.rotation_complete);
    }

    #[test]
    fn status_serializes_with_ui_field_names() {
        let v = serde_json::to_value(rotation_status(2, &[player(1, false)])).unwrap();
        assert_eq!(v["currentCycleNumber"], 2);
        assert_eq!(v["playersPendingMvp"], 1);
        assert_eq!(v["rotationComplete"], false);
        assert_eq!(v["nextRecommendedPlayer"]["priority"], "high");
    }
}
