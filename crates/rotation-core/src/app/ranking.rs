//! Candidate ranking - 純粋関数（副作用なし）
//!
//! Order within the returned list:
//! 1. `high` priority (not yet recognised this cycle) before `low`
//! 2. fewer lifetime recognitions first
//! 3. longest since last recognition first; never recognised sorts first
//! 4. player id, so the result never depends on input order

use std::cmp::Ordering;

use crate::domain::{Candidate, Player};

/// Rank the next MVP candidates. Inactive players are dropped.
pub fn list_candidates(players: &[Player]) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = players
        .iter()
        .filter(|p| p.is_active)
        .map(Candidate::from)
        .collect();
    candidates.sort_by(compare_candidates);
    candidates
}

/// Head of [`list_candidates`] without sorting the whole list.
pub fn next_candidate(players: &[Player]) -> Option<Candidate> {
    players
        .iter()
        .filter(|p| p.is_active)
        .map(Candidate::from)
        .min_by(compare_candidates)
}

fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.mvp_count.cmp(&b.mvp_count))
        // Option orders None before Some, which is what "absent first" needs.
        .then_with(|| a.last_mvp_date.cmp(&b.last_mvp_date))
        .then_with(|| a.player_id.cmp(&b.player_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MvpFields, PlayerId, Priority};
    use chrono::{DateTime, TimeZone, Utc};
    use rstest::rstest;
    use ulid::Ulid;

    fn id(n: u64) -> PlayerId {
        PlayerId::from_ulid(Ulid::from_parts(n, 0))
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 20, 0, 0).unwrap()
    }

    fn player(n: u64, count: u32, last: Option<u32>, flagged: bool) -> Player {
        Player::new(id(n), format!("P{n}")).with_mvp(MvpFields {
            mvp_count: count,
            mvp_points: count,
            last_mvp_date: last.map(day),
            last_mvp_type: last.map(|_| "Simple".to_string()),
            has_been_mvp_this_cycle: flagged,
        })
    }

    fn order(players: &[Player]) -> Vec<PlayerId> {
        list_candidates(players).iter().map(|c| c.player_id).collect()
    }

    #[test]
    fn inactive_players_never_appear() {
        let players = vec![
            player(1, 0, None, false),
            player(2, 0, None, false).inactive(),
            player(3, 5, Some(3), true),
        ];

        let ranked = list_candidates(&players);

        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|c| c.player_id != id(2)));
    }

    #[test]
    fn high_priority_precedes_low_even_with_more_recognitions() {
        let players = vec![player(1, 0, None, true), player(2, 9, Some(1), false)];

        let ranked = list_candidates(&players);

        assert_eq!(ranked[0].player_id, id(2));
        assert_eq!(ranked[0].priority, Priority::High);
        assert_eq!(ranked[1].priority, Priority::Low);
    }

    #[rstest]
    #[case::by_count(
        vec![player(1, 3, Some(1), false), player(2, 1, Some(2), false)],
        vec![id(2), id(1)]
    )]
    #[case::by_oldest_date(
        vec![player(1, 1, Some(9), false), player(2, 1, Some(4), false)],
        vec![id(2), id(1)]
    )]
    #[case::absent_date_first(
        vec![player(1, 1, Some(1), false), player(2, 1, None, false)],
        vec![id(2), id(1)]
    )]
    #[case::by_id(
        vec![player(2, 1, Some(1), false), player(1, 1, Some(1), false)],
        vec![id(1), id(2)]
    )]
    fn tie_breaks(#[case] players: Vec<Player>, #[case] expected: Vec<PlayerId>) {
        assert_eq!(order(&players), expected);
    }

    #[test]
    fn output_does_not_depend_on_input_order() {
        let mut players = vec![
            player(4, 2, Some(5), true),
            player(1, 0, None, false),
            player(3, 1, Some(2), false),
            player(2, 1, Some(2), false),
            player(5, 0, None, true),
        ];
        let expected = order(&players);

        players.reverse();
        assert_eq!(order(&players), expected);
        players.swap(0, 3);
        assert_eq!(order(&players), expected);

        assert_eq!(expected, vec![id(1), id(2), id(3), id(5), id(4)]);
    }

    #[test]
    fn next_candidate_is_head_of_list() {
        let players = vec![
            player(1, 2, Some(5), false),
            player(2, 2, Some(3), false),
            player(3, 0, None, true),
        ];
        assert_eq!(
            next_candidate(&players),
            list_candidates(&players).into_iter().next()
        );
        assert!(next_candidate(&[]).is_none());
    }
}
