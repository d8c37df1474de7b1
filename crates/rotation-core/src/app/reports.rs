//! MVP history and statistics, derived from events and players.

use std::collections::{BTreeSet, HashMap};

use crate::domain::{
    Event, EventSummary, HistoryItem, MvpStats, Player, PlayerId, PlayerSummary, TopMvp,
};

/// Awarded events, newest event date first (ties: higher event id first).
pub fn mvp_history(events: &[Event], players: &[Player], limit: usize) -> Vec<HistoryItem> {
    let by_id: HashMap<PlayerId, &Player> = players.iter().map(|p| (p.id, p)).collect();

    let mut awarded: Vec<&Event> = events.iter().filter(|e| e.has_mvp()).collect();
    awarded.sort_by(|a, b| b.event_date.cmp(&a.event_date).then_with(|| b.id.cmp(&a.id)));

    awarded
        .into_iter()
        .take(limit)
        .filter_map(|event| {
            let award = event.mvp.as_ref()?;
            Some(HistoryItem {
                event: EventSummary {
                    id: event.id,
                    name: event.name.clone(),
                    date: event.event_date,
                },
                player: by_id.get(&award.player_id).map(|p| PlayerSummary {
                    id: p.id,
                    name: p.name.clone(),
                    alliance_id: p.alliance_id,
                }),
                type_name: award.type_name.clone(),
                points: award.points,
            })
        })
        .collect()
}

pub fn mvp_stats(events: &[Event], players: &[Player], top_limit: usize) -> MvpStats {
    let awarded: Vec<PlayerId> = events
        .iter()
        .filter_map(|e| e.mvp.as_ref().map(|a| a.player_id))
        .collect();
    let unique: BTreeSet<PlayerId> = awarded.iter().copied().collect();

    // One sample per award, so a player with three awards weighs three times.
    let by_id: HashMap<PlayerId, &Player> = players.iter().map(|p| (p.id, p)).collect();
    let counts: Vec<u32> = awarded
        .iter()
        .filter_map(|id| by_id.get(id).map(|p| p.mvp.mvp_count))
        .collect();
    let avg_mvp_per_player = if counts.is_empty() {
        0.0
    } else {
        counts.iter().map(|&c| f64::from(c)).sum::<f64>() / counts.len() as f64
    };

    let mut top: Vec<&Player> = players.iter().filter(|p| p.mvp.mvp_count > 0).collect();
    top.sort_by(|a, b| {
        b.mvp
            .mvp_count
            .cmp(&a.mvp.mvp_count)
            .then_with(|| a.name.cmp(&b.name))
    });

    MvpStats {
        unique_mvps: unique.len(),
        total_mvp_assignments: awarded.len(),
        avg_mvp_per_player,
        top_mvps: top
            .into_iter()
            .take(top_limit)
            .map(|p| TopMvp {
                player_id: p.id,
                name: p.name.clone(),
                mvp_count: p.mvp.mvp_count,
                mvp_points: p.mvp.mvp_points,
                alliance_id: p.alliance_id,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventId, MvpAward, MvpFields};
    use chrono::{NaiveDate, TimeZone, Utc};
    use ulid::Ulid;

    fn pid(n: u64) -> PlayerId {
        PlayerId::from_ulid(Ulid::from_parts(n, 0))
    }

    fn player(n: u64, name: &str, count: u32) -> Player {
        Player::new(pid(n), name).with_mvp(MvpFields {
            mvp_count: count,
            mvp_points: count * 2,
            ..MvpFields::default()
        })
    }

    fn event(n: u64, day: u32, mvp: Option<u64>) -> Event {
        let date = NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
        let mut e = Event::new(EventId::from_ulid(Ulid::from_parts(n, 0)), format!("E{n}"), date);
        e.mvp = mvp.map(|p| MvpAward {
            player_id: pid(p),
            type_name: "Simple".to_string(),
            points: 1,
            cycle: 1,
            assigned_at: Utc.with_ymd_and_hms(2024, 2, day, 20, 0, 0).unwrap(),
        });
        e
    }

    #[test]
    fn history_is_newest_first_and_limited() {
        let players = vec![player(1, "A", 2), player(2, "B", 1)];
        let events = vec![
            event(1, 1, Some(1)),
            event(2, 10, Some(2)),
            event(3, 5, None),
            event(4, 10, Some(1)),
        ];

        let history = mvp_history(&events, &players, 50);
        let names: Vec<&str> = history.iter().map(|h| h.event.name.as_str()).collect();
        assert_eq!(names, vec!["E4", "E2", "E1"]);
        assert_eq!(history[0].player.as_ref().unwrap().name, "A");

        assert_eq!(mvp_history(&events, &players, 2).len(), 2);
    }

    #[test]
    fn history_keeps_awards_of_unknown_players() {
        let history = mvp_history(&[event(1, 1, Some(9))], &[], 10);
        assert_eq!(history.len(), 1);
        assert!(history[0].player.is_none());
    }

    #[test]
    fn stats_count_unique_and_total() {
        let players = vec![player(1, "A", 2), player(2, "B", 1), player(3, "C", 0)];
        let events = vec![event(1, 1, Some(1)), event(2, 2, Some(1)), event(3, 3, Some(2))];

        let stats = mvp_stats(&events, &players, 10);

        assert_eq!(stats.unique_mvps, 2);
        assert_eq!(stats.total_mvp_assignments, 3);
        // A's count (2) appears once per award: (2 + 2 + 1) / 3.
        assert!((stats.avg_mvp_per_player - 5.0 / 3.0).abs() < 1e-9);
        let top: Vec<&str> = stats.top_mvps.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(top, vec!["A", "B"]);
    }

    #[test]
    fn average_skips_awards_of_unknown_players() {
        let players = vec![player(1, "A", 4)];
        let events = vec![event(1, 1, Some(1)), event(2, 2, Some(9))];

        let stats = mvp_stats(&events, &players, 10);

        assert_eq!(stats.unique_mvps, 2);
        assert_eq!(stats.total_mvp_assignments, 2);
        assert_eq!(stats.avg_mvp_per_player, 4.0);
    }

    #[test]
    fn stats_on_empty_history() {
        let stats = mvp_stats(&[], &[player(1, "A", 0)], 10);
        assert_eq!(stats.unique_mvps, 0);
        assert_eq!(stats.avg_mvp_per_player, 0.0);
        assert!(stats.top_mvps.is_empty());
    }

    #[test]
    fn top_mvps_tie_breaks_by_name() {
        let players = vec![player(1, "Zed", 3), player(2, "Amy", 3), player(3, "Bob", 1)];
        let stats = mvp_stats(&[], &players, 2);
        let top: Vec<&str> = stats.top_mvps.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(top, vec!["Amy", "Zed"]);
    }
}
