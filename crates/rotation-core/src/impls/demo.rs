//! Demo data set: ten players across four alliances and six events.

use chrono::{NaiveDate, TimeZone, Utc};

use super::inmem_store::InMemoryRotationStore;
use crate::domain::{Event, EventStatus, MvpAward, MvpFields, Player};
use crate::ports::IdGenerator;

/// (name, alliance index, lifetime mvp count, last mvp date, recognised this cycle)
const PLAYERS: &[(&str, Option<usize>, u32, Option<(i32, u32, u32)>, bool)] = &[
    ("KingArthur", Some(0), 2, Some((2024, 1, 15)), true),
    ("QueenElsa", Some(0), 1, Some((2024, 1, 20)), false),
    ("LordStark", Some(1), 3, Some((2024, 2, 20)), true),
    ("LadyGaga", Some(1), 0, None, false),
    ("CaptainAmerica", Some(2), 1, Some((2024, 1, 25)), false),
    ("WonderWoman", Some(2), 2, Some((2024, 3, 25)), true),
    ("Wolverine", Some(3), 1, Some((2024, 4, 15)), true),
    ("StormBreaker", None, 0, None, false),
    ("PhoenixRider", None, 1, Some((2024, 1, 22)), false),
    ("DragonSlayer", Some(3), 0, None, false),
];

/// (name, date, status, index into PLAYERS of the MVP)
const EVENTS: &[(&str, (i32, u32, u32), EventStatus, Option<usize>)] = &[
    ("Winter Tournament", (2024, 1, 15), EventStatus::Completed, Some(0)),
    ("Spring Festival", (2024, 2, 20), EventStatus::Completed, Some(2)),
    ("Summer War Games", (2024, 3, 25), EventStatus::Completed, Some(5)),
    ("Autumn Harvest", (2024, 4, 15), EventStatus::Ongoing, Some(6)),
    ("New Year Championship", (2024, 12, 31), EventStatus::Upcoming, None),
    ("Valentine's Day Special", (2024, 2, 14), EventStatus::Upcoming, None),
];

const ALLIANCES: usize = 4;

fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Populate `store` with the demo data set. Awards are recorded as `Simple`
/// in cycle 1.
pub async fn seed_demo(store: &InMemoryRotationStore, ids: &dyn IdGenerator) {
    let alliance_ids: Vec<_> = (0..ALLIANCES).map(|_| ids.generate_alliance_id()).collect();

    let mut player_ids = Vec::with_capacity(PLAYERS.len());
    for &(name, alliance, mvp_count, last, flagged) in PLAYERS {
        let id = ids.generate_player_id();
        let mvp = MvpFields {
            mvp_count,
            mvp_points: mvp_count,
            last_mvp_date: last.and_then(|d| {
                date(d)
                    .and_hms_opt(20, 0, 0)
                    .map(|dt| Utc.from_utc_datetime(&dt))
            }),
            last_mvp_type: last.map(|_| "Simple".to_string()),
            has_been_mvp_this_cycle: flagged,
        };
        let mut player = Player::new(id, name).with_mvp(mvp);
        if let Some(a) = alliance {
            player = player.with_alliance(alliance_ids[a]);
        }
        store.upsert_player(player).await;
        player_ids.push(id);
    }

    for &(name, when, status, mvp) in EVENTS {
        let mut event = Event::new(ids.generate_event_id(), name, date(when)).with_status(status);
        event.mvp = mvp.map(|i| MvpAward {
            player_id: player_ids[i],
            type_name: "Simple".to_string(),
            points: 1,
            cycle: 1,
            assigned_at: date(when)
                .and_hms_opt(20, 0, 0)
                .map(|dt| Utc.from_utc_datetime(&dt))
                .unwrap_or_default(),
        });
        store.upsert_event(event).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{EventStore, PlayerStore, SystemClock, UlidGenerator};

    #[tokio::test]
    async fn seeds_players_and_events() {
        let store = InMemoryRotationStore::new();
        seed_demo(&store, &UlidGenerator::new(SystemClock)).await;

        assert_eq!(store.list_active_players().await.unwrap().len(), 10);
        let events = store.list_events().await.unwrap();
        assert_eq!(events.len(), 6);
        assert_eq!(events.iter().filter(|e| e.has_mvp()).count(), 4);
    }
}
