//! Event record, the MVP award it may carry, and its audit log.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{EventId, PlayerId};

/// Event lifecycle as the dashboard tracks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

/// The single MVP award attached to an event.
///
/// `points` and `cycle` are captured when the award is made so a later
/// reassignment can reverse exactly what was applied, even if the catalog
/// changed since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MvpAward {
    pub player_id: PlayerId,
    pub type_name: String,
    pub points: u32,
    pub cycle: u32,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub event_date: NaiveDate,
    #[serde(default)]
    pub status: EventStatus,
    /// At most one award per event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mvp: Option<MvpAward>,
}

impl Event {
    pub fn new(id: EventId, name: impl Into<String>, event_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            event_date,
            status: EventStatus::Upcoming,
            mvp: None,
        }
    }

    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    pub fn has_mvp(&self) -> bool {
        self.mvp.is_some()
    }
}

/// What happened to an event, for the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryAction {
    MvpAssigned,
    MvpReassigned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHistoryEntry {
    pub event_id: EventId,
    pub action: HistoryAction,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

impl EventHistoryEntry {
    pub fn new(
        event_id: EventId,
        action: HistoryAction,
        details: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id,
            action,
            details: details.into(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ulid::Ulid;

    #[test]
    fn new_event_has_no_mvp() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let event = Event::new(EventId::from_ulid(Ulid::new()), "Winter Tournament", date);
        assert!(!event.has_mvp());
        assert_eq!(event.status, EventStatus::Upcoming);
    }

    #[test]
    fn history_action_serializes_snake_case() {
        let s = serde_json::to_string(&HistoryAction::MvpAssigned).unwrap();
        assert_eq!(s, "\"mvp_assigned\"");
        let s = serde_json::to_string(&HistoryAction::MvpReassigned).unwrap();
        assert_eq!(s, "\"mvp_reassigned\"");
    }
}
