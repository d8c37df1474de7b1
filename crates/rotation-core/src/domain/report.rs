//! Read-only reports over award history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{AllianceId, EventId, PlayerId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: EventId,
    pub name: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alliance_id: Option<AllianceId>,
}

/// One awarded event in the MVP history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub event: EventSummary,
    /// `None` if the awarded player has since been removed from the store.
    pub player: Option<PlayerSummary>,
    pub type_name: String,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMvp {
    pub player_id: PlayerId,
    pub name: String,
    pub mvp_count: u32,
    pub mvp_points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alliance_id: Option<AllianceId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MvpStats {
    pub unique_mvps: usize,
    pub total_mvp_assignments: usize,
    /// Mean of the recipient's lifetime `mvpCount` taken over award rows, so
    /// frequent MVPs weigh more. Awards to unknown players are skipped.
    pub avg_mvp_per_player: f64,
    pub top_mvps: Vec<TopMvp>,
}
