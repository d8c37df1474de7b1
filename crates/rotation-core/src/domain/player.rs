//! Player record and the MVP-related field group the scheduler owns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{AllianceId, PlayerId};

/// MVP bookkeeping for one player.
///
/// This is the only part of a player the scheduler writes. It is always
/// replaced as a whole (`PlayerStore::update_player_mvp_fields`), so a reader
/// never sees a count bumped without the matching points/date/type/flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MvpFields {
    pub mvp_count: u32,
    pub mvp_points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_mvp_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_mvp_type: Option<String>,
    #[serde(default)]
    pub has_been_mvp_this_cycle: bool,
}

impl MvpFields {
    /// Fields after one more recognition of `type_name` worth `points`.
    pub fn recognized(&self, type_name: &str, points: u32, at: DateTime<Utc>) -> Self {
        Self {
            mvp_count: self.mvp_count.saturating_add(1),
            mvp_points: self.mvp_points.saturating_add(points),
            last_mvp_date: Some(at),
            last_mvp_type: Some(type_name.to_string()),
            has_been_mvp_this_cycle: true,
        }
    }

    /// Same lifetime history, flag cleared (cycle boundary).
    pub fn with_cycle_cleared(&self) -> Self {
        Self {
            has_been_mvp_this_cycle: false,
            ..self.clone()
        }
    }
}

/// A rotation participant.
///
/// Created and (de)activated by player management; the scheduler only reads
/// identity/activity and rewrites `mvp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alliance_id: Option<AllianceId>,
    pub is_active: bool,
    #[serde(flatten)]
    pub mvp: MvpFields,
}

impl Player {
    /// New active player with empty MVP history.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            alliance_id: None,
            is_active: true,
            mvp: MvpFields::default(),
        }
    }

    pub fn with_alliance(mut self, alliance_id: AllianceId) -> Self {
        self.alliance_id = Some(alliance_id);
        self
    }

    pub fn with_mvp(mut self, mvp: MvpFields) -> Self {
        self.mvp = mvp;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
