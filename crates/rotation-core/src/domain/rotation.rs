//! Rotation views: candidates, cycle status, assignment requests and results.
//!
//! These are the shapes the presented operations return; all serialize with
//! camelCase field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::{Result, RotationError};
use super::ids::{AllianceId, EventId, PlayerId};
use super::player::Player;

/// Candidate priority within the current cycle.
///
/// Declared `High` first so the derived `Ord` sorts high before low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Low,
}

impl Priority {
    pub fn for_flag(has_been_mvp_this_cycle: bool) -> Self {
        if has_been_mvp_this_cycle {
            Priority::Low
        } else {
            Priority::High
        }
    }
}

/// A player eligible for the next recognition, annotated with priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub player_id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alliance_id: Option<AllianceId>,
    pub mvp_count: u32,
    pub last_mvp_date: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub has_been_mvp_this_cycle: bool,
}

impl From<&Player> for Candidate {
    fn from(player: &Player) -> Self {
        Self {
            player_id: player.id,
            name: player.name.clone(),
            alliance_id: player.alliance_id,
            mvp_count: player.mvp.mvp_count,
            last_mvp_date: player.mvp.last_mvp_date,
            priority: Priority::for_flag(player.mvp.has_been_mvp_this_cycle),
            has_been_mvp_this_cycle: player.mvp.has_been_mvp_this_cycle,
        }
    }
}

/// Summary of the current rotation cycle, derived from the player set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationStatus {
    pub current_cycle_number: u32,
    pub total_active_players: usize,
    pub players_been_mvp: usize,
    pub players_pending_mvp: usize,
    pub rotation_complete: bool,
    pub next_recommended_player: Option<Candidate>,
}

/// Caller input for assign / reassign.
///
/// Fields are optional because they come straight from a request body;
/// [`AssignRequest::validate`] turns them into a [`ValidAssignment`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    #[serde(default)]
    pub player_id: Option<PlayerId>,
    #[serde(default)]
    pub mvp_type: Option<String>,
}

/// An [`AssignRequest`] with every required field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidAssignment {
    pub player_id: PlayerId,
    pub mvp_type: String,
}

impl AssignRequest {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id: Some(player_id),
            mvp_type: None,
        }
    }

    pub fn with_type(mut self, mvp_type: impl Into<String>) -> Self {
        self.mvp_type = Some(mvp_type.into());
        self
    }

    /// A missing type falls back to `default_type`; a blank one is rejected.
    pub fn validate(&self, default_type: &str) -> Result<ValidAssignment> {
        let player_id = self
            .player_id
            .ok_or(RotationError::MissingField("player_id"))?;

        let mvp_type = match self.mvp_type.as_deref() {
            None => default_type.to_string(),
            Some(t) if t.trim().is_empty() => {
                return Err(RotationError::InvalidField {
                    field: "mvp_type",
                    reason: "must not be blank".to_string(),
                });
            }
            Some(t) => t.trim().to_string(),
        };

        Ok(ValidAssignment {
            player_id,
            mvp_type,
        })
    }
}

/// Result of a successful assign / reassign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResult {
    pub event_id: EventId,
    pub player_id: PlayerId,
    pub type_name: String,
    pub points_awarded: u32,
    /// Set on reassignment: who lost the award.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaced_player_id: Option<PlayerId>,
    pub status: RotationStatus,
}
