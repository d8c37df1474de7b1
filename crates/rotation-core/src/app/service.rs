//! RotationService - presented operations over the ports.
//!
//! # 排他制御
//! - assign / reassign: cycle gate (read) → event lock → player lock(s, id 順)
//! - reset: cycle gate (write) のみ
//! - reads: ロックなし（store が player レコードを丸ごと置き換えるので中間状態は見えない）
//!
//! Writes that span several records are undone in reverse order if a later
//! write fails, so a failed assignment leaves players and events unchanged.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::locks::KeyedLocks;
use super::ranking::{list_candidates, next_candidate};
use super::reports::{mvp_history, mvp_stats};
use super::status::rotation_status;
use crate::config::RotationConfig;
use crate::domain::{
    AssignRequest, AssignmentResult, Candidate, Event, EventHistoryEntry, EventId, HistoryAction,
    HistoryItem, MvpAward, MvpFields, MvpStats, Player, PlayerId, RecognitionType, Result,
    RotationError, RotationStatus,
};
use crate::ports::{Clock, EventStore, PlayerStore, RecognitionCatalog};

/// A write already applied, and how to take it back.
enum Undo {
    PlayerFields(PlayerId, MvpFields),
    ClearAward(EventId),
    RestoreAward(EventId, MvpAward),
}

pub struct RotationService {
    players: Arc<dyn PlayerStore>,
    events: Arc<dyn EventStore>,
    catalog: Arc<dyn RecognitionCatalog>,
    clock: Arc<dyn Clock>,
    config: RotationConfig,
    event_locks: KeyedLocks<EventId>,
    player_locks: KeyedLocks<PlayerId>,
    cycle_gate: RwLock<()>,
}

impl RotationService {
    pub(crate) fn new(
        players: Arc<dyn PlayerStore>,
        events: Arc<dyn EventStore>,
        catalog: Arc<dyn RecognitionCatalog>,
        clock: Arc<dyn Clock>,
        config: RotationConfig,
    ) -> Self {
        Self {
            players,
            events,
            catalog,
            clock,
            config,
            event_locks: KeyedLocks::new(),
            player_locks: KeyedLocks::new(),
            cycle_gate: RwLock::new(()),
        }
    }

    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub async fn list_candidates(&self) -> Result<Vec<Candidate>> {
        let players = self.players.list_active_players().await?;
        Ok(list_candidates(&players))
    }

    /// Derived from one consistent store read; never mixes a cycle number
    /// with flags from either side of a reset.
    pub async fn rotation_status(&self) -> Result<RotationStatus> {
        let (cycle, players) = self.players.rotation_view().await?;
        Ok(rotation_status(cycle, &players))
    }

    /// The top-ranked candidate; fails when nobody is in rotation.
    pub async fn recommend_next(&self) -> Result<Candidate> {
        let players = self.players.list_active_players().await?;
        next_candidate(&players).ok_or(RotationError::NoActivePlayers)
    }

    pub async fn list_types(&self) -> Result<Vec<RecognitionType>> {
        self.catalog.list_types().await
    }

    /// Awarded events, newest first. `None` uses the configured limit.
    pub async fn history(&self, limit: Option<usize>) -> Result<Vec<HistoryItem>> {
        let events = self.events.list_events().await?;
        let players = self.players.list_players().await?;
        Ok(mvp_history(
            &events,
            &players,
            limit.unwrap_or(self.config.history_limit),
        ))
    }

    pub async fn event_log(&self, event_id: EventId) -> Result<Vec<EventHistoryEntry>> {
        self.require_event(event_id).await?;
        self.events.list_history(event_id).await
    }

    pub async fn stats(&self) -> Result<MvpStats> {
        let events = self.events.list_events().await?;
        let players = self.players.list_players().await?;
        Ok(mvp_stats(&events, &players, self.config.top_mvps_limit))
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Give the event's MVP award to a player.
    ///
    /// Fails without side effects if the event already has an MVP; use
    /// [`RotationService::reassign`] to correct one.
    pub async fn assign(
        &self,
        event_id: EventId,
        request: &AssignRequest,
    ) -> Result<AssignmentResult> {
        let valid = request.validate(&self.config.default_mvp_type)?;

        let _gate = self.cycle_gate.read().await;
        let _event_guard = self.event_locks.lock(&event_id).await;
        let _player_guard = self.player_locks.lock(&valid.player_id).await;

        let event = self.require_event(event_id).await?;
        let player = self.require_active_player(valid.player_id).await?;
        let kind = self.require_type(&valid.mvp_type).await?;
        if let Some(existing) = &event.mvp {
            warn!(
                event_id = %event_id,
                current_mvp = %existing.player_id,
                requested = %player.id,
                "event already has an MVP"
            );
            return Err(RotationError::MvpAlreadyAssigned {
                event_id,
                player_id: existing.player_id,
            });
        }

        let cycle = self.players.current_cycle().await?;
        let now = self.clock.now();
        let award = MvpAward {
            player_id: player.id,
            type_name: kind.name.clone(),
            points: kind.points,
            cycle,
            assigned_at: now,
        };
        let entry = EventHistoryEntry::new(
            event_id,
            HistoryAction::MvpAssigned,
            format!(
                "Player '{}' assigned as {} MVP ({} points)",
                player.name, kind.name, kind.points
            ),
            now,
        );

        let mut undo = Vec::new();
        let applied = async {
            self.events.record_event_mvp(event_id, award).await?;
            undo.push(Undo::ClearAward(event_id));

            let fields = player.mvp.recognized(&kind.name, kind.points, now);
            self.players
                .update_player_mvp_fields(player.id, fields)
                .await?;
            undo.push(Undo::PlayerFields(player.id, player.mvp.clone()));

            // Read before the history append so an Err always means nothing
            // was committed.
            let status = self.rotation_status().await?;
            self.events.append_history(entry).await?;
            Ok::<_, RotationError>(status)
        }
        .await;
        let status = match applied {
            Ok(status) => status,
            Err(err) => {
                self.rollback(undo).await;
                return Err(err);
            }
        };

        info!(
            event_id = %event_id,
            player_id = %player.id,
            mvp_type = %kind.name,
            points = kind.points,
            cycle,
            "mvp assigned"
        );

        Ok(AssignmentResult {
            event_id,
            player_id: player.id,
            type_name: kind.name,
            points_awarded: kind.points,
            replaced_player_id: None,
            status,
        })
    }

    /// Replace the event's existing MVP award.
    ///
    /// The previous recipient loses exactly what the old award gave them
    /// (count, the points recorded on the award, and the cycle flag if no
    /// other award this cycle keeps it); then the new award is applied as in
    /// [`RotationService::assign`].
    pub async fn reassign(
        &self,
        event_id: EventId,
        request: &AssignRequest,
    ) -> Result<AssignmentResult> {
        let valid = request.validate(&self.config.default_mvp_type)?;

        let _gate = self.cycle_gate.read().await;
        let _event_guard = self.event_locks.lock(&event_id).await;

        let event = self.require_event(event_id).await?;
        let Some(previous) = event.mvp.clone() else {
            return Err(RotationError::NoMvpAssigned(event_id));
        };
        let _player_guards = self
            .player_locks
            .lock_all(&[previous.player_id, valid.player_id])
            .await;

        let new_player = self.require_active_player(valid.player_id).await?;
        let kind = self.require_type(&valid.mvp_type).await?;
        let same_player = previous.player_id == new_player.id;
        let previous_player = if same_player {
            Some(new_player.clone())
        } else {
            self.players.get_player(previous.player_id).await?
        };

        let cycle = self.players.current_cycle().await?;
        let now = self.clock.now();
        let reversed = match &previous_player {
            Some(p) => Some(self.reverse_award(p, event_id, &previous, cycle).await?),
            None => None,
        };

        let base = if same_player {
            reversed.clone().unwrap_or_default()
        } else {
            new_player.mvp.clone()
        };
        let new_fields = base.recognized(&kind.name, kind.points, now);
        let award = MvpAward {
            player_id: new_player.id,
            type_name: kind.name.clone(),
            points: kind.points,
            cycle,
            assigned_at: now,
        };
        let previous_name = previous_player
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| previous.player_id.to_string());
        let entry = EventHistoryEntry::new(
            event_id,
            HistoryAction::MvpReassigned,
            format!(
                "MVP reassigned from '{}' to '{}' as {} ({} points)",
                previous_name, new_player.name, kind.name, kind.points
            ),
            now,
        );

        let mut undo = Vec::new();
        let applied = async {
            self.events.clear_event_mvp(event_id).await?;
            undo.push(Undo::RestoreAward(event_id, previous.clone()));

            if !same_player
                && let (Some(p), Some(fields)) = (&previous_player, reversed)
            {
                self.players.update_player_mvp_fields(p.id, fields).await?;
                undo.push(Undo::PlayerFields(p.id, p.mvp.clone()));
            }

            self.events.record_event_mvp(event_id, award).await?;
            undo.push(Undo::ClearAward(event_id));

            self.players
                .update_player_mvp_fields(new_player.id, new_fields)
                .await?;
            undo.push(Undo::PlayerFields(new_player.id, new_player.mvp.clone()));

            let status = self.rotation_status().await?;
            self.events.append_history(entry).await?;
            Ok::<_, RotationError>(status)
        }
        .await;
        let status = match applied {
            Ok(status) => status,
            Err(err) => {
                self.rollback(undo).await;
                return Err(err);
            }
        };

        info!(
            event_id = %event_id,
            previous_player_id = %previous.player_id,
            player_id = %new_player.id,
            mvp_type = %kind.name,
            points = kind.points,
            cycle,
            "mvp reassigned"
        );

        Ok(AssignmentResult {
            event_id,
            player_id: new_player.id,
            type_name: kind.name,
            points_awarded: kind.points,
            replaced_player_id: Some(previous.player_id),
            status,
        })
    }

    /// Start a new cycle: every player's flag is cleared, lifetime history is
    /// kept. Allowed at any time, including before the rotation completes.
    pub async fn reset(&self) -> Result<u32> {
        let _gate = self.cycle_gate.write().await;
        let status = self.rotation_status().await?;
        let new_cycle = self.players.begin_new_cycle().await?;

        info!(
            previous_cycle = status.current_cycle_number,
            new_cycle,
            rotation_complete = status.rotation_complete,
            players_pending_mvp = status.players_pending_mvp,
            "rotation reset"
        );
        Ok(new_cycle)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    async fn require_event(&self, id: EventId) -> Result<Event> {
        self.events
            .get_event(id)
            .await?
            .ok_or(RotationError::EventNotFound(id))
    }

    async fn require_active_player(&self, id: PlayerId) -> Result<Player> {
        let player = self
            .players
            .get_player(id)
            .await?
            .ok_or(RotationError::PlayerNotFound(id))?;
        if !player.is_active {
            return Err(RotationError::PlayerInactive(id));
        }
        Ok(player)
    }

    async fn require_type(&self, name: &str) -> Result<RecognitionType> {
        self.catalog
            .get_type(name)
            .await?
            .ok_or_else(|| RotationError::RecognitionTypeNotFound(name.to_string()))
    }

    /// `player`'s fields with `award` (on `event_id`) taken back.
    async fn reverse_award(
        &self,
        player: &Player,
        event_id: EventId,
        award: &MvpAward,
        current_cycle: u32,
    ) -> Result<MvpFields> {
        let others: Vec<MvpAward> = self
            .events
            .list_events()
            .await?
            .into_iter()
            .filter(|e| e.id != event_id)
            .filter_map(|e| e.mvp)
            .filter(|a| a.player_id == player.id)
            .collect();

        let mut fields = player.mvp.clone();
        fields.mvp_count = fields.mvp_count.saturating_sub(1);
        fields.mvp_points = fields.mvp_points.saturating_sub(award.points);

        // Only rewind "last" if this award is what set it.
        if fields.last_mvp_date == Some(award.assigned_at) {
            let latest = others.iter().max_by_key(|a| a.assigned_at);
            fields.last_mvp_date = latest.map(|a| a.assigned_at);
            fields.last_mvp_type = latest.map(|a| a.type_name.clone());
        }

        if award.cycle == current_cycle {
            fields.has_been_mvp_this_cycle = others.iter().any(|a| a.cycle == current_cycle);
        }

        Ok(fields)
    }

    async fn rollback(&self, undo: Vec<Undo>) {
        for step in undo.into_iter().rev() {
            let result = match step {
                Undo::PlayerFields(id, fields) => {
                    self.players.update_player_mvp_fields(id, fields).await
                }
                Undo::ClearAward(event_id) => {
                    self.events.clear_event_mvp(event_id).await.map(|_| ())
                }
                Undo::RestoreAward(event_id, award) => {
                    match self.events.clear_event_mvp(event_id).await {
                        Ok(_) => self.events.record_event_mvp(event_id, award).await,
                        Err(e) => Err(e),
                    }
                }
            };
            if let Err(err) = result {
                error!(error = %err, "failed to undo partial mvp write");
            }
        }
    }
}
