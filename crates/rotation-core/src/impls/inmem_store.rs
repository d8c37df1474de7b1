//! In-memory player/event store.
//!
//! One `tokio::sync::Mutex` guards players, events, history and the cycle
//! number together, so every port call sees and leaves a consistent state.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::snapshot::StoreSnapshot;
use crate::domain::{
    Event, EventHistoryEntry, EventId, MvpAward, MvpFields, Player, PlayerId, Result,
    RotationError,
};
use crate::ports::{EventStore, PlayerStore};

/// In-memory store state.
struct InMemoryState {
    /// All players (single source of truth for MVP fields).
    players: BTreeMap<PlayerId, Player>,

    /// All events (single source of truth for awards).
    events: BTreeMap<EventId, Event>,

    /// Event log, append-only.
    history: Vec<EventHistoryEntry>,

    /// Starts at 1.
    current_cycle: u32,
}

impl InMemoryState {
    fn new() -> Self {
        Self {
            players: BTreeMap::new(),
            events: BTreeMap::new(),
            history: Vec::new(),
            current_cycle: 1,
        }
    }

    fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            players: snapshot.players.into_iter().map(|p| (p.id, p)).collect(),
            events: snapshot.events.into_iter().map(|e| (e.id, e)).collect(),
            history: snapshot.history,
            current_cycle: snapshot.current_cycle.max(1),
        }
    }

    fn to_snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            current_cycle: self.current_cycle,
            players: self.players.values().cloned().collect(),
            events: self.events.values().cloned().collect(),
            history: self.history.clone(),
            recognition_types: None,
        }
    }

    fn begin_new_cycle(&mut self) -> u32 {
        for player in self.players.values_mut() {
            player.mvp = player.mvp.with_cycle_cleared();
        }
        self.current_cycle += 1;
        self.current_cycle
    }
}

/// In-memory implementation of [`PlayerStore`] and [`EventStore`].
///
/// Cloning shares the same underlying state.
#[derive(Clone)]
pub struct InMemoryRotationStore {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryRotationStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(InMemoryState::new())),
        }
    }

    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            state: Arc::new(Mutex::new(InMemoryState::from_snapshot(snapshot))),
        }
    }

    /// Export everything except the catalog.
    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.lock().await.to_snapshot()
    }

    /// Insert or replace a player (player-management side).
    pub async fn upsert_player(&self, player: Player) {
        let mut state = self.state.lock().await;
        state.players.insert(player.id, player);
    }

    /// Insert or replace an event (event-management side).
    pub async fn upsert_event(&self, event: Event) {
        let mut state = self.state.lock().await;
        state.events.insert(event.id, event);
    }

    /// Activate or deactivate a player. MVP fields are left untouched.
    pub async fn set_player_active(&self, id: PlayerId, is_active: bool) -> Result<()> {
        let mut state = self.state.lock().await;
        let player = state
            .players
            .get_mut(&id)
            .ok_or(RotationError::PlayerNotFound(id))?;
        player.is_active = is_active;
        Ok(())
    }
}

impl Default for InMemoryRotationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerStore for InMemoryRotationStore {
    async fn list_active_players(&self) -> Result<Vec<Player>> {
        let state = self.state.lock().await;
        Ok(state
            .players
            .values()
            .filter(|p| p.is_active)
            .cloned()
            .collect())
    }

    async fn list_players(&self) -> Result<Vec<Player>> {
        let state = self.state.lock().await;
        Ok(state.players.values().cloned().collect())
    }

    async fn get_player(&self, id: PlayerId) -> Result<Option<Player>> {
        let state = self.state.lock().await;
        Ok(state.players.get(&id).cloned())
    }

    async fn update_player_mvp_fields(&self, id: PlayerId, fields: MvpFields) -> Result<()> {
        let mut state = self.state.lock().await;
        let player = state
            .players
            .get_mut(&id)
            .ok_or(RotationError::PlayerNotFound(id))?;
        player.mvp = fields;
        Ok(())
    }

    async fn current_cycle(&self) -> Result<u32> {
        Ok(self.state.lock().await.current_cycle)
    }

    async fn rotation_view(&self) -> Result<(u32, Vec<Player>)> {
        let state = self.state.lock().await;
        let active = state
            .players
            .values()
            .filter(|p| p.is_active)
            .cloned()
            .collect();
        Ok((state.current_cycle, active))
    }

    async fn begin_new_cycle(&self) -> Result<u32> {
        Ok(self.state.lock().await.begin_new_cycle())
    }
}

#[async_trait]
impl EventStore for InMemoryRotationStore {
    async fn get_event(&self, id: EventId) -> Result<Option<Event>> {
        let state = self.state.lock().await;
        Ok(state.events.get(&id).cloned())
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        let state = self.state.lock().await;
        Ok(state.events.values().cloned().collect())
    }

    async fn record_event_mvp(&self, event_id: EventId, award: MvpAward) -> Result<()> {
        let mut state = self.state.lock().await;
        let event = state
            .events
            .get_mut(&event_id)
            .ok_or(RotationError::EventNotFound(event_id))?;
        if let Some(existing) = &event.mvp {
            return Err(RotationError::MvpAlreadyAssigned {
                event_id,
                player_id: existing.player_id,
            });
        }
        event.mvp = Some(award);
        Ok(())
    }

    async fn clear_event_mvp(&self, event_id: EventId) -> Result<Option<MvpAward>> {
        let mut state = self.state.lock().await;
        let event = state
            .events
            .get_mut(&event_id)
            .ok_or(RotationError::EventNotFound(event_id))?;
        Ok(event.mvp.take())
    }

    async fn append_history(&self, entry: EventHistoryEntry) -> Result<()> {
        let mut state = self.state.lock().await;
        state.history.push(entry);
        Ok(())
    }

    async fn list_history(&self, event_id: EventId) -> Result<Vec<EventHistoryEntry>> {
        let state = self.state.lock().await;
        Ok(state
            .history
            .iter()
            .filter(|e| e.event_id == event_id)
            .cloned()
            .collect())
    }
}
