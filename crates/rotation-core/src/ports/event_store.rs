//! EventStore port - event レコードと MVP award、event log
//!
//! # 設計原則
//! - 1 event につき award は最大 1 つ（`record_event_mvp` は条件付き書き込み）
//! - 訂正は `clear_event_mvp` → `record_event_mvp` の明示的な 2 段階

use async_trait::async_trait;

use crate::domain::{Event, EventHistoryEntry, EventId, MvpAward, Result};

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn get_event(&self, id: EventId) -> Result<Option<Event>>;

    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Attach `award` to the event.
    ///
    /// Fails with `EventNotFound` if absent and `MvpAlreadyAssigned` if the
    /// event already carries an award; never overwrites.
    async fn record_event_mvp(&self, event_id: EventId, award: MvpAward) -> Result<()>;

    /// Detach and return the event's award (if any).
    async fn clear_event_mvp(&self, event_id: EventId) -> Result<Option<MvpAward>>;

    async fn append_history(&self, entry: EventHistoryEntry) -> Result<()>;

    /// History entries of one event, oldest first.
    async fn list_history(&self, event_id: EventId) -> Result<Vec<EventHistoryEntry>>;
}
