//! IdGenerator port - ID 生成の抽象化
//!
//! # 実装
//! - **UlidGenerator**: Clock ベースの ULID（本番用）

use crate::domain::ids::{AllianceId, EventId, PlayerId};
use crate::ports::Clock;
use ulid::Ulid;

/// IdGenerator は players / events / alliances の ID を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数タスクから使える）
pub trait IdGenerator: Send + Sync {
    fn generate_player_id(&self) -> PlayerId;

    fn generate_event_id(&self) -> EventId;

    fn generate_alliance_id(&self) -> AllianceId;
}

/// UlidGenerator は Clock の時刻を timestamp 部分に使う
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    fn next_ulid(&self) -> Ulid {
        let timestamp_ms = self.clock.now().timestamp_millis().max(0) as u64;
        Ulid::from_parts(timestamp_ms, rand::random())
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_player_id(&self) -> PlayerId {
        PlayerId::from(self.next_ulid())
    }

    fn generate_event_id(&self) -> EventId {
        EventId::from(self.next_ulid())
    }

    fn generate_alliance_id(&self) -> AllianceId {
        AllianceId::from(self.next_ulid())
    }
}
