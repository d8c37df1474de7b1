//! PlayerStore port - player レコードと cycle 番号の正本
//!
//! Player management owns creation and (de)activation; through this port the
//! scheduler only reads players and rewrites their [`MvpFields`].

use async_trait::async_trait;

use crate::domain::{MvpFields, Player, PlayerId, Result};

/// PlayerStore
///
/// # 設計原則
/// - `update_player_mvp_fields` は 5 フィールドを 1 単位で置き換える
/// - `begin_new_cycle` は「全 player の flag クリア + cycle 番号 +1」を原子的に行う
/// - cycle 番号は 1 から始まる
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Players with `is_active == true`.
    async fn list_active_players(&self) -> Result<Vec<Player>>;

    /// Every player, active or not.
    async fn list_players(&self) -> Result<Vec<Player>>;

    async fn get_player(&self, id: PlayerId) -> Result<Option<Player>>;

    /// Replace the player's MVP fields. Fails with `PlayerNotFound` if absent.
    async fn update_player_mvp_fields(&self, id: PlayerId, fields: MvpFields) -> Result<()>;

    async fn current_cycle(&self) -> Result<u32>;

    /// Cycle number and active players read together, so a concurrent
    /// `begin_new_cycle` is seen entirely or not at all.
    async fn rotation_view(&self) -> Result<(u32, Vec<Player>)>;

    /// Clear `has_been_mvp_this_cycle` on every player and return the new
    /// cycle number.
    async fn begin_new_cycle(&self) -> Result<u32>;
}
