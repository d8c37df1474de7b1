//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! The scheduler talks to player management, event management and the
//! recognition catalog only through these traits; `impls` provides the
//! in-memory versions.

pub mod clock;
pub mod event_store;
pub mod id_generator;
pub mod player_store;
pub mod recognition_catalog;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_store::EventStore;
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::player_store::PlayerStore;
pub use self::recognition_catalog::RecognitionCatalog;
