//! App - アプリケーション層
//!
//! ports を組み合わせて rotation のロジックを実装します。
//!
//! # 主要コンポーネント
//! - **RotationServiceBuilder**: ports のワイヤリングと起動時検証
//! - **RotationService**: assign / reassign / reset と参照系
//! - **ranking / status / reports**: 純粋関数（player・event 集合から導出）
//! - **KeyedLocks**: レコード単位の排他

pub mod builder;
pub mod locks;
pub mod ranking;
pub mod reports;
pub mod service;
pub mod status;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, RotationServiceBuilder};
pub use self::locks::KeyedLocks;
pub use self::ranking::{list_candidates, next_candidate};
pub use self::reports::{mvp_history, mvp_stats};
pub use self::service::RotationService;
pub use self::status::rotation_status;
