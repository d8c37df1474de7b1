//! Impls - ports の実装（開発用・テスト用）
//!
//! # 含まれる実装
//! - **InMemoryRotationStore**: PlayerStore + EventStore
//! - **StaticCatalog**: RecognitionCatalog
//! - **StoreSnapshot**: CLI の state file 形式
//! - **seed_demo**: デモデータ

pub mod catalog;
pub mod demo;
pub mod inmem_store;
pub mod snapshot;

// 主要な型を再エクスポート
pub use self::catalog::StaticCatalog;
pub use self::demo::seed_demo;
pub use self::inmem_store::InMemoryRotationStore;
pub use self::snapshot::StoreSnapshot;
