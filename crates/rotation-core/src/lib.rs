//! rotation-core
//!
//! MVP rotation scheduling for an alliance dashboard: rank who should be
//! recognized next, record awards on events, and reset cycles.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, player, recognition, event, rotation, report, errors）
//! - **ports**: 抽象化レイヤー（PlayerStore, EventStore, RecognitionCatalog, Clock, IdGenerator）
//! - **app**: アプリケーションロジック（builder, service, ranking, status, reports, locks）
//! - **impls**: 実装（InMemoryRotationStore, StaticCatalog, StoreSnapshot, demo data）
//! - **config**: RotationConfig

pub mod domain;
pub mod ports;
pub mod app;
pub mod impls;
pub mod config;
