//! RotationServiceBuilder - ports のワイヤリング
//!
//! # 起動時検証
//! - 既定の recognition type（config.default_mvp_type）が catalog にあること
//! - expect_types() で指定した type が全て catalog にあること
//!
//! 不足があれば build() が BuildError を返す。

use std::collections::BTreeSet;
use std::sync::Arc;

use super::service::RotationService;
use crate::config::RotationConfig;
use crate::domain::RotationError;
use crate::impls::StaticCatalog;
use crate::ports::{Clock, EventStore, PlayerStore, RecognitionCatalog, SystemClock};

/// # 使用例
/// ```ignore
/// let service = RotationServiceBuilder::with_store(Arc::new(store))
///     .expect_types(&["Simple", "Duke"])
///     .build()
///     .await?;
/// ```
pub struct RotationServiceBuilder {
    players: Arc<dyn PlayerStore>,
    events: Arc<dyn EventStore>,
    catalog: Arc<dyn RecognitionCatalog>,
    clock: Arc<dyn Clock>,
    config: RotationConfig,
    expected_types: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing recognition types: {0:?}. These types were expected but not in the catalog.")]
    MissingRecognitionTypes(Vec<String>),

    #[error("failed to read recognition catalog: {0}")]
    Catalog(#[from] RotationError),
}

impl RotationServiceBuilder {
    /// Default catalog and the system clock.
    pub fn new(players: Arc<dyn PlayerStore>, events: Arc<dyn EventStore>) -> Self {
        Self {
            players,
            events,
            catalog: Arc::new(StaticCatalog::default()),
            clock: Arc::new(SystemClock),
            config: RotationConfig::default(),
            expected_types: None,
        }
    }

    /// One store serving both ports (e.g. `InMemoryRotationStore`).
    pub fn with_store<S>(store: Arc<S>) -> Self
    where
        S: PlayerStore + EventStore + 'static,
    {
        Self::new(store.clone(), store)
    }

    pub fn catalog(mut self, catalog: Arc<dyn RecognitionCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(mut self, config: RotationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn expect_types(mut self, type_names: &[&str]) -> Self {
        self.expected_types = Some(type_names.iter().map(|t| t.to_string()).collect());
        self
    }

    pub async fn build(self) -> Result<RotationService, BuildError> {
        let known: Vec<String> = self
            .catalog
            .list_types()
            .await?
            .into_iter()
            .map(|t| t.name)
            .collect();

        let mut required = vec![self.config.default_mvp_type.clone()];
        required.extend(self.expected_types.iter().flatten().cloned());

        let missing: BTreeSet<String> = required
            .into_iter()
            .filter(|name| !known.contains(name))
            .collect();
        if !missing.is_empty() {
            return Err(BuildError::MissingRecognitionTypes(
                missing.into_iter().collect(),
            ));
        }

        Ok(RotationService::new(
            self.players,
            self.events,
            self.catalog,
            self.clock,
            self.config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecognitionType;
    use crate::impls::InMemoryRotationStore;

    fn store() -> Arc<InMemoryRotationStore> {
        Arc::new(InMemoryRotationStore::new())
    }

    #[tokio::test]
    async fn test_build_success() {
        let service = RotationServiceBuilder::with_store(store())
            .expect_types(&["Simple", "Earl", "Duke"])
            .build()
            .await;
        assert!(service.is_ok());
    }

    #[tokio::test]
    async fn test_build_missing_types() {
        let service = RotationServiceBuilder::with_store(store())
            .expect_types(&["Duke", "Defense"])
            .build()
            .await;
        assert!(matches!(
            service,
            Err(BuildError::MissingRecognitionTypes(missing)) if missing == vec!["Defense".to_string()]
        ));
    }

    #[tokio::test]
    async fn test_build_missing_default_type() {
        let catalog = StaticCatalog::new(vec![RecognitionType::new("Duke", 5, "")]);
        let service = RotationServiceBuilder::with_store(store())
            .catalog(Arc::new(catalog))
            .build()
            .await;
        assert!(matches!(
            service,
            Err(BuildError::MissingRecognitionTypes(missing)) if missing == vec!["Simple".to_string()]
        ));
    }

    #[tokio::test]
    async fn test_build_reports_each_missing_type_once() {
        let catalog = StaticCatalog::new(vec![RecognitionType::new("Duke", 5, "")]);
        let service = RotationServiceBuilder::with_store(store())
            .catalog(Arc::new(catalog))
            .expect_types(&["Earl", "Duke", "Simple", "Earl"])
            .build()
            .await;
        assert!(matches!(
            service,
            Err(BuildError::MissingRecognitionTypes(missing))
                if missing == vec!["Earl".to_string(), "Simple".to_string()]
        ));
    }

    #[tokio::test]
    async fn test_build_custom_default_type() {
        let catalog = StaticCatalog::new(vec![RecognitionType::new("Duke", 5, "")]);
        let config = RotationConfig {
            default_mvp_type: "Duke".to_string(),
            ..RotationConfig::default()
        };
        let service = RotationServiceBuilder::with_store(store())
            .catalog(Arc::new(catalog))
            .config(config)
            .build()
            .await
            .unwrap();
        assert_eq!(service.config().default_mvp_type, "Duke");
    }
}
