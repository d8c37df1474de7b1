//! StaticCatalog - 固定の RecognitionCatalog 実装

use async_trait::async_trait;

use crate::domain::{RecognitionType, Result};
use crate::ports::RecognitionCatalog;

/// Catalog held in memory, sorted by `order_index` (then name) on creation.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    types: Vec<RecognitionType>,
}

impl StaticCatalog {
    /// Later duplicates of a name are dropped.
    pub fn new(types: Vec<RecognitionType>) -> Self {
        let mut unique: Vec<RecognitionType> = Vec::with_capacity(types.len());
        for t in types {
            if !unique.iter().any(|u| u.name == t.name) {
                unique.push(t);
            }
        }
        unique.sort_by(|a, b| {
            a.order_index
                .cmp(&b.order_index)
                .then_with(|| a.name.cmp(&b.name))
        });
        Self { types: unique }
    }

    pub fn types(&self) -> &[RecognitionType] {
        &self.types
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new(RecognitionType::default_catalog())
    }
}

#[async_trait]
impl RecognitionCatalog for StaticCatalog {
    async fn list_types(&self) -> Result<Vec<RecognitionType>> {
        Ok(self.types.clone())
    }

    async fn get_type(&self, name: &str) -> Result<Option<RecognitionType>> {
        Ok(self.types.iter().find(|t| t.name == name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_by_order_index() {
        let catalog = StaticCatalog::new(vec![
            RecognitionType::new("Defense", 10, "").with_order(2),
            RecognitionType::new("Attack", 7, "").with_order(1),
        ]);

        let names: Vec<String> = catalog
            .list_types()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Attack", "Defense"]);
    }

    #[tokio::test]
    async fn get_type_is_exact_match() {
        let catalog = StaticCatalog::default();
        assert_eq!(catalog.get_type("Duke").await.unwrap().unwrap().points, 5);
        assert!(catalog.get_type("duke").await.unwrap().is_none());
    }

    #[test]
    fn duplicate_names_keep_first() {
        let catalog = StaticCatalog::new(vec![
            RecognitionType::new("Simple", 1, ""),
            RecognitionType::new("Simple", 99, ""),
        ]);
        assert_eq!(catalog.types().len(), 1);
        assert_eq!(catalog.types()[0].points, 1);
    }
}
