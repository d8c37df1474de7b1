//! RecognitionCatalog port - MVP type の参照データ

use async_trait::async_trait;

use crate::domain::{RecognitionType, Result};

/// Static reference data; immutable during normal operation.
#[async_trait]
pub trait RecognitionCatalog: Send + Sync {
    /// All types, ordered by `order_index`.
    async fn list_types(&self) -> Result<Vec<RecognitionType>>;

    async fn get_type(&self, name: &str) -> Result<Option<RecognitionType>>;
}
