//! Recognition (MVP) types: static reference data.

use serde::{Deserialize, Serialize};

/// Name of the type used when an assignment does not name one.
pub const DEFAULT_RECOGNITION_TYPE: &str = "Simple";

/// An MVP category and the points it is worth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionType {
    /// Unique key.
    pub name: String,
    pub points: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Listing order in the catalog.
    #[serde(default)]
    pub order_index: u32,
}

impl RecognitionType {
    pub fn new(name: impl Into<String>, points: u32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points,
            description: description.into(),
            icon: None,
            color: None,
            order_index: 0,
        }
    }

    pub fn with_presentation(mut self, icon: impl Into<String>, color: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self.color = Some(color.into());
        self
    }

    pub fn with_order(mut self, order_index: u32) -> Self {
        self.order_index = order_index;
        self
    }

    /// The three tiers the dashboard ships with.
    pub fn default_catalog() -> Vec<RecognitionType> {
        vec![
            RecognitionType::new(
                DEFAULT_RECOGNITION_TYPE,
                1,
                "Basic MVP recognition for standard performance",
            )
            .with_presentation("fas fa-trophy", "text-warning")
            .with_order(1),
            RecognitionType::new(
                "Earl",
                3,
                "Enhanced MVP recognition for excellent performance",
            )
            .with_presentation("fas fa-crown", "text-primary")
            .with_order(2),
            RecognitionType::new(
                "Duke",
                5,
                "Highest MVP recognition for outstanding performance",
            )
            .with_presentation("fas fa-chess-king", "text-danger")
            .with_order(3),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::simple("Simple", 1)]
    #[case::earl("Earl", 3)]
    #[case::duke("Duke", 5)]
    fn default_catalog_points(#[case] name: &str, #[case] points: u32) {
        let catalog = RecognitionType::default_catalog();
        let found = catalog.iter().find(|t| t.name == name).unwrap();
        assert_eq!(found.points, points);
    }

    #[test]
    fn default_catalog_is_listed_in_order() {
        let orders: Vec<u32> = RecognitionType::default_catalog()
            .iter()
            .map(|t| t.order_index)
            .collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }
}
