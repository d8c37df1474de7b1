//! StoreSnapshot - serde で JSON ファイルに保存できる全状態
//!
//! The CLI keeps the whole store in one JSON document between runs.

use serde::{Deserialize, Serialize};

use crate::domain::{Event, EventHistoryEntry, Player, RecognitionType};

fn first_cycle() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    #[serde(default = "first_cycle")]
    pub current_cycle: u32,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub history: Vec<EventHistoryEntry>,
    /// Custom catalog; `None` means the default three tiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recognition_types: Option<Vec<RecognitionType>>,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            current_cycle: first_cycle(),
            players: Vec::new(),
            events: Vec::new(),
            history: Vec::new(),
            recognition_types: None,
        }
    }
}

impl StoreSnapshot {
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_starts_at_cycle_one() {
        let snap = StoreSnapshot::from_json(b"{}").unwrap();
        assert_eq!(snap.current_cycle, 1);
        assert!(snap.players.is_empty());
        assert!(snap.recognition_types.is_none());
    }

    #[test]
    fn default_matches_empty_document() {
        assert_eq!(StoreSnapshot::default(), StoreSnapshot::from_json(b"{}").unwrap());
    }
}
