//! Errors - エラー型と分類
//!
//! Every failure of a presented operation is a `RotationError`. Callers that
//! only need to pick an HTTP status / toast severity use [`RotationError::kind`].

use super::ids::{EventId, PlayerId};

/// ErrorKind は失敗の分類
///
/// - NotFound: 参照先（player / event / type）が存在しない
/// - InvalidState: 現在の状態では実行できない（二重割り当てなど）
/// - Validation: 呼び出し側の入力不足
/// - Storage: ports 実装側の障害
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidState,
    Validation,
    Storage,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RotationError {
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("event not found: {0}")]
    EventNotFound(EventId),

    #[error("recognition type not found: {0}")]
    RecognitionTypeNotFound(String),

    #[error("player {0} is inactive")]
    PlayerInactive(PlayerId),

    #[error("event {event_id} already has an MVP ({player_id})")]
    MvpAlreadyAssigned {
        event_id: EventId,
        player_id: PlayerId,
    },

    #[error("event {0} has no MVP to reassign")]
    NoMvpAssigned(EventId),

    #[error("no active players in rotation")]
    NoActivePlayers,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("storage error: {0}")]
    Storage(String),
}

impl RotationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RotationError::PlayerNotFound(_)
            | RotationError::EventNotFound(_)
            | RotationError::RecognitionTypeNotFound(_) => ErrorKind::NotFound,
            RotationError::PlayerInactive(_)
            | RotationError::MvpAlreadyAssigned { .. }
            | RotationError::NoMvpAssigned(_)
            | RotationError::NoActivePlayers => ErrorKind::InvalidState,
            RotationError::MissingField(_) | RotationError::InvalidField { .. } => {
                ErrorKind::Validation
            }
            RotationError::Storage(_) => ErrorKind::Storage,
        }
    }
}

pub type Result<T> = std::result::Result<T, RotationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use ulid::Ulid;

    fn player() -> PlayerId {
        PlayerId::from_ulid(Ulid::from_parts(1, 1))
    }

    fn event() -> EventId {
        EventId::from_ulid(Ulid::from_parts(2, 2))
    }

    #[rstest]
    #[case::player(RotationError::PlayerNotFound(player()), ErrorKind::NotFound)]
    #[case::event(RotationError::EventNotFound(event()), ErrorKind::NotFound)]
    #[case::kind(RotationError::RecognitionTypeNotFound("Defense".into()), ErrorKind::NotFound)]
    #[case::inactive(RotationError::PlayerInactive(player()), ErrorKind::InvalidState)]
    #[case::twice(
        RotationError::MvpAlreadyAssigned { event_id: event(), player_id: player() },
        ErrorKind::InvalidState
    )]
    #[case::no_mvp(RotationError::NoMvpAssigned(event()), ErrorKind::InvalidState)]
    #[case::empty(RotationError::NoActivePlayers, ErrorKind::InvalidState)]
    #[case::missing(RotationError::MissingField("player_id"), ErrorKind::Validation)]
    #[case::storage(RotationError::Storage("down".into()), ErrorKind::Storage)]
    fn errors_are_classified(#[case] err: RotationError, #[case] kind: ErrorKind) {
        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn message_names_the_event() {
        let err = RotationError::MvpAlreadyAssigned {
            event_id: event(),
            player_id: player(),
        };
        assert!(err.to_string().contains("event-"));
        assert!(err.to_string().contains("already has an MVP"));
    }
}
