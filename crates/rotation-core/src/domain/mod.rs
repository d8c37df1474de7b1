//! Domain model (ids, players, recognition types, events, rotation views, errors).

pub mod errors;
pub mod event;
pub mod ids;
pub mod player;
pub mod recognition;
pub mod report;
pub mod rotation;

pub use errors::{ErrorKind, Result, RotationError};
pub use event::{Event, EventHistoryEntry, EventStatus, HistoryAction, MvpAward};
pub use ids::{AllianceId, EventId, Id, IdMarker, ParseIdError, PlayerId};
pub use player::{MvpFields, Player};
pub use recognition::{DEFAULT_RECOGNITION_TYPE, RecognitionType};
pub use report::{EventSummary, HistoryItem, MvpStats, PlayerSummary, TopMvp};
pub use rotation::{
    AssignRequest, AssignmentResult, Candidate, Priority, RotationStatus, ValidAssignment,
};
