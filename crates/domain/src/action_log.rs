//! Action logs — audit records of lights being commanded or confirmed
//! ON/OFF. Append-only and immutable.

use serde::{Deserialize, Serialize};

use crate::error::InvalidActionError;
use crate::id::ActionLogId;
use crate::room::Room;
use crate::time::Timestamp;

/// A normalized light action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LightAction {
    On,
    Off,
}

impl LightAction {
    /// Normalize a raw bus payload: anything not case-insensitively equal
    /// to "ON" — including malformed input — is OFF.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("ON") {
            Self::On
        } else {
            Self::Off
        }
    }

    /// Parse a control-API action, rejecting anything that is not
    /// case-insensitively ON or OFF.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidActionError`] for any other input.
    pub fn parse_strict(raw: &str) -> Result<Self, InvalidActionError> {
        if raw.eq_ignore_ascii_case("ON") {
            Ok(Self::On)
        } else if raw.eq_ignore_ascii_case("OFF") {
            Ok(Self::Off)
        } else {
            Err(InvalidActionError {
                raw: raw.to_string(),
            })
        }
    }

    /// The canonical uppercase wire form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

impl std::fmt::Display for LightAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LightAction {
    type Err = InvalidActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

/// Provenance of an action log entry: a command issued downstream versus
/// a state the device itself confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionReason {
    Cmd,
    State,
}

impl ActionReason {
    /// The canonical uppercase wire form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cmd => "CMD",
            Self::State => "STATE",
        }
    }
}

impl std::fmt::Display for ActionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActionReason {
    type Err = UnknownReasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CMD" => Ok(Self::Cmd),
            "STATE" => Ok(Self::State),
            other => Err(UnknownReasonError {
                raw: other.to_string(),
            }),
        }
    }
}

/// A stored reason tag that is neither CMD nor STATE.
#[derive(Debug, thiserror::Error)]
#[error("unknown action reason: {raw}")]
pub struct UnknownReasonError {
    pub raw: String,
}

/// An audit record of a light being commanded or confirmed ON/OFF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLog {
    pub id: ActionLogId,
    pub room: Room,
    pub action: LightAction,
    pub reason: ActionReason,
    pub recorded_at: Timestamp,
}

impl ActionLog {
    /// Create an action log with a fresh id, recorded now.
    #[must_use]
    pub fn new(room: Room, action: LightAction, reason: ActionReason) -> Self {
        Self {
            id: ActionLogId::new(),
            room,
            action,
            reason,
            recorded_at: crate::time::now(),
        }
    }

    /// Create a builder for constructing an [`ActionLog`].
    #[must_use]
    pub fn builder(room: Room, action: LightAction, reason: ActionReason) -> ActionLogBuilder {
        ActionLogBuilder {
            id: None,
            room,
            action,
            reason,
            recorded_at: None,
        }
    }
}

/// Step-by-step builder for [`ActionLog`].
#[derive(Debug)]
pub struct ActionLogBuilder {
    id: Option<ActionLogId>,
    room: Room,
    action: LightAction,
    reason: ActionReason,
    recorded_at: Option<Timestamp>,
}

impl ActionLogBuilder {
    #[must_use]
    pub fn id(mut self, id: ActionLogId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn recorded_at(mut self, recorded_at: Timestamp) -> Self {
        self.recorded_at = Some(recorded_at);
        self
    }

    /// Consume the builder and return an [`ActionLog`].
    #[must_use]
    pub fn build(self) -> ActionLog {
        ActionLog {
            id: self.id.unwrap_or_default(),
            room: self.room,
            action: self.action,
            reason: self.reason,
            recorded_at: self.recorded_at.unwrap_or_else(crate::time::now),
        }
    }
}
