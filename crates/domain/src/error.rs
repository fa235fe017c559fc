//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`LuxError`]
//! at port boundaries. No `String` variants — every failure carries a
//! typed source.

/// Top-level error type crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum LuxError {
    /// An event or request referenced a room outside the registry.
    #[error(transparent)]
    UnknownRoom(#[from] UnknownRoomError),

    /// A control request carried an action that is not ON or OFF.
    #[error(transparent)]
    InvalidAction(#[from] InvalidActionError),

    /// An inbound payload or topic could not be interpreted.
    #[error(transparent)]
    MalformedPayload(#[from] MalformedPayloadError),

    /// The persistent store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The message bus rejected or failed an operation.
    #[error("bus error")]
    Bus(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The referenced room is not a member of the registry.
#[derive(Debug, thiserror::Error)]
#[error("unknown room: {room}")]
pub struct UnknownRoomError {
    pub room: String,
}

/// The requested light action is neither ON nor OFF.
#[derive(Debug, thiserror::Error)]
#[error("action must be ON or OFF, got {raw:?}")]
pub struct InvalidActionError {
    pub raw: String,
}

/// An inbound message could not be interpreted.
#[derive(Debug, thiserror::Error)]
#[error("malformed payload on {topic}: {detail}")]
pub struct MalformedPayloadError {
    pub topic: String,
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_unknown_room_with_name() {
        let err: LuxError = UnknownRoomError {
            room: "attic".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "unknown room: attic");
    }

    #[test]
    fn should_display_invalid_action_with_raw_input() {
        let err = InvalidActionError {
            raw: "toggle".to_string(),
        };
        assert_eq!(err.to_string(), "action must be ON or OFF, got \"toggle\"");
    }

    #[test]
    fn should_display_malformed_payload_with_topic() {
        let err = MalformedPayloadError {
            topic: "home/kitchen/lux".to_string(),
            detail: "not a number".to_string(),
        };
        assert!(err.to_string().contains("home/kitchen/lux"));
    }

    #[test]
    fn should_wrap_source_in_storage_variant() {
        let inner = std::io::Error::other("disk gone");
        let err = LuxError::Storage(Box::new(inner));
        assert_eq!(err.to_string(), "storage error");
        assert!(std::error::Error::source(&err).is_some());
    }
}
