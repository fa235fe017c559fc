//! Rooms — fixed logical zones of the monitored space.
//!
//! The room set is closed: it is defined once at process start and never
//! grows or shrinks afterwards. Every inbound event and control request is
//! gated against the registry.

use serde::{Deserialize, Serialize};

use crate::error::UnknownRoomError;

/// A logical zone of the monitored space; the unit of partitioning for
/// all readings and actions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Room(String);

impl Room {
    /// Create a room from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The room name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Room {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The closed set of known rooms.
///
/// Topic routing compares case-sensitively ([`contains`](Self::contains));
/// the control API resolves case-insensitively ([`resolve`](Self::resolve)).
#[derive(Debug, Clone)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
}

impl RoomRegistry {
    /// Build a registry from room names.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rooms: names.into_iter().map(Room::new).collect(),
        }
    }

    /// Whether `name` exactly matches a registered room.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rooms.iter().any(|room| room.as_str() == name)
    }

    /// Resolve `name` case-insensitively to the canonical registered room.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownRoomError`] when no registered room matches.
    pub fn resolve(&self, name: &str) -> Result<&Room, UnknownRoomError> {
        self.rooms
            .iter()
            .find(|room| room.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownRoomError {
                room: name.to_string(),
            })
    }

    /// Iterate over the registered rooms.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Number of registered rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for RoomRegistry {
    /// The compiled-in room set.
    fn default() -> Self {
        Self::new(["livingroom", "bedroom", "kitchen", "livingarea"])
    }
}
