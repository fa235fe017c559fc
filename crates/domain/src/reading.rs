//! Readings — merged motion+lux snapshots for a room at a point in time.
//!
//! Motion and lux arrive independently, one dimension per event. A reading
//! always carries *both* dimensions: the missing one is filled from the
//! most recent prior reading for the room (reconciliation). Readings are
//! append-only and never mutated.

use serde::{Deserialize, Serialize};

use crate::id::ReadingId;
use crate::room::Room;
use crate::time::Timestamp;

/// A one-dimensional sensor sample before reconciliation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorSample {
    /// Motion detected flag.
    Motion(bool),
    /// Ambient light level.
    Lux(f64),
}

/// A merged snapshot of motion+lux state for a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub id: ReadingId,
    pub room: Room,
    pub motion: bool,
    pub lux: f64,
    pub recorded_at: Timestamp,
}

impl Reading {
    /// Create a reading with a fresh id, recorded now.
    #[must_use]
    pub fn new(room: Room, motion: bool, lux: f64) -> Self {
        Self {
            id: ReadingId::new(),
            room,
            motion,
            lux,
            recorded_at: crate::time::now(),
        }
    }

    /// Create a builder for constructing a [`Reading`].
    #[must_use]
    pub fn builder(room: Room) -> ReadingBuilder {
        ReadingBuilder {
            id: None,
            room,
            motion: None,
            lux: None,
            recorded_at: None,
        }
    }

    /// Merge a one-dimensional sample against the last known reading for
    /// the same room.
    ///
    /// The dimension the sample does not carry is taken from `previous`;
    /// with no prior reading the defaults are `motion = false`, `lux = 0`.
    #[must_use]
    pub fn reconcile(room: Room, sample: SensorSample, previous: Option<&Reading>) -> Self {
        match sample {
            SensorSample::Motion(motion) => {
                Self::new(room, motion, previous.map_or(0.0, |prev| prev.lux))
            }
            SensorSample::Lux(lux) => {
                Self::new(room, previous.is_some_and(|prev| prev.motion), lux)
            }
        }
    }
}

/// Step-by-step builder for [`Reading`].
///
/// Unset fields default to `motion = false`, `lux = 0`, a fresh id, and
/// the current time.
#[derive(Debug)]
pub struct ReadingBuilder {
    id: Option<ReadingId>,
    room: Room,
    motion: Option<bool>,
    lux: Option<f64>,
    recorded_at: Option<Timestamp>,
}

impl ReadingBuilder {
    #[must_use]
    pub fn id(mut self, id: ReadingId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn motion(mut self, motion: bool) -> Self {
        self.motion = Some(motion);
        self
    }

    #[must_use]
    pub fn lux(mut self, lux: f64) -> Self {
        self.lux = Some(lux);
        self
    }

    #[must_use]
    pub fn recorded_at(mut self, recorded_at: Timestamp) -> Self {
        self.recorded_at = Some(recorded_at);
        self
    }

    /// Consume the builder and return a [`Reading`].
    #[must_use]
    pub fn build(self) -> Reading {
        Reading {
            id: self.id.unwrap_or_default(),
            room: self.room,
            motion: self.motion.unwrap_or(false),
            lux: self.lux.unwrap_or(0.0),
            recorded_at: self.recorded_at.unwrap_or_else(crate::time::now),
        }
    }
}
