//! Reading service — reconciles partial sensor samples into complete
//! readings.

use std::collections::HashMap;

use tokio::sync::Mutex;

use luxhub_domain::error::{LuxError, UnknownRoomError};
use luxhub_domain::reading::{Reading, SensorSample};
use luxhub_domain::room::{Room, RoomRegistry};

use crate::ports::ReadingRepository;

/// Application service for the fetch-last / merge / append sequence.
///
/// The sequence is not atomic at the repository level, so the service
/// serializes it per room: concurrent motion and lux events for the same
/// room cannot observe a stale "previous" reading. The room set is closed,
/// which lets the lock map be built once at construction.
pub struct ReadingService<R> {
    repo: R,
    locks: HashMap<Room, Mutex<()>>,
}

impl<R: ReadingRepository> ReadingService<R> {
    /// Create a new service backed by the given repository, with one lock
    /// per registered room.
    pub fn new(repo: R, registry: &RoomRegistry) -> Self {
        Self {
            repo,
            locks: registry
                .iter()
                .map(|room| (room.clone(), Mutex::new(())))
                .collect(),
        }
    }

    /// Merge `sample` with the last known reading for `room` and append
    /// the result. The previous reading is never mutated.
    ///
    /// # Errors
    ///
    /// Returns [`LuxError::UnknownRoom`] for a room outside the registry,
    /// or a storage error propagated from the repository.
    pub async fn reconcile(&self, room: &Room, sample: SensorSample) -> Result<Reading, LuxError> {
        let lock = self.locks.get(room).ok_or_else(|| UnknownRoomError {
            room: room.to_string(),
        })?;
        let _guard = lock.lock().await;

        let previous = self.repo.latest_for_room(room).await?;
        let reading = Reading::reconcile(room.clone(), sample, previous.as_ref());
        self.repo.append(reading).await
    }
}
