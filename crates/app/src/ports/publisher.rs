//! Command publisher port — outbound light commands onto the bus.

use std::future::Future;

use luxhub_domain::action_log::LightAction;
use luxhub_domain::error::LuxError;
use luxhub_domain::room::Room;

/// Publishes light commands onto the message bus.
///
/// Publishing returns once the client accepts the message; there is no
/// wait for device confirmation. The resulting command event flows back
/// through the router, which is the single writer of action logs.
pub trait CommandPublisher {
    /// Publish a command for `room` with the normalized action.
    fn publish_command(
        &self,
        room: &Room,
        action: LightAction,
    ) -> impl Future<Output = Result<(), LuxError>> + Send;
}
