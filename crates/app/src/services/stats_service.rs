//! Stats service — aggregate counts over the append-only logs.

use luxhub_domain::action_log::{ActionLog, LightAction};
use luxhub_domain::error::LuxError;

use crate::ports::{ActionLogRepository, ReadingRepository};

/// How many recent action logs the summary carries.
const RECENT_LIMIT: usize = 10;

/// Aggregate statistics over stored readings and action logs.
#[derive(Debug, Clone)]
pub struct StatsSummary {
    pub total_readings: u64,
    pub total_actions: u64,
    /// Share of OFF actions, rounded to the nearest integer percent.
    /// Zero when no actions exist.
    pub energy_saving_percent: u8,
    /// The [`RECENT_LIMIT`] most recent action logs, newest-first.
    pub recent: Vec<ActionLog>,
}

/// Read-only façade over both repositories.
pub struct StatsService<RR, AR> {
    readings: RR,
    actions: AR,
}

impl<RR, AR> StatsService<RR, AR>
where
    RR: ReadingRepository,
    AR: ActionLogRepository,
{
    /// Create a new service over the given repositories.
    pub fn new(readings: RR, actions: AR) -> Self {
        Self { readings, actions }
    }

    /// Compute the aggregate summary.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from either repository.
    pub async fn summary(&self) -> Result<StatsSummary, LuxError> {
        let total_readings = self.readings.count().await?;
        let total_actions = self.actions.count().await?;
        let off_count = self.actions.count_by_action(LightAction::Off).await?;
        let recent = self.actions.recent(RECENT_LIMIT).await?;

        Ok(StatsSummary {
            total_readings,
            total_actions,
            energy_saving_percent: percent(off_count, total_actions),
            recent,
        })
    }
}

/// Rounded integer percentage, zero for an empty denominator.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
fn percent(part: u64, total: u64) -> u8 {
    if total == 0 {
        0
    } else {
        // Counts are far below 2^52, so the f64 round-trip is exact enough;
        // the result is clamped to 0..=100 by construction.
        ((part as f64 / total as f64) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use luxhub_domain::action_log::ActionReason;
    use luxhub_domain::reading::Reading;
    use luxhub_domain::room::Room;

    #[derive(Default)]
    struct InMemoryReadingRepo {
        store: Mutex<Vec<Reading>>,
    }

    impl ReadingRepository for InMemoryReadingRepo {
        async fn append(&self, reading: Reading) -> Result<Reading, LuxError> {
            self.store.lock().unwrap().push(reading.clone());
            Ok(reading)
        }

        async fn latest_for_room(&self, room: &Room) -> Result<Option<Reading>, LuxError> {
            Ok(self
                .store
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|reading| &reading.room == room)
                .cloned())
        }

        async fn count(&self) -> Result<u64, LuxError> {
            Ok(self.store.lock().unwrap().len() as u64)
        }
    }

    #[derive(Default)]
    struct InMemoryActionLogRepo {
        store: Mutex<Vec<ActionLog>>,
    }

    impl ActionLogRepository for InMemoryActionLogRepo {
        async fn append(&self, log: ActionLog) -> Result<ActionLog, LuxError> {
            self.store.lock().unwrap().push(log.clone());
            Ok(log)
        }

        async fn count(&self) -> Result<u64, LuxError> {
            Ok(self.store.lock().unwrap().len() as u64)
        }

        async fn count_by_action(&self, action: LightAction) -> Result<u64, LuxError> {
            Ok(self
                .store
                .lock()
                .unwrap()
                .iter()
                .filter(|log| log.action == action)
                .count() as u64)
        }

        async fn recent(&self, limit: usize) -> Result<Vec<ActionLog>, LuxError> {
            let store = self.store.lock().unwrap();
            Ok(store.iter().rev().take(limit).cloned().collect())
        }
    }

    fn service() -> StatsService<InMemoryReadingRepo, InMemoryActionLogRepo> {
        StatsService::new(
            InMemoryReadingRepo::default(),
            InMemoryActionLogRepo::default(),
        )
    }

    async fn push_action(
        service: &StatsService<InMemoryReadingRepo, InMemoryActionLogRepo>,
        action: LightAction,
    ) {
        service
            .actions
            .append(ActionLog::new(Room::new("kitchen"), action, ActionReason::Cmd))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn should_report_zero_percent_and_empty_recent_when_no_actions() {
        let summary = service().summary().await.unwrap();

        assert_eq!(summary.total_readings, 0);
        assert_eq!(summary.total_actions, 0);
        assert_eq!(summary.energy_saving_percent, 0);
        assert!(summary.recent.is_empty());
    }

    #[tokio::test]
    async fn should_report_75_percent_for_three_off_and_one_on() {
        let service = service();
        push_action(&service, LightAction::Off).await;
        push_action(&service, LightAction::Off).await;
        push_action(&service, LightAction::Off).await;
        push_action(&service, LightAction::On).await;

        let summary = service.summary().await.unwrap();
        assert_eq!(summary.total_actions, 4);
        assert_eq!(summary.energy_saving_percent, 75);
    }

    #[tokio::test]
    async fn should_round_percent_to_nearest_integer() {
        let service = service();
        push_action(&service, LightAction::Off).await;
        push_action(&service, LightAction::On).await;
        push_action(&service, LightAction::On).await;

        // 1/3 → 33.33…% rounds to 33.
        let summary = service.summary().await.unwrap();
        assert_eq!(summary.energy_saving_percent, 33);
    }

    #[tokio::test]
    async fn should_cap_recent_at_ten_entries_newest_first() {
        let service = service();
        for i in 0..12 {
            let action = if i == 11 {
                LightAction::On
            } else {
                LightAction::Off
            };
            push_action(&service, action).await;
        }

        let summary = service.summary().await.unwrap();
        assert_eq!(summary.recent.len(), 10);
        assert_eq!(summary.recent[0].action, LightAction::On);
    }

    #[tokio::test]
    async fn should_count_readings_in_summary() {
        let service = service();
        service
            .readings
            .append(Reading::new(Room::new("kitchen"), true, 10.0))
            .await
            .unwrap();

        let summary = service.summary().await.unwrap();
        assert_eq!(summary.total_readings, 1);
    }
}
