use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::debug;

/// The game tick timer. At most one interval exists, matching the
/// period the game currently asks for.
#[derive(Debug, Default)]
pub struct TickTimer {
    current: Option<(Duration, Interval)>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn period(&self) -> Option<Duration> {
        self.current.as_ref().map(|(period, _)| *period)
    }

    /// Drop or recreate the interval when the wanted period changes.
    /// Returns true if the timer was replaced or removed.
    pub fn sync(&mut self, wanted: Option<Duration>) -> bool {
        if self.period() == wanted {
            return false;
        }

        self.current = wanted.map(|period| {
            // The first tick comes one period from now, not immediately
            let mut timer = interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            (period, timer)
        });
        debug!("Tick timer now {:?}", wanted);
        true
    }

    /// Wait for the next tick; never resolves while stopped
    pub async fn tick(&mut self) {
        match &mut self.current {
            Some((_, timer)) => {
                timer.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sync_creates_and_drops_timer() {
        let mut timer = TickTimer::new();
        assert_eq!(timer.period(), None);
        assert!(!timer.sync(None));

        assert!(timer.sync(Some(Duration::from_millis(110))));
        assert_eq!(timer.period(), Some(Duration::from_millis(110)));
        assert!(!timer.sync(Some(Duration::from_millis(110))));

        assert!(timer.sync(Some(Duration::from_millis(108))));
        assert_eq!(timer.period(), Some(Duration::from_millis(108)));

        assert!(timer.sync(None));
        assert_eq!(timer.period(), None);
    }

    #[tokio::test]
    async fn test_tick_fires_after_period() {
        let mut timer = TickTimer::new();
        timer.sync(Some(Duration::from_millis(10)));

        let started = Instant::now();
        tokio::time::timeout(Duration::from_secs(2), timer.tick())
            .await
            .expect("Tick should fire");
        assert!(started.elapsed() >= Duration::from_millis(10));
    }

    #[tokio::test]
    async fn test_stopped_timer_never_fires() {
        let mut timer = TickTimer::new();
        let result = tokio::time::timeout(Duration::from_millis(30), timer.tick()).await;
        assert!(result.is_err());
    }
}
