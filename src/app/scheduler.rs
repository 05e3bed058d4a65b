use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

/// Posts `message` immediately and then once per `period` until cancelled.
///
/// Ticks are not skipped or delayed by failures downstream; the receiver decides
/// what a tick means. Dropping the scheduler cancels it.
pub struct RefreshScheduler {
    period: Duration,
    handle: JoinHandle<()>,
}

impl RefreshScheduler {
    pub fn start<T>(period: Duration, tx: UnboundedSender<T>, message: T) -> Self
    where
        T: Clone + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(message.clone()).is_err() {
                    log::debug!("Refresh receiver dropped; stopping scheduler");
                    break;
                }
            }
        });

        Self { period, handle }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;
    use tokio::time::advance;

    const PERIOD: Duration = Duration::from_secs(30 * 60);

    #[tokio::test(start_paused = true)]
    async fn fires_immediately_then_every_period() {
        let (tx, mut rx) = unbounded_channel();
        let scheduler = RefreshScheduler::start(PERIOD, tx, "tick");
        assert_eq!(scheduler.period(), PERIOD);

        assert_eq!(rx.recv().await, Some("tick"));

        advance(PERIOD - Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err(), "no tick before the period elapses");

        advance(Duration::from_secs(1)).await;
        assert_eq!(rx.recv().await, Some("tick"));

        advance(PERIOD).await;
        assert_eq!(rx.recv().await, Some("tick"));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_future_ticks() {
        let (tx, mut rx) = unbounded_channel();
        let scheduler = RefreshScheduler::start(PERIOD, tx, ());
        assert_eq!(rx.recv().await, Some(()));

        scheduler.cancel();
        advance(PERIOD * 3).await;
        assert_eq!(rx.recv().await, None);
        assert!(scheduler.is_stopped());
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_receiver_goes_away() {
        let (tx, rx) = unbounded_channel();
        let scheduler = RefreshScheduler::start(PERIOD, tx, 1u8);
        drop(rx);

        advance(PERIOD).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(scheduler.is_stopped());
    }
}
