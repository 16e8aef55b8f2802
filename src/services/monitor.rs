//! Check loop monitor
//!
//! Runs sample -> evaluate -> dispatch once at startup and then on a fixed
//! grid anchored at the first check.

use crate::alerts::{Alert, AlertSink};
use crate::sampler::Sampler;
use crate::services::AlertService;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Configuration for the monitor
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Interval between check cycles
    pub interval: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(crate::config::DEFAULT_CHECK_INTERVAL_MS),
        }
    }
}

/// Check loop monitor
pub struct Monitor<S: Sampler, K: AlertSink> {
    config: MonitorConfig,
    sampler: S,
    alerts: AlertService<K>,
}

impl<S: Sampler, K: AlertSink> Monitor<S, K> {
    /// Create a new monitor
    pub fn new(config: MonitorConfig, sampler: S, alerts: AlertService<K>) -> Self {
        Self {
            config,
            sampler,
            alerts,
        }
    }

    /// Execute a single check cycle
    pub fn tick(&mut self, now: Instant) -> Vec<Alert> {
        let sample = self.sampler.sample();
        log::info!("{}", sample);
        self.alerts.handle(&sample, now)
    }

    /// Run the check loop forever
    pub fn run(&mut self) {
        self.run_cycles(None);
    }

    /// Run the check loop, stopping after `limit` cycles if given
    ///
    /// Cycle `k` is due at `start + k * interval`. A cycle that starts late
    /// runs immediately; nothing is skipped and the grid is never moved.
    pub fn run_cycles(&mut self, limit: Option<u32>) {
        let start = Instant::now();
        let mut completed: u32 = 0;

        loop {
            self.guarded_tick();
            completed = completed.saturating_add(1);

            if limit.is_some_and(|max| completed >= max) {
                break;
            }

            let delay = delay_until_next(start, self.config.interval, completed, Instant::now());
            std::thread::sleep(delay);
        }
    }

    /// Run one tick, logging instead of unwinding out of the loop
    fn guarded_tick(&mut self) {
        let now = Instant::now();
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.tick(now)));
        if let Err(payload) = result {
            log::error!(
                "Error during system usage check: {}",
                panic_message(payload.as_ref())
            );
        }
    }

    /// Get the monitor configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Sampler in use
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Alert service in use
    pub fn alerts(&self) -> &AlertService<K> {
        &self.alerts
    }
}

/// Instant at which the cycle after `completed` cycles is due
///
/// `None` when the grid point is past what `Instant` can represent.
fn next_due(start: Instant, interval: Duration, completed: u32) -> Option<Instant> {
    start.checked_add(interval.saturating_mul(completed))
}

/// Time to sleep before the next cycle
///
/// Falls back to a full interval when the grid point cannot be represented.
fn delay_until_next(start: Instant, interval: Duration, completed: u32, now: Instant) -> Duration {
    match next_due(start, interval, completed) {
        Some(due) => due.saturating_duration_since(now),
        None => interval,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::{AlertManager, PolicyConfig};
    use crate::config::Config;
    use crate::domain::{Metric, Sample};
    use crate::mock::{RecordingSink, ScriptedSampler};

    fn monitor(
        samples: Vec<Sample>,
        interval: Duration,
    ) -> Monitor<ScriptedSampler, RecordingSink> {
        let manager = AlertManager::new(PolicyConfig {
            thresholds: Config::default().threshold_config(),
            cooldown: Duration::from_millis(300_000),
        });
        Monitor::new(
            MonitorConfig { interval },
            ScriptedSampler::new(samples),
            AlertService::new(manager, RecordingSink::new()),
        )
    }

    #[test]
    fn test_monitor_config_default() {
        let config = MonitorConfig::default();
        assert_eq!(config.interval, Duration::from_secs(60));
    }

    #[test]
    fn test_tick_samples_and_dispatches() {
        let mut monitor = monitor(
            vec![Sample::new(95.0, 10.0, None)],
            Duration::from_secs(60),
        );
        let start = Instant::now();

        assert_eq!(monitor.tick(start).len(), 1);
        assert!(monitor
            .tick(start + Duration::from_millis(100_000))
            .is_empty());
        let refire = monitor.tick(start + Duration::from_millis(300_001));
        assert_eq!(refire.len(), 1);
        assert_eq!(refire[0].metric, Metric::Cpu);

        assert_eq!(monitor.sampler().calls(), 3);
        assert_eq!(monitor.alerts().sink().alerts().len(), 2);
    }

    #[test]
    fn test_run_cycles_checks_immediately_and_repeats() {
        let mut monitor = monitor(vec![Sample::new(1.0, 1.0, None)], Duration::from_millis(5));

        let started = Instant::now();
        monitor.run_cycles(Some(3));

        assert_eq!(monitor.sampler().calls(), 3);
        assert!(started.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_panicking_cycle_does_not_stop_loop() {
        let mut monitor = monitor(vec![Sample::new(1.0, 1.0, None)], Duration::from_millis(1));
        monitor.sampler.panic_on_call(1);

        monitor.run_cycles(Some(3));
        assert_eq!(monitor.sampler().calls(), 3);
    }

    #[test]
    fn test_next_due_is_anchored_at_start() {
        let start = Instant::now();
        let interval = Duration::from_millis(60_000);
        assert_eq!(next_due(start, interval, 0), Some(start));
        assert_eq!(
            next_due(start, interval, 3),
            Some(start + Duration::from_millis(180_000))
        );
    }

    #[test]
    fn test_delay_until_next_catches_up_when_late() {
        let start = Instant::now();
        let interval = Duration::from_millis(1_000);
        let late = start + Duration::from_millis(1_500);
        assert_eq!(delay_until_next(start, interval, 1, late), Duration::ZERO);
        assert_eq!(
            delay_until_next(start, interval, 2, late),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn test_huge_interval_does_not_overflow() {
        let config = crate::config::ConfigBuilder::new()
            .with_env(|key: &str| {
                (key == crate::config::env::CHECK_INTERVAL_MINUTES)
                    .then(|| "200000000000000000".to_string())
            })
            .unwrap()
            .build()
            .unwrap();
        let interval = config.schedule.check_interval().duration;

        let start = Instant::now();
        assert_eq!(next_due(start, interval, 1), None);
        assert_eq!(delay_until_next(start, interval, 1, start), interval);

        let mut monitor = monitor(vec![Sample::new(1.0, 1.0, None)], interval);
        monitor.run_cycles(Some(1));
        assert_eq!(monitor.sampler().calls(), 1);
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
        let payload: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
