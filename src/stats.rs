//! Fastest/average duration tracking for the driver's status line.

use std::time::Duration;

#[derive(Clone, Copy, Debug, Default)]
pub struct TimingStats {
    total: Duration,
    lowest: Option<Duration>,
    samples: u64,
}

impl TimingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sample: Duration) {
        self.total += sample;
        self.lowest = Some(self.lowest.map_or(sample, |lowest| lowest.min(sample)));
        self.samples += 1;
    }

    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn lowest(&self) -> Option<Duration> {
        self.lowest
    }

    pub fn average(&self) -> Option<Duration> {
        (self.samples > 0)
            .then(|| Duration::from_nanos((self.total.as_nanos() / u128::from(self.samples)) as u64))
    }

    /// Lowest duration in milliseconds, 0 before any sample.
    pub fn lowest_ms(&self) -> f64 {
        self.lowest.map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }

    /// Average duration in milliseconds, 0 before any sample.
    pub fn average_ms(&self) -> f64 {
        self.average().map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// `#<tick> - World Tick (L: ..; A: ..) - Rendering (L: ..; A: ..)`
pub fn status_line(generation: u64, tick: &TimingStats, render: &TimingStats) -> String {
    format!(
        "#{generation} - World Tick (L: {:.3}; A: {:.3}) - Rendering (L: {:.3}; A: {:.3})",
        tick.lowest_ms(),
        tick.average_ms(),
        render.lowest_ms(),
        render.average_ms(),
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{TimingStats, status_line};

    #[test]
    fn empty_stats_report_zero() {
        let stats = TimingStats::new();
        assert_eq!(stats.samples(), 0);
        assert_eq!(stats.lowest(), None);
        assert_eq!(stats.average(), None);
        assert_eq!(stats.lowest_ms(), 0.0);
    }

    #[test]
    fn tracks_lowest_and_average() {
        let mut stats = TimingStats::new();
        stats.record(Duration::from_millis(4));
        stats.record(Duration::from_millis(2));
        stats.record(Duration::from_millis(6));

        assert_eq!(stats.samples(), 3);
        assert_eq!(stats.lowest(), Some(Duration::from_millis(2)));
        assert_eq!(stats.average(), Some(Duration::from_millis(4)));
    }

    #[test]
    fn status_line_uses_milliseconds() {
        let mut tick = TimingStats::new();
        tick.record(Duration::from_micros(1500));
        let mut render = TimingStats::new();
        render.record(Duration::from_micros(250));

        assert_eq!(
            status_line(7, &tick, &render),
            "#7 - World Tick (L: 1.500; A: 1.500) - Rendering (L: 0.250; A: 0.250)"
        );
    }
}
