//! Periodic timers driven by injected elapsed time
//!
//! The host owns the clock and calls `update(dt)`. Timers only count down
//! while running; the simulator starts them on hatching and stops them when
//! the creature leaves the `Hatched` stage.

use crate::config::LifeConfig;

/// Repeating countdown
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicTimer {
    period: f32,
    until_next: f32,
    running: bool,
}

impl PeriodicTimer {
    /// Create a stopped timer
    pub fn new(period: f32) -> Self {
        Self {
            period,
            until_next: period,
            running: false,
        }
    }

    /// (Re)start a full period from now
    pub fn start(&mut self) {
        self.until_next = self.period;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Seconds until the next firing, None when stopped
    pub fn remaining(&self) -> Option<f32> {
        self.running.then_some(self.until_next)
    }

    /// Advance by `dt` seconds and return how many periods elapsed
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.running || dt <= 0.0 {
            return 0;
        }

        let mut fired = 0;
        self.until_next -= dt;
        while self.until_next <= 0.0 {
            self.until_next += self.period;
            fired += 1;
        }
        fired
    }

    fn elapse(&mut self, dt: f32) {
        if self.running {
            self.until_next -= dt;
        }
    }

    fn rearm(&mut self) {
        self.until_next += self.period;
    }
}

/// The simulator's recurring processes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeTimer {
    /// Stat decay, illness, ageing
    Status,
    /// Random mess
    Cleanliness,
    /// Care-quality sampling
    Wellness,
}

/// All life timers, fired in chronological order
#[derive(Debug, Clone)]
pub struct Schedule {
    // Declaration order breaks ties between timers due at the same instant
    timers: Vec<(LifeTimer, PeriodicTimer)>,
}

impl Schedule {
    pub fn new(config: &LifeConfig) -> Self {
        let mut timers = vec![
            (LifeTimer::Status, PeriodicTimer::new(config.status_tick_secs)),
            (
                LifeTimer::Cleanliness,
                PeriodicTimer::new(config.cleanliness_tick_secs),
            ),
        ];
        if let Some(secs) = config.wellness_sample_secs {
            timers.push((LifeTimer::Wellness, PeriodicTimer::new(secs)));
        }
        Self { timers }
    }

    pub fn start_all(&mut self) {
        for (_, timer) in &mut self.timers {
            timer.start();
        }
    }

    pub fn stop_all(&mut self) {
        for (_, timer) in &mut self.timers {
            timer.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.timers.iter().any(|(_, timer)| timer.is_running())
    }

    pub fn timer(&self, kind: LifeTimer) -> Option<&PeriodicTimer> {
        self.timers
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, timer)| timer)
    }

    /// Pop the next timer due within `budget` seconds
    ///
    /// Every running timer is advanced by the time that passes before the
    /// returned firing, which is reported alongside it. When nothing is due
    /// inside the budget, all timers advance by the whole budget and None is
    /// returned.
    pub fn next_due(&mut self, budget: f32) -> Option<(LifeTimer, f32)> {
        let mut next: Option<(usize, f32)> = None;
        for (index, (_, timer)) in self.timers.iter().enumerate() {
            if let Some(remaining) = timer.remaining() {
                let remaining = remaining.max(0.0);
                if next.is_none_or(|(_, best)| remaining < best) {
                    next = Some((index, remaining));
                }
            }
        }

        match next {
            Some((index, wait)) if wait <= budget => {
                for (_, timer) in &mut self.timers {
                    timer.elapse(wait);
                }
                let (kind, timer) = &mut self.timers[index];
                timer.rearm();
                Some((*kind, wait))
            }
            _ => {
                for (_, timer) in &mut self.timers {
                    timer.elapse(budget);
                }
                None
            }
        }
    }
}
