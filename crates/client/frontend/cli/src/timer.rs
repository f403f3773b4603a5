//! Elapsed play time shown under the grid.
//!
//! Purely decorative: the timer never touches session state.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct ElapsedTimer {
    started: Instant,
    stopped: Option<Duration>,
}

impl Default for ElapsedTimer {
    fn default() -> Self {
        Self::start()
    }
}

impl ElapsedTimer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            stopped: None,
        }
    }

    /// Freezes the displayed time; later calls keep the first value.
    pub fn stop(&mut self) {
        if self.stopped.is_none() {
            self.stopped = Some(self.started.elapsed());
        }
    }

    /// Restarts from zero and returns the timer it replaced.
    pub fn reset(&mut self) -> Self {
        std::mem::replace(self, Self::start())
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        self.stopped.unwrap_or_else(|| self.started.elapsed())
    }
}

/// `<m>m <s>s`
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}m {}s", secs / 60, secs % 60)
}
