use std::time::Duration;


/// Permission to advance a [`Stopwatch`]. Only the most recently issued source is honored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TickSource {
    generation: u64,
}

#[derive(Debug, Default)]
pub struct Stopwatch {
    time_elapsed: Duration,
    generation: u64,
    running: bool,
}

impl Stopwatch {
    pub fn new() -> Self {
        Default::default()
    }

    /// Starts counting and invalidates every previously issued source.
    pub fn start(&mut self) -> TickSource {
        self.stop();
        self.running = true;
        TickSource {
            generation: self.generation,
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.generation += 1;
        }
    }

    pub fn reset(&mut self) {
        self.stop();
        self.time_elapsed = Duration::default();
    }

    /// Returns false when the tick was discarded.
    pub fn tick(&mut self, source: &TickSource, dt: Duration) -> bool {
        if !self.running || source.generation != self.generation {
            return false;
        }
        self.time_elapsed += dt;
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed(&self) -> Duration {
        self.time_elapsed
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.time_elapsed.as_secs()
    }
}
