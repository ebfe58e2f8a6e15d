use crate::choreography::splash_exit;

pub const SPLASH_HOLD_MS: f64 = 3_500.0;
pub const SPLASH_EXIT_MS: f64 = 800.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GatePhase {
    Splash,
    Exiting { opacity: f64 },
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadingGate {
    pub hold_ms: f64,
    pub exit_ms: f64,
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self {
            hold_ms: SPLASH_HOLD_MS,
            exit_ms: SPLASH_EXIT_MS,
        }
    }
}

impl LoadingGate {
    pub fn total_ms(&self) -> f64 {
        self.hold_ms + self.exit_ms
    }

    pub fn phase_at(&self, elapsed_ms: f64) -> GatePhase {
        if elapsed_ms < self.hold_ms {
            return GatePhase::Splash;
        }
        if elapsed_ms >= self.total_ms() {
            return GatePhase::Done;
        }

        let opacity = splash_exit(self.exit_ms)
            .sample(elapsed_ms - self.hold_ms)
            .opacity;
        GatePhase::Exiting { opacity }
    }
}
