use serde::{Deserialize, Serialize};

/// Whole seconds since the game started, driven by the surface's millisecond source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    started_at_ms: u64,
    elapsed_secs: u64,
}

impl GameClock {
    pub fn start(now_ms: u64) -> Self {
        Self {
            started_at_ms: now_ms,
            elapsed_secs: 0,
        }
    }

    pub fn advance(&mut self, now_ms: u64) {
        let secs = now_ms.saturating_sub(self.started_at_ms) / 1000;
        self.elapsed_secs = self.elapsed_secs.max(secs);
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }
}
