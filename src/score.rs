//! Session win counters.

use crate::board::Side;
use serde::{Deserialize, Serialize};

/// Win counters for the session. Survives board resets; in-memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    player: u32,
    computer: u32,
}

impl Score {
    /// Player wins this session.
    pub fn player(&self) -> u32 {
        self.player
    }

    /// Computer wins this session.
    pub fn computer(&self) -> u32 {
        self.computer
    }

    /// Records a win for the given side.
    pub fn record(&mut self, winner: Side) {
        match winner {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_increments_the_right_counter() {
        let mut score = Score::default();
        score.record(Side::Player);
        score.record(Side::Player);
        score.record(Side::Computer);
        assert_eq!(score.player(), 2);
        assert_eq!(score.computer(), 1);
    }
}
