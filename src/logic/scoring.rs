//! Point systems: how a match score translates into points.
//!
//! Every recorded match is scored under two systems at once: the standard
//! system feeds `match_points` (the primary ranking key) and the alternate
//! system feeds `alternate_points` (a tie-break key). Both are plain
//! configuration so the point values can be changed without touching the
//! match entry code.

use serde::{Deserialize, Serialize};

/// Points awarded for a win, a draw, and a loss.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PointSystem {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl PointSystem {
    /// Parse a `"win,draw,loss"` triple, e.g. `"3,1,0"`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split(',').map(|p| p.trim().parse::<u32>());
        let win = parts.next()?.ok()?;
        let draw = parts.next()?.ok()?;
        let loss = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { win, draw, loss })
    }

    /// Points for team A and team B given their goal counts.
    pub fn points_for(&self, a_goals: u32, b_goals: u32) -> (u32, u32) {
        if a_goals > b_goals {
            (self.win, self.loss)
        } else if a_goals < b_goals {
            (self.loss, self.win)
        } else {
            (self.draw, self.draw)
        }
    }
}

/// The two point systems applied to every match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Feeds `match_points`: 3 for a win, 1 for a draw.
    pub standard: PointSystem,
    /// Feeds `alternate_points`: 5 for a win, 3 each for a draw, 1 for a loss.
    pub alternate: PointSystem,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            standard: PointSystem {
                win: 3,
                draw: 1,
                loss: 0,
            },
            alternate: PointSystem {
                win: 5,
                draw: 3,
                loss: 1,
            },
        }
    }
}
