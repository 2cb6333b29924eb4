use crate::constants::{NO_RESULT_POINTS, TIE_POINTS, WIN_POINTS};

/// Points awarded per match outcome.
///
/// A loss is always worth nothing; the table only rewards wins, ties and
/// no-results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointsSystem {
    pub win: u32,
    pub tie: u32,
    pub no_result: u32,
}

impl Default for PointsSystem {
    fn default() -> Self {
        PointsSystem {
            win: WIN_POINTS,
            tie: TIE_POINTS,
            no_result: NO_RESULT_POINTS,
        }
    }
}

impl PointsSystem {
    pub fn new(win: u32, tie: u32, no_result: u32) -> Self {
        PointsSystem { win, tie, no_result }
    }

    /// Points one side earns from one match.
    ///
    /// A win takes priority over the result label, then a tie, then a
    /// no-result; a side gets at most one award per match.
    pub fn match_points(&self, won: bool, tied: bool, no_result: bool) -> u32 {
        if won {
            self.win
        } else if tied {
            self.tie
        } else if no_result {
            self.no_result
        } else {
            0
        }
    }
}
