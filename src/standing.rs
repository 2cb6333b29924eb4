#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::match_result::MatchDelta;

/// Aggregated record for one team across every match it played.
///
/// `points` is the sum of the per-match awards carried by each applied
/// `MatchDelta`. For well-formed matches it equals the points system applied
/// to `won`, `tied` and `no_result`.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TeamStanding {
    #[cfg_attr(feature = "python", pyo3(get))]
    pub team: String,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub played: u32,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub won: u32,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub lost: u32,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub tied: u32,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub no_result: u32,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub points: u32,
}

impl TeamStanding {
    /// Empty standing for a team that has not played yet.
    pub fn new(team: impl Into<String>) -> Self {
        TeamStanding {
            team: team.into(),
            played: 0,
            won: 0,
            lost: 0,
            tied: 0,
            no_result: 0,
            points: 0,
        }
    }

    /// Add one match's contribution.
    ///
    /// Points saturate at `u32::MAX` rather than overflow.
    pub fn apply(&mut self, delta: &MatchDelta) {
        self.played += delta.played;
        self.won += delta.won;
        self.lost += delta.lost;
        self.tied += delta.tied;
        self.no_result += delta.no_result;
        self.points = self.points.saturating_add(delta.points);
    }

    /// Component-wise sum of two partial standings for the same team.
    pub fn merge(&mut self, other: &TeamStanding) {
        debug_assert_eq!(self.team, other.team);
        self.played += other.played;
        self.won += other.won;
        self.lost += other.lost;
        self.tied += other.tied;
        self.no_result += other.no_result;
        self.points = self.points.saturating_add(other.points);
    }

    /// Whether `played` is fully explained by the outcome counters.
    pub fn is_consistent(&self) -> bool {
        self.played == self.won + self.lost + self.tied + self.no_result
    }
}
