#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::constants::{NO_RESULT_LABEL, TIE_LABEL, WIN_LABEL};
use crate::error::MatchError;
use crate::points::PointsSystem;

/// How a match ended.
///
/// Labels other than `win`, `tie` and `no_result` are kept as `Unknown` so
/// the permissive aggregation can absorb them instead of failing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Tie,
    NoResult,
    Unknown(String),
}

impl Outcome {
    /// Parse an outcome label. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Self {
        match label {
            WIN_LABEL => Outcome::Win,
            TIE_LABEL => Outcome::Tie,
            NO_RESULT_LABEL => Outcome::NoResult,
            other => Outcome::Unknown(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Outcome::Win => WIN_LABEL,
            Outcome::Tie => TIE_LABEL,
            Outcome::NoResult => NO_RESULT_LABEL,
            Outcome::Unknown(label) => label,
        }
    }
}

/// Counter and points increments one match contributes to one of its teams.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchDelta {
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    pub no_result: u32,
    pub points: u32,
}

impl MatchDelta {
    fn new(won: bool, lost: bool, tied: bool, no_result: bool, system: &PointsSystem) -> Self {
        MatchDelta {
            played: 1,
            won: won as u32,
            lost: lost as u32,
            tied: tied as u32,
            no_result: no_result as u32,
            points: system.match_points(won, tied, no_result),
        }
    }
}

/// A single recorded match between two teams.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    #[cfg_attr(feature = "python", pyo3(get))]
    pub team1: String,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub team2: String,

    pub result: Outcome,

    /// Winning team; checked against both sides whatever the `result`
    #[cfg_attr(feature = "python", pyo3(get))]
    pub winner: Option<String>,
}

impl MatchResult {
    pub fn new(
        team1: impl Into<String>,
        team2: impl Into<String>,
        result: Outcome,
        winner: Option<String>,
    ) -> Self {
        MatchResult {
            team1: team1.into(),
            team2: team2.into(),
            result,
            winner,
        }
    }

    pub fn win(team1: impl Into<String>, team2: impl Into<String>, winner: impl Into<String>) -> Self {
        Self::new(team1, team2, Outcome::Win, Some(winner.into()))
    }

    pub fn tie(team1: impl Into<String>, team2: impl Into<String>) -> Self {
        Self::new(team1, team2, Outcome::Tie, None)
    }

    pub fn no_result(team1: impl Into<String>, team2: impl Into<String>) -> Self {
        Self::new(team1, team2, Outcome::NoResult, None)
    }

    /// Increments for (team1, team2) under `system`.
    ///
    /// Both sides always get a play. A side is credited with a win whenever
    /// `winner` names it, whatever the result label, and the opposite side
    /// with a loss. Points follow the per-match priority of
    /// `PointsSystem::match_points`, so a tie carrying a winner is worth a
    /// win to that side, not a win plus a tie.
    ///
    /// A winner matching neither team and an unknown outcome without a
    /// winner contribute only the play. The two winner checks are
    /// independent, so a self-match won by its only team counts as a win and
    /// a loss on each side.
    pub fn deltas(&self, system: &PointsSystem) -> (MatchDelta, MatchDelta) {
        let tied = self.result == Outcome::Tie;
        let no_result = self.result == Outcome::NoResult;
        let winner = self.winner.as_deref();
        let team1_won = winner == Some(self.team1.as_str());
        let team2_won = winner == Some(self.team2.as_str());

        (
            MatchDelta::new(team1_won, team2_won, tied, no_result, system),
            MatchDelta::new(team2_won, team1_won, tied, no_result, system),
        )
    }

    /// True when the match adds nothing but a play to either side: an
    /// unknown outcome with no usable winner, or a `win` whose winner is
    /// missing or names neither team.
    pub fn is_absorbed(&self) -> bool {
        let winner = self.winner.as_deref();
        let has_winning_side =
            winner == Some(self.team1.as_str()) || winner == Some(self.team2.as_str());
        matches!(self.result, Outcome::Win | Outcome::Unknown(_)) && !has_winning_side
    }

    /// Strict shape check used by `compute_standings_strict`.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.team1.is_empty() || self.team2.is_empty() {
            return Err(MatchError::EmptyTeam);
        }
        if self.team1 == self.team2 {
            return Err(MatchError::SameTeam(self.team1.clone()));
        }

        match &self.result {
            Outcome::Unknown(label) => Err(MatchError::UnknownOutcome(label.clone())),
            Outcome::Win => match self.winner.as_deref() {
                None => Err(MatchError::MissingWinner),
                Some(winner) if winner != self.team1 && winner != self.team2 => {
                    Err(MatchError::WinnerNotInMatch {
                        winner: winner.to_string(),
                        team1: self.team1.clone(),
                        team2: self.team2.clone(),
                    })
                }
                Some(_) => Ok(()),
            },
            Outcome::Tie | Outcome::NoResult => match &self.winner {
                Some(winner) => Err(MatchError::UnexpectedWinner {
                    winner: winner.clone(),
                    result: self.result.label().to_string(),
                }),
                None => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deltas(m: &MatchResult) -> (MatchDelta, MatchDelta) {
        m.deltas(&PointsSystem::default())
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::from_label("win"), Outcome::Win);
        assert_eq!(Outcome::from_label("tie"), Outcome::Tie);
        assert_eq!(Outcome::from_label("no_result"), Outcome::NoResult);
        assert_eq!(Outcome::from_label("Win"), Outcome::Unknown("Win".to_string()));

        for label in ["win", "tie", "no_result", "abandoned"] {
            assert_eq!(Outcome::from_label(label).label(), label);
        }
    }

    #[test]
    fn test_win_deltas() {
        let (csk, mi) = deltas(&MatchResult::win("CSK", "MI", "CSK"));
        assert_eq!(csk, MatchDelta { played: 1, won: 1, points: 2, ..Default::default() });
        assert_eq!(mi, MatchDelta { played: 1, lost: 1, ..Default::default() });

        let (csk, mi) = deltas(&MatchResult::win("CSK", "MI", "MI"));
        assert_eq!(csk.lost, 1);
        assert_eq!((mi.won, mi.points), (1, 2));
    }

    #[test]
    fn test_tie_and_no_result_deltas() {
        let (a, b) = deltas(&MatchResult::tie("RCB", "CSK"));
        assert_eq!(a, b);
        assert_eq!(a, MatchDelta { played: 1, tied: 1, points: 1, ..Default::default() });

        let (a, b) = deltas(&MatchResult::no_result("RCB", "CSK"));
        assert_eq!(a, b);
        assert_eq!(a, MatchDelta { played: 1, no_result: 1, points: 1, ..Default::default() });
    }

    #[test]
    fn test_tie_with_winner_credits_the_win() {
        let m = MatchResult::new("RCB", "CSK", Outcome::Tie, Some("RCB".to_string()));
        let (rcb, csk) = deltas(&m);
        assert_eq!(rcb, MatchDelta { played: 1, won: 1, tied: 1, points: 2, ..Default::default() });
        assert_eq!(csk, MatchDelta { played: 1, lost: 1, tied: 1, points: 1, ..Default::default() });
    }

    #[test]
    fn test_unknown_outcome_with_winner_credits_the_win() {
        let m = MatchResult::new("DC", "GT", Outcome::from_label("abandoned"), Some("GT".to_string()));
        let (dc, gt) = deltas(&m);
        assert_eq!(gt, MatchDelta { played: 1, won: 1, points: 2, ..Default::default() });
        assert_eq!(dc, MatchDelta { played: 1, lost: 1, ..Default::default() });
        assert!(!m.is_absorbed());
    }

    #[test]
    fn test_malformed_counts_only_played() {
        let played_only = MatchDelta { played: 1, ..Default::default() };

        let stranger = MatchResult::win("CSK", "MI", "KKR");
        assert_eq!(deltas(&stranger), (played_only, played_only));
        assert!(stranger.is_absorbed());

        let no_winner = MatchResult::new("CSK", "MI", Outcome::Win, None);
        assert_eq!(deltas(&no_winner), (played_only, played_only));
        assert!(no_winner.is_absorbed());

        let unknown = MatchResult::new("CSK", "MI", Outcome::from_label("draw"), None);
        assert_eq!(deltas(&unknown), (played_only, played_only));
        assert!(unknown.is_absorbed());

        assert!(!MatchResult::win("CSK", "MI", "MI").is_absorbed());
        assert!(!MatchResult::tie("CSK", "MI").is_absorbed());
    }

    #[test]
    fn test_self_match_deltas() {
        let (a, b) = deltas(&MatchResult::win("CSK", "CSK", "CSK"));
        assert_eq!(a, b);
        assert_eq!((a.won, a.lost, a.points), (1, 1, 2));
    }

    #[test]
    fn test_deltas_use_points_system() {
        let system = PointsSystem::new(3, 1, 0);
        let (csk, _) = MatchResult::win("CSK", "MI", "CSK").deltas(&system);
        assert_eq!(csk.points, 3);
        let (rr, _) = MatchResult::no_result("RR", "GT").deltas(&system);
        assert_eq!(rr.points, 0);
    }

    #[test]
    fn test_validate() {
        assert!(MatchResult::win("CSK", "MI", "MI").validate().is_ok());
        assert!(MatchResult::tie("CSK", "MI").validate().is_ok());
        assert!(MatchResult::no_result("CSK", "MI").validate().is_ok());

        assert_eq!(MatchResult::tie("", "MI").validate(), Err(MatchError::EmptyTeam));
        assert_eq!(
            MatchResult::tie("MI", "MI").validate(),
            Err(MatchError::SameTeam("MI".to_string()))
        );
        assert_eq!(
            MatchResult::new("CSK", "MI", Outcome::from_label("draw"), None).validate(),
            Err(MatchError::UnknownOutcome("draw".to_string()))
        );
        assert_eq!(
            MatchResult::new("CSK", "MI", Outcome::Win, None).validate(),
            Err(MatchError::MissingWinner)
        );
        assert!(matches!(
            MatchResult::win("CSK", "MI", "KKR").validate(),
            Err(MatchError::WinnerNotInMatch { .. })
        ));
        assert_eq!(
            MatchResult::new("CSK", "MI", Outcome::Tie, Some("CSK".to_string())).validate(),
            Err(MatchError::UnexpectedWinner {
                winner: "CSK".to_string(),
                result: "tie".to_string(),
            })
        );
    }
}
