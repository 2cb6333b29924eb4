use thiserror::Error;

/// Why a single match record fails strict validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("team identifier is empty")]
    EmptyTeam,

    #[error("team {0:?} is listed on both sides")]
    SameTeam(String),

    #[error("unknown result {0:?}, expected \"win\", \"tie\" or \"no_result\"")]
    UnknownOutcome(String),

    #[error("result is \"win\" but no winner is given")]
    MissingWinner,

    #[error("winner {winner:?} is neither {team1:?} nor {team2:?}")]
    WinnerNotInMatch {
        winner: String,
        team1: String,
        team2: String,
    },

    #[error("winner {winner:?} given for a {result:?} result")]
    UnexpectedWinner { winner: String, result: String },
}

/// Error returned by `compute_standings_strict`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StandingsError {
    #[error("match {index} is invalid: {source}")]
    InvalidMatch {
        index: usize,
        #[source]
        source: MatchError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages() {
        let err = MatchError::WinnerNotInMatch {
            winner: "KKR".to_string(),
            team1: "CSK".to_string(),
            team2: "MI".to_string(),
        };
        assert_eq!(err.to_string(), "winner \"KKR\" is neither \"CSK\" nor \"MI\"");

        let wrapped = StandingsError::InvalidMatch { index: 3, source: MatchError::MissingWinner };
        assert_eq!(
            wrapped.to_string(),
            "match 3 is invalid: result is \"win\" but no winner is given"
        );
        assert!(wrapped.source().is_some());
    }
}
