//! Standings Core - league table aggregation for match results.
//!
//! Turns a list of match results into a points table ranked by points,
//! with team name as the tie-break. Python bindings are available behind
//! the `python` feature.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod constants;
pub mod error;
pub mod match_result;
pub mod points;
pub mod standing;
pub mod standings;

#[cfg(feature = "python")]
mod python;

pub use constants::{NO_RESULT_POINTS, TIE_POINTS, WIN_POINTS};
pub use error::{MatchError, StandingsError};
pub use match_result::{MatchDelta, MatchResult, Outcome};
pub use points::PointsSystem;
pub use standing::TeamStanding;
pub use standings::{
    compare_standings, compare_team_names, compute_standings, compute_standings_par,
    compute_standings_strict, compute_standings_with, rank_standings,
};

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn standings_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<MatchResult>()?;
    m.add_class::<TeamStanding>()?;

    // Functions
    m.add_function(wrap_pyfunction!(python::py_compute_standings, m)?)?;

    // Constants
    m.add("WIN_POINTS", WIN_POINTS)?;
    m.add("TIE_POINTS", TIE_POINTS)?;
    m.add("NO_RESULT_POINTS", NO_RESULT_POINTS)?;

    Ok(())
}
