//! Python bindings, enabled with the `python` feature.

use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList, PyTuple};

use crate::constants::{NO_RESULT_POINTS, TIE_POINTS, WIN_POINTS};
use crate::match_result::{MatchResult, Outcome};
use crate::points::PointsSystem;
use crate::standing::TeamStanding;
use crate::standings::{compute_standings_strict, compute_standings_with};

#[pymethods]
impl MatchResult {
    #[new]
    #[pyo3(signature = (team1, team2, result, winner = None))]
    fn py_new(team1: String, team2: String, result: &str, winner: Option<String>) -> Self {
        MatchResult::new(team1, team2, Outcome::from_label(result), winner)
    }

    #[getter(result)]
    fn get_result(&self) -> String {
        self.result.label().to_string()
    }

    /// Raise ValueError if the match would be rejected by strict mode.
    #[pyo3(name = "validate")]
    fn py_validate(&self) -> PyResult<()> {
        self.validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "MatchResult({:?}, {:?}, {:?}, winner={:?})",
            self.team1,
            self.team2,
            self.result.label(),
            self.winner
        )
    }
}

#[pymethods]
impl TeamStanding {
    fn __str__(&self) -> String {
        format!(
            "{}: P{} W{} L{} T{} NR{} | {} pts",
            self.team, self.played, self.won, self.lost, self.tied, self.no_result, self.points
        )
    }

    fn __repr__(&self) -> String {
        format!(
            "TeamStanding({:?}, played={}, won={}, lost={}, tied={}, no_result={}, points={})",
            self.team, self.played, self.won, self.lost, self.tied, self.no_result, self.points
        )
    }
}

/// Compute the league table.
///
/// `matches` may be anything; if it is not a list or tuple, an empty table
/// is returned. Elements are `MatchResult` objects or dicts with `team1`,
/// `team2` and optional `result` and `winner`. A missing `result` is an
/// unknown outcome.
#[pyfunction]
#[pyo3(
    name = "compute_standings",
    signature = (
        matches,
        win_points = WIN_POINTS,
        tie_points = TIE_POINTS,
        no_result_points = NO_RESULT_POINTS,
        strict = false
    )
)]
pub(crate) fn py_compute_standings(
    matches: &Bound<'_, PyAny>,
    win_points: u32,
    tie_points: u32,
    no_result_points: u32,
    strict: bool,
) -> PyResult<Vec<TeamStanding>> {
    let items: Vec<Bound<'_, PyAny>> = if let Ok(list) = matches.downcast::<PyList>() {
        list.iter().collect()
    } else if let Ok(tuple) = matches.downcast::<PyTuple>() {
        tuple.iter().collect()
    } else {
        return Ok(Vec::new());
    };

    let parsed = items
        .iter()
        .map(extract_match)
        .collect::<PyResult<Vec<_>>>()?;

    let system = PointsSystem::new(win_points, tie_points, no_result_points);
    if strict {
        compute_standings_strict(&parsed, &system).map_err(|e| PyValueError::new_err(e.to_string()))
    } else {
        Ok(compute_standings_with(&parsed, &system))
    }
}

fn extract_match(item: &Bound<'_, PyAny>) -> PyResult<MatchResult> {
    if let Ok(m) = item.extract::<MatchResult>() {
        return Ok(m);
    }

    let dict = item.downcast::<PyDict>().map_err(|_| {
        PyTypeError::new_err("match must be a MatchResult or a dict")
    })?;

    let team1: String = required(dict, "team1")?;
    let team2: String = required(dict, "team2")?;
    let result = match optional(dict, "result")? {
        Some(label) => Outcome::from_label(&label),
        None => Outcome::Unknown(String::new()),
    };
    let winner = optional(dict, "winner")?;

    Ok(MatchResult::new(team1, team2, result, winner))
}

/// A string entry that may be absent or `None`.
fn optional(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<Option<String>> {
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => Ok(Some(value.extract()?)),
        _ => Ok(None),
    }
}

fn required(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<String> {
    dict.get_item(key)?
        .ok_or_else(|| PyTypeError::new_err(format!("match is missing {:?}", key)))?
        .extract()
}
