//! Core type bindings for Python.

use pyo3::exceptions::{PyIndexError, PyTimeoutError, PyValueError};
use pyo3::prelude::*;

use crate::agent::AgentError;
use crate::core::{
    card_from_index, Action, Card, CodecError, PiecePositions, PlayerColor, PlayerHand, HAND_SIZE,
    PIECE_COUNT,
};
use crate::nn::ModelError;

/// Parse a color name ("green", "red", "blue", "yellow").
pub(crate) fn parse_color(name: &str) -> PyResult<PlayerColor> {
    PlayerColor::ALL
        .into_iter()
        .find(|c| c.to_string().eq_ignore_ascii_case(name))
        .ok_or_else(|| PyValueError::new_err(format!("unknown color {name:?}")))
}

/// Build a hand from dense card indices.
pub(crate) fn hand_from_indices(indices: [usize; HAND_SIZE]) -> PyResult<PlayerHand> {
    let mut cards = [Card::One; HAND_SIZE];
    for (slot, index) in indices.into_iter().enumerate() {
        cards[slot] = card_from_index(index).map_err(codec_err)?;
    }
    Ok(PlayerHand::new(cards))
}

pub(crate) fn positions_from_raw(raw: [u8; PIECE_COUNT]) -> PyResult<PiecePositions> {
    PiecePositions::new(raw).map_err(codec_err)
}

pub(crate) fn codec_err(e: CodecError) -> PyErr {
    match e {
        CodecError::IndexOutOfRange { .. } => PyIndexError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

pub(crate) fn agent_err(e: AgentError) -> PyErr {
    match e {
        AgentError::Codec(c) => codec_err(c),
        AgentError::Model(ModelError::Timeout(_)) => PyTimeoutError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    /// Variant name: "discard", "single_move", "sorry", "swap" or "double_move".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            Action::Discard { .. } => "discard",
            Action::SingleMove { .. } => "single_move",
            Action::Sorry { .. } => "sorry",
            Action::Swap { .. } => "swap",
            Action::DoubleMove { .. } => "double_move",
        }
    }

    /// Dense index of the card played or discarded.
    #[getter]
    fn card(&self) -> usize {
        self.0.card().type_index()
    }

    /// Moved pieces, in order.
    #[getter]
    fn pieces(&self) -> Vec<u8> {
        self.0.pieces().iter().map(|p| p.0).collect()
    }

    /// Destinations of the moved pieces, in the same order as `pieces`.
    #[getter]
    fn destinations(&self) -> Vec<u8> {
        match self.0 {
            Action::SingleMove { destination, .. } => vec![destination],
            Action::DoubleMove {
                first_destination,
                second_destination,
                ..
            } => vec![first_destination, second_destination],
            _ => vec![],
        }
    }

    /// Public target square of a Sorry or Swap.
    #[getter]
    fn target(&self) -> Option<u8> {
        match self.0 {
            Action::Sorry { target } | Action::Swap { target, .. } => Some(target),
            _ => None,
        }
    }

    fn __repr__(&self) -> String {
        format!("Action({})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
