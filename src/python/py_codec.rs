//! Action-space codec bindings for Python.

use pyo3::prelude::*;

use crate::codec::{ActionSpaceCodec, PositionResolver};
use crate::core::{HAND_SIZE, PIECE_COUNT};
use crate::nn::ObservationEncoder;

use numpy::PyArray1;

use super::py_core::{codec_err, hand_from_indices, parse_color, positions_from_raw, PyAction};

/// Python wrapper for ObservationEncoder.
#[pyclass(name = "ObservationEncoder")]
#[derive(Clone, Debug, Default)]
pub struct PyObservationEncoder(ObservationEncoder);

#[pymethods]
impl PyObservationEncoder {
    #[new]
    fn new() -> Self {
        Self(ObservationEncoder::new())
    }

    /// Encode a hand (dense card indices) and piece positions as a flat
    /// float32 array.
    fn encode<'py>(
        &self,
        py: Python<'py>,
        hand: [usize; HAND_SIZE],
        positions: [u8; PIECE_COUNT],
    ) -> PyResult<Bound<'py, PyArray1<f32>>> {
        let hand = hand_from_indices(hand)?;
        let positions = positions_from_raw(positions)?;
        let observation = self.0.encode(&hand, &positions);
        Ok(PyArray1::from_slice_bound(py, observation.as_slice()))
    }
}

/// Python wrapper for ActionSpaceCodec backed by the player's own pieces.
#[pyclass(name = "ActionSpaceCodec")]
pub struct PyActionSpaceCodec(ActionSpaceCodec<PositionResolver>);

#[pymethods]
impl PyActionSpaceCodec {
    #[new]
    #[pyo3(signature = (color, positions, public_offset = 0))]
    fn new(color: &str, positions: [u8; PIECE_COUNT], public_offset: u8) -> PyResult<Self> {
        let color = parse_color(color)?;
        let positions = positions_from_raw(positions)?;
        let resolver = PositionResolver::new(color, positions, public_offset)
            .map_err(|e| codec_err(e.into()))?;
        let codec = ActionSpaceCodec::new(color, resolver).map_err(codec_err)?;
        Ok(Self(codec))
    }

    #[getter]
    fn total_action_count(&self) -> usize {
        self.0.total_action_count()
    }

    /// Update the piece positions used to resolve pieces.
    fn set_positions(&mut self, positions: [u8; PIECE_COUNT]) -> PyResult<()> {
        let positions = positions_from_raw(positions)?;
        self.0.resolver_mut().set_positions(positions);
        Ok(())
    }

    /// Decode an action index.
    fn decode(&self, index: i64) -> PyResult<PyAction> {
        self.0.decode_signed(index).map(PyAction).map_err(codec_err)
    }

    /// Block label and local index for an action index.
    fn locate(&self, index: usize) -> PyResult<(String, usize)> {
        let (block, local) = self.0.locate(index).map_err(codec_err)?;
        Ok((block.label(), local))
    }

    /// `(label, start, end)` for every block, in index order.
    fn ranges(&self) -> Vec<(String, usize, usize)> {
        self.0
            .ranges()
            .iter()
            .map(|r| (r.block.label(), r.start, r.end))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "ActionSpaceCodec(color={}, actions={})",
            self.0.color(),
            self.0.total_action_count()
        )
    }
}
