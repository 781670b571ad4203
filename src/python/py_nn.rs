//! Model and agent bindings for Python.

use log::warn;
use numpy::PyArray1;
use pyo3::prelude::*;

use crate::agent::Agent;
use crate::codec::PositionResolver;
use crate::core::{AgentConfig, PiecePositions, HAND_SIZE, PIECE_COUNT};
use crate::nn::{Model, ModelError, Observation};

use super::py_core::{
    agent_err, codec_err, hand_from_indices, parse_color, positions_from_raw, PyAction,
};

/// A Python callable used as the policy model.
///
/// The callable receives the observation as a flat float32 numpy array and
/// returns one score per action index (`NaN` for illegal actions).
pub struct PyModel {
    callback: PyObject,
}

impl PyModel {
    pub fn new(callback: PyObject) -> Self {
        Self { callback }
    }
}

impl Model for PyModel {
    fn score_vector(&self, observation: &Observation) -> Result<Vec<f32>, ModelError> {
        Python::with_gil(|py| {
            let array = PyArray1::from_slice_bound(py, observation.as_slice());
            let result = self.callback.call1(py, (array,)).map_err(|e| {
                warn!("PyModel: score_vector() call failed: {}", e);
                ModelError::Backend(e.to_string())
            })?;
            result
                .extract::<Vec<f32>>(py)
                .map_err(|e| ModelError::BadOutput(e.to_string()))
        })
    }
}

/// Python wrapper for Agent.
#[pyclass(name = "Agent")]
pub struct PyAgent(Agent<PyModel, PositionResolver>);

#[pymethods]
impl PyAgent {
    /// Create an agent around a Python scoring callable.
    #[new]
    #[pyo3(signature = (model, color = "yellow", public_offset = 0, temperature = 0.0, seed = 42))]
    fn new(
        model: PyObject,
        color: &str,
        public_offset: u8,
        temperature: f64,
        seed: u64,
    ) -> PyResult<Self> {
        let color = parse_color(color)?;
        let config = AgentConfig::default()
            .with_color(color)
            .with_temperature(temperature)
            .with_seed(seed);
        let resolver = PositionResolver::new(color, PiecePositions::all_at_start(), public_offset)
            .map_err(|e| codec_err(e.into()))?;
        let agent = Agent::new(PyModel::new(model), resolver, config).map_err(agent_err)?;
        Ok(Self(agent))
    }

    /// Reseed action sampling.
    fn set_seed(&mut self, seed: u64) {
        self.0.set_seed(seed);
    }

    #[getter]
    fn total_action_count(&self) -> usize {
        self.0.codec().total_action_count()
    }

    /// Choose an action for a hand (dense card indices) and piece positions.
    fn get_action(
        &mut self,
        hand: [usize; HAND_SIZE],
        positions: [u8; PIECE_COUNT],
    ) -> PyResult<PyAction> {
        let hand = hand_from_indices(hand)?;
        let positions = positions_from_raw(positions)?;
        self.0.codec_mut().resolver_mut().set_positions(positions);
        self.0
            .get_action(&hand, &positions)
            .map(PyAction)
            .map_err(agent_err)
    }
}
