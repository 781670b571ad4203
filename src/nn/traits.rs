//! The model boundary: observations in, per-action scores out.
//!
//! The policy model is external (typically a Python/JAX network reached
//! through the `python` feature). The crate only depends on the [`Model`]
//! trait.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{CARD_TYPE_COUNT, HAND_SIZE, PIECE_COUNT, POSITION_COUNT};

/// Length of the hand one-hot block.
pub const HAND_BLOCK_LEN: usize = HAND_SIZE * CARD_TYPE_COUNT;

/// Length of the piece one-hot block.
pub const PIECE_BLOCK_LEN: usize = PIECE_COUNT * POSITION_COUNT;

/// Total observation length (323).
pub const OBSERVATION_LEN: usize = HAND_BLOCK_LEN + PIECE_BLOCK_LEN;

/// Encoded observation as a flat tensor for the model.
///
/// Layout: `[0, HAND_BLOCK_LEN)` is the hand block, the rest is the piece
/// block, both row-major (row = slot, column = card type / position).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Flattened tensor data.
    pub tensor: Vec<f32>,
}

impl Observation {
    /// Create a zero-filled observation.
    #[must_use]
    pub fn zeros() -> Self {
        Self {
            tensor: vec![0.0; OBSERVATION_LEN],
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Get element at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.tensor
    }

    /// The hand one-hot block.
    #[must_use]
    pub fn hand_block(&self) -> &[f32] {
        &self.tensor[..HAND_BLOCK_LEN]
    }

    /// The piece one-hot block.
    #[must_use]
    pub fn piece_block(&self) -> &[f32] {
        &self.tensor[HAND_BLOCK_LEN..]
    }

    /// Shape of the tensor as the model sees it.
    #[must_use]
    pub fn shape(&self) -> Vec<usize> {
        vec![self.tensor.len()]
    }
}

/// Failures at the model boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The model did not answer in time.
    #[error("model call timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The model answered with something that is not a score vector.
    #[error("model returned malformed output: {0}")]
    BadOutput(String),

    /// The model backend failed.
    #[error("model backend error: {0}")]
    Backend(String),
}

impl ModelError {
    /// Timeouts are transient. Everything else is structural.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, ModelError::Timeout(_))
    }
}

/// Policy model: scores every action index for an observation.
///
/// The returned vector should have one entry per action index. `NaN` marks
/// an action the model knows to be illegal.
pub trait Model: Send + Sync {
    fn score_vector(&self, observation: &Observation) -> Result<Vec<f32>, ModelError>;
}

impl<F> Model for F
where
    F: Fn(&Observation) -> Result<Vec<f32>, ModelError> + Send + Sync,
{
    fn score_vector(&self, observation: &Observation) -> Result<Vec<f32>, ModelError> {
        self(observation)
    }
}

/// Uniform policy (baseline for testing).
#[derive(Clone, Debug, Default)]
pub struct UniformModel {
    action_space_size: usize,
}

impl UniformModel {
    /// Create a new uniform model.
    pub fn new(action_space_size: usize) -> Self {
        Self { action_space_size }
    }
}

impl Model for UniformModel {
    fn score_vector(&self, _observation: &Observation) -> Result<Vec<f32>, ModelError> {
        if self.action_space_size == 0 {
            return Ok(vec![]);
        }
        let prob = 1.0 / self.action_space_size as f32;
        Ok(vec![prob; self.action_space_size])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_constants() {
        assert_eq!(HAND_BLOCK_LEN, 55);
        assert_eq!(PIECE_BLOCK_LEN, 268);
        assert_eq!(OBSERVATION_LEN, 323);
    }

    #[test]
    fn test_observation_zeros() {
        let obs = Observation::zeros();
        assert_eq!(obs.len(), OBSERVATION_LEN);
        assert!(!obs.is_empty());
        assert_eq!(obs.hand_block().len(), 55);
        assert_eq!(obs.piece_block().len(), 268);
        assert!(obs.tensor.iter().all(|&v| v == 0.0));
        assert_eq!(obs.get(OBSERVATION_LEN), None);
        assert_eq!(obs.shape(), vec![323]);
    }

    #[test]
    fn test_uniform_model() {
        let model = UniformModel::new(4);
        let scores = model.score_vector(&Observation::zeros()).unwrap();

        assert_eq!(scores.len(), 4);
        assert!((scores.iter().sum::<f32>() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_uniform_model_zero_actions() {
        let model = UniformModel::default();
        assert!(model.score_vector(&Observation::zeros()).unwrap().is_empty());
    }

    #[test]
    fn test_closure_model() {
        let model = |obs: &Observation| -> Result<Vec<f32>, ModelError> {
            Ok(vec![obs.tensor.iter().sum::<f32>()])
        };
        let mut obs = Observation::zeros();
        obs.tensor[3] = 1.0;
        assert_eq!(model.score_vector(&obs).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_model_error_retryable() {
        assert!(ModelError::Timeout(std::time::Duration::from_millis(50)).is_retryable());
        assert!(!ModelError::BadOutput("x".into()).is_retryable());
        assert!(!ModelError::Backend("x".into()).is_retryable());
    }

    #[test]
    fn test_serialization() {
        let mut obs = Observation::zeros();
        obs.tensor[10] = 1.0;
        let json = serde_json::to_string(&obs).unwrap();
        let deserialized: Observation = serde_json::from_str(&json).unwrap();
        assert_eq!(obs, deserialized);
    }
}
