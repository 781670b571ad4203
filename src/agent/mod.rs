//! The decision pipeline: observation -> model -> index -> action.
//!
//! ```
//! use sorry_agent::agent::Agent;
//! use sorry_agent::codec::PositionResolver;
//! use sorry_agent::core::{Action, AgentConfig, Card, PiecePositions, PlayerColor, PlayerHand};
//! use sorry_agent::nn::UniformModel;
//!
//! let positions = PiecePositions::all_at_start();
//! let resolver = PositionResolver::new(PlayerColor::Yellow, positions, 0).unwrap();
//! let mut agent = Agent::new(UniformModel::new(16050), resolver, AgentConfig::default()).unwrap();
//!
//! let hand = PlayerHand::new([Card::One; 5]);
//! // Uniform scores tie everywhere; the lowest index wins.
//! assert_eq!(agent.get_action(&hand, &positions).unwrap(), Action::Discard { card: Card::One });
//! ```

use log::{debug, warn};
use thiserror::Error;

use crate::codec::{ActionSpaceCodec, PieceResolver};
use crate::core::{Action, AgentConfig, CodecError, GameRng, PiecePositions, PlayerHand};
use crate::nn::{select_with_temperature, Model, ModelError, ObservationEncoder};

/// Failures while choosing an action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Model(#[from] ModelError),

    /// The model scored a different number of actions than the codec decodes.
    #[error("model returned {actual} scores, expected {expected}")]
    ScoreLength { expected: usize, actual: usize },

    /// Every score was `NaN`.
    #[error("model marked every action illegal")]
    NoLegalAction,
}

impl AgentError {
    /// Whether the caller may try the same decision again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, AgentError::Model(e) if e.is_retryable())
    }
}

/// Plays one color using an external model.
pub struct Agent<M, R> {
    encoder: ObservationEncoder,
    codec: ActionSpaceCodec<R>,
    model: M,
    config: AgentConfig,
    rng: GameRng,
}

impl<M: Model, R: PieceResolver> Agent<M, R> {
    /// Create an agent for `config.color`.
    pub fn new(model: M, resolver: R, config: AgentConfig) -> Result<Self, AgentError> {
        let codec = ActionSpaceCodec::new(config.color, resolver)?;
        Ok(Self::with_codec(model, codec, config))
    }

    /// Create an agent around an existing codec.
    ///
    /// The codec's color wins over `config.color`.
    pub fn with_codec(model: M, codec: ActionSpaceCodec<R>, mut config: AgentConfig) -> Self {
        config.color = codec.color();
        let rng = GameRng::new(config.seed);
        Self {
            encoder: ObservationEncoder::new(),
            codec,
            model,
            config,
            rng,
        }
    }

    /// Reseed action sampling.
    pub fn set_seed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.rng = GameRng::new(seed);
    }

    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    #[must_use]
    pub fn codec(&self) -> &ActionSpaceCodec<R> {
        &self.codec
    }

    /// Mutable access to the codec, e.g. to update the resolver's board.
    pub fn codec_mut(&mut self) -> &mut ActionSpaceCodec<R> {
        &mut self.codec
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Choose an action index for the current hand and pieces.
    pub fn select_index(
        &mut self,
        hand: &PlayerHand,
        positions: &PiecePositions,
    ) -> Result<usize, AgentError> {
        let observation = self.encoder.encode(hand, positions);

        let scores = self.model.score_vector(&observation).map_err(|e| {
            warn!("model call failed for {}: {}", self.config.color, e);
            e
        })?;

        let expected = self.codec.total_action_count();
        if scores.len() != expected {
            return Err(AgentError::ScoreLength {
                expected,
                actual: scores.len(),
            });
        }

        let index = select_with_temperature(&scores, self.config.temperature, &mut self.rng)
            .ok_or_else(|| {
                warn!("no legal action among {} scores", scores.len());
                AgentError::NoLegalAction
            })?;

        debug!(
            "{} selected index {} (score {})",
            self.config.color, index, scores[index]
        );
        Ok(index)
    }

    /// Choose and decode an action for the current hand and pieces.
    pub fn get_action(
        &mut self,
        hand: &PlayerHand,
        positions: &PiecePositions,
    ) -> Result<Action, AgentError> {
        let index = self.select_index(hand, positions)?;
        let action = self.codec.decode(index)?;
        debug!("{} plays {}", self.config.color, action);
        Ok(action)
    }
}
