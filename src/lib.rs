//! # sorry-agent
//!
//! Observation encoding and action-space decoding for a Sorry! playing
//! agent driven by an external policy model.
//!
//! ## Design Principles
//!
//! 1. **Fixed wire layout**: the 323-float observation and the 16050-index
//!    action space are contracts with the model and never change silently.
//!
//! 2. **No gaps, no guesses**: the action space is a validated partition of
//!    named blocks. Every index decodes to exactly one action; every other
//!    index is an error.
//!
//! 3. **Injected collaborators**: the model (`nn::Model`) and the
//!    position -> piece lookup (`codec::PieceResolver`) are supplied by the
//!    caller. The crate knows nothing about rules or board topology.
//!
//! ## Pipeline
//!
//! `ObservationEncoder::encode` -> `Model::score_vector` -> argmax ignoring
//! `NaN` -> `ActionSpaceCodec::decode` -> `Action`. The `agent` module wires
//! these together.
//!
//! ## Modules
//!
//! - `core`: cards, players, positions, actions, errors, RNG, configuration
//! - `nn`: observation layout, encoder, model trait, index selection
//! - `codec`: action blocks, range table, resolvers, decoder
//! - `agent`: the full decision pipeline

pub mod core;
pub mod nn;
pub mod codec;
pub mod agent;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    card_from_index, Action, AgentConfig, Card, CodecError, GameRng, PieceIndex, PiecePositions,
    PlayerColor, PlayerHand, ResolveError, Square,
};

pub use crate::nn::{
    select_greedy, select_with_temperature, Model, ModelError, Observation, ObservationEncoder,
    UniformModel, OBSERVATION_LEN,
};

pub use crate::codec::{
    ActionBlock, ActionRange, ActionSpaceCodec, PieceResolver, PositionResolver, RangeTable,
};

pub use crate::agent::{Agent, AgentError};
