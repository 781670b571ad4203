//! Core types: cards, players, positions, actions, errors, RNG, configuration.
//!
//! Everything here is plain data. The encoder and codec build on these
//! types without adding state of their own.

pub mod card;
pub mod player;
pub mod position;
pub mod state;
pub mod action;
pub mod error;
pub mod rng;
pub mod config;

pub use card::{card_from_index, Card, CARD_TYPES, CARD_TYPE_COUNT};
pub use player::{PieceIndex, PlayerColor, PIECE_COUNT};
pub use position::{Square, HOME, POSITION_COUNT, PUBLIC_TRACK_LEN, START};
pub use state::{PiecePositions, PlayerHand, HAND_SIZE};
pub use action::Action;
pub use error::{CodecError, ResolveError};
pub use rng::GameRng;
pub use config::AgentConfig;
