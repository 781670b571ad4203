//! Model-facing side of the agent.
//!
//! ## Overview
//!
//! - **Traits**: `Model` (the external policy) and `ModelError`
//! - **Encoding**: `ObservationEncoder` and the fixed `Observation` layout
//! - **Selection**: argmax ignoring `NaN`, or temperature sampling
//! - **Baseline**: `UniformModel` for testing
//!
//! ## Usage
//!
//! ```rust
//! use sorry_agent::core::{Card, PiecePositions, PlayerHand};
//! use sorry_agent::nn::{select_greedy, Model, ObservationEncoder, UniformModel};
//!
//! let hand = PlayerHand::new([Card::One, Card::Two, Card::Three, Card::Four, Card::Five]);
//! let observation = ObservationEncoder::new().encode(&hand, &PiecePositions::all_at_start());
//!
//! let scores = UniformModel::new(16).score_vector(&observation).unwrap();
//! assert_eq!(select_greedy(&scores), Some(0));
//! ```

pub mod encoder;
pub mod selection;
pub mod traits;

// Re-export main types
pub use encoder::ObservationEncoder;
pub use selection::{select_greedy, select_with_temperature};
pub use traits::{
    Model, ModelError, Observation, UniformModel, HAND_BLOCK_LEN, OBSERVATION_LEN,
    PIECE_BLOCK_LEN,
};
