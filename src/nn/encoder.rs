//! Observation encoding for model input.
//!
//! Transforms a hand and piece positions into the fixed 323-float one-hot
//! layout the model is trained against.

use crate::core::{PiecePositions, PlayerHand, CARD_TYPE_COUNT, POSITION_COUNT};
use crate::nn::traits::{Observation, HAND_BLOCK_LEN};

/// Encodes the agent's hand and pieces.
///
/// - Hand block: one row per hand slot, one column per card type
/// - Piece block: one row per piece, one column per position
#[derive(Clone, Copy, Debug, Default)]
pub struct ObservationEncoder;

impl ObservationEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encode a hand and piece positions.
    #[must_use]
    pub fn encode(&self, hand: &PlayerHand, positions: &PiecePositions) -> Observation {
        let mut observation = Observation::zeros();
        let tensor = &mut observation.tensor;

        for (slot, card) in hand.cards().iter().enumerate() {
            tensor[slot * CARD_TYPE_COUNT + card.type_index()] = 1.0;
        }

        for (piece, position) in positions.iter() {
            tensor[HAND_BLOCK_LEN + piece.index() * POSITION_COUNT + position as usize] = 1.0;
        }

        observation
    }
}
