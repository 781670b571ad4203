//! The slice of game state the agent observes: its hand and its pieces.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::error::CodecError;
use super::player::{PieceIndex, PIECE_COUNT};
use super::position::HOME;

/// Cards held by a player.
pub const HAND_SIZE: usize = 5;

/// A player's hand, in slot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerHand(pub [Card; HAND_SIZE]);

impl PlayerHand {
    #[must_use]
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    /// Whether any slot holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }
}

/// Positions of a player's four pieces, indexed by piece.
///
/// Every position is in `0..=HOME`; construction rejects anything else so
/// encoding never has to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 4]", into = "[u8; 4]")]
pub struct PiecePositions([u8; PIECE_COUNT]);

impl PiecePositions {
    /// Create piece positions, validating each one.
    pub fn new(positions: [u8; PIECE_COUNT]) -> Result<Self, CodecError> {
        if let Some(&bad) = positions.iter().find(|&&p| p > HOME) {
            return Err(CodecError::InvalidPosition(bad));
        }
        Ok(Self(positions))
    }

    /// All pieces in Start.
    #[must_use]
    pub const fn all_at_start() -> Self {
        Self([0; PIECE_COUNT])
    }

    /// Position of one piece, or `None` for an index outside `0..4`.
    #[must_use]
    pub fn get(&self, piece: PieceIndex) -> Option<u8> {
        self.0.get(piece.index()).copied()
    }

    #[must_use]
    pub fn as_array(&self) -> &[u8; PIECE_COUNT] {
        &self.0
    }

    /// Iterate `(piece, position)` pairs in piece order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceIndex, u8)> + '_ {
        PieceIndex::all().zip(self.0.iter().copied())
    }
}

impl TryFrom<[u8; PIECE_COUNT]> for PiecePositions {
    type Error = CodecError;

    fn try_from(positions: [u8; PIECE_COUNT]) -> Result<Self, Self::Error> {
        Self::new(positions)
    }
}

impl From<PiecePositions> for [u8; PIECE_COUNT] {
    fn from(positions: PiecePositions) -> Self {
        positions.0
    }
}
