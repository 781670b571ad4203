//! Player colors and piece identifiers.

use serde::{Deserialize, Serialize};

/// Pieces per player.
pub const PIECE_COUNT: usize = 4;

/// Player color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Green,
    Red,
    Blue,
    Yellow,
}

impl PlayerColor {
    /// All colors in seating order.
    pub const ALL: [PlayerColor; 4] = [
        PlayerColor::Green,
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Yellow,
    ];
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlayerColor::Green => "Green",
            PlayerColor::Red => "Red",
            PlayerColor::Blue => "Blue",
            PlayerColor::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

/// Index of one of a player's pieces (0-3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceIndex(pub u8);

impl PieceIndex {
    /// Create a piece index. Returns `None` outside `0..PIECE_COUNT`.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < PIECE_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw piece index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all piece indices.
    pub fn all() -> impl Iterator<Item = PieceIndex> {
        (0..PIECE_COUNT as u8).map(PieceIndex)
    }
}

impl std::fmt::Display for PieceIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece {}", self.0)
    }
}
