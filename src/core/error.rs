//! Error types for the codec, the resolver boundary and the data model.

use thiserror::Error;

use super::player::PlayerColor;
use super::position::Square;

/// Errors raised by the observation/action codec and its data model.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Dense card index outside the card-type table. Always a programming error.
    #[error("invalid card index {0}")]
    InvalidCardIndex(usize),

    /// Decode was given an index outside `[0, total)`.
    #[error("action index {index} is out of range (total action count {total})")]
    IndexOutOfRange { index: i64, total: usize },

    /// The injected resolver could not find the piece an action needs.
    #[error("piece resolution failed: {0}")]
    PieceResolution(#[from] ResolveError),

    /// The range table failed its construction-time consistency check.
    #[error("range table invariant violated: {0}")]
    RangeTableInvariant(String),

    /// A raw piece position outside `0..=66`.
    #[error("position {0} is outside 0..=66")]
    InvalidPosition(u8),

    /// A block whose step counts do not fit on the board.
    #[error("block {0} has no valid moves")]
    InvalidBlock(String),

    /// A block was asked to decode an index it does not span.
    #[error("local index {local} is outside block {block} ({len} indices)")]
    LocalIndexOutOfRange {
        block: String,
        local: usize,
        len: usize,
    },
}

/// Errors raised by a [`PieceResolver`](crate::codec::PieceResolver).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no {color} piece on {square}")]
    NoPiece { color: PlayerColor, square: Square },

    #[error("resolver has no pieces for {0}")]
    UnknownColor(PlayerColor),

    #[error("{0} is not a square on the board")]
    InvalidSquare(Square),

    /// The resolver answered with a piece the player does not have.
    #[error("resolver returned piece {piece} for {color} on {square}")]
    BadPiece {
        color: PlayerColor,
        square: Square,
        piece: u8,
    },
}
