//! Position -> piece resolution.
//!
//! Which piece an action index refers to depends on the board, which the
//! codec never sees. Decoders ask a [`PieceResolver`] instead of assuming a
//! piece.

use smallvec::SmallVec;

use crate::core::{
    PieceIndex, PiecePositions, PlayerColor, ResolveError, Square, PUBLIC_TRACK_LEN,
};

/// Finds the piece of `color` standing on a square.
pub trait PieceResolver: Send + Sync {
    fn resolve_piece(&self, color: PlayerColor, square: Square)
        -> Result<PieceIndex, ResolveError>;
}

impl<F> PieceResolver for F
where
    F: Fn(PlayerColor, Square) -> Result<PieceIndex, ResolveError> + Send + Sync,
{
    fn resolve_piece(
        &self,
        color: PlayerColor,
        square: Square,
    ) -> Result<PieceIndex, ResolveError> {
        self(color, square)
    }
}

/// Resolver backed by one player's own piece positions.
///
/// Public squares are mapped onto the player's track using
/// `public_offset`, the public square of the player's position 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionResolver {
    color: PlayerColor,
    positions: PiecePositions,
    public_offset: u8,
}

impl PositionResolver {
    /// Create a resolver for `color`.
    ///
    /// Fails if `public_offset` is not a public square.
    pub fn new(
        color: PlayerColor,
        positions: PiecePositions,
        public_offset: u8,
    ) -> Result<Self, ResolveError> {
        if public_offset >= PUBLIC_TRACK_LEN {
            return Err(ResolveError::InvalidSquare(Square::Public(public_offset)));
        }
        Ok(Self {
            color,
            positions,
            public_offset,
        })
    }

    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    #[must_use]
    pub fn positions(&self) -> &PiecePositions {
        &self.positions
    }

    /// Replace the tracked positions after a turn.
    pub fn set_positions(&mut self, positions: PiecePositions) {
        self.positions = positions;
    }

    /// Player-relative track position of a public square.
    #[must_use]
    pub fn player_position(&self, public: u8) -> u8 {
        (public % PUBLIC_TRACK_LEN + PUBLIC_TRACK_LEN - self.public_offset) % PUBLIC_TRACK_LEN + 1
    }

    /// Public square of a player-relative position, if it is on the track.
    #[must_use]
    pub fn public_square(&self, position: u8) -> Option<u8> {
        if (1..=PUBLIC_TRACK_LEN).contains(&position) {
            Some((position - 1 + self.public_offset) % PUBLIC_TRACK_LEN)
        } else {
            None
        }
    }

    /// All pieces on a square, in piece order.
    #[must_use]
    pub fn pieces_at(&self, square: Square) -> SmallVec<[PieceIndex; 4]> {
        let position = match square {
            Square::Player(p) => p,
            Square::Public(p) => self.player_position(p),
        };
        self.positions
            .iter()
            .filter(|&(_, at)| at == position)
            .map(|(piece, _)| piece)
            .collect()
    }
}

impl PieceResolver for PositionResolver {
    fn resolve_piece(
        &self,
        color: PlayerColor,
        square: Square,
    ) -> Result<PieceIndex, ResolveError> {
        if color != self.color {
            return Err(ResolveError::UnknownColor(color));
        }
        if !square.is_valid() {
            return Err(ResolveError::InvalidSquare(square));
        }
        self.pieces_at(square)
            .first()
            .copied()
            .ok_or(ResolveError::NoPiece { color, square })
    }
}
