//! Action blocks: the named sub-ranges of the flat action space.
//!
//! Each [`ActionBlock`] knows how many indices it spans and how to turn a
//! local index (relative to the block start) into an [`Action`]. Block
//! sizes are derived from the board constants so the divisors used by
//! [`ActionBlock::decode`] and the sizes used to lay out the table can never
//! disagree.

use serde::{Deserialize, Serialize};

use crate::core::position::{
    backward_destination, backward_start_count, forward_start_count, is_backward_step,
    FIRST_TRACK,
};
use crate::core::{
    card_from_index, Action, Card, CodecError, PieceIndex, PlayerColor, ResolveError, Square,
    CARD_TYPE_COUNT, PUBLIC_TRACK_LEN, START,
};

use super::resolver::PieceResolver;

/// One contiguous family of actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionBlock {
    /// Discard a card; local index is the dense card index.
    Discard,

    /// Leave Start with `card`. Single index.
    MoveFromStart { card: Card },

    /// Sorry card on a public square; local index is the target.
    Sorry,

    /// Eleven-card swap; local index is `source * 59 + skipped_target`.
    Swap,

    /// Move one piece `steps` forward; local index is `start - 1`.
    SingleForward { card: Card, steps: u8 },

    /// Move one piece `steps` backward; local index is `start - 1`.
    SingleBackward { card: Card, steps: u8 },

    /// Split a move between two pieces; local index is
    /// `(start1 - 1) * second_width + (start2 - 1)`.
    DoubleMove {
        card: Card,
        first_steps: u8,
        second_steps: u8,
    },
}

/// Block order of the action space. This order is part of the wire
/// contract with the model.
pub const STANDARD_LAYOUT: [ActionBlock; 20] = [
    ActionBlock::Discard,
    ActionBlock::MoveFromStart { card: Card::One },
    ActionBlock::MoveFromStart { card: Card::Two },
    ActionBlock::Sorry,
    ActionBlock::Swap,
    ActionBlock::forward(Card::One, 1),
    ActionBlock::forward(Card::Two, 2),
    ActionBlock::forward(Card::Three, 3),
    ActionBlock::forward(Card::Sorry, 4),
    ActionBlock::forward(Card::Five, 5),
    ActionBlock::forward(Card::Seven, 7),
    ActionBlock::forward(Card::Eight, 8),
    ActionBlock::forward(Card::Ten, 10),
    ActionBlock::forward(Card::Eleven, 11),
    ActionBlock::forward(Card::Twelve, 12),
    ActionBlock::backward(Card::Ten, 1),
    ActionBlock::backward(Card::Four, 4),
    ActionBlock::split(Card::Seven, 1, 6),
    ActionBlock::split(Card::Seven, 2, 5),
    ActionBlock::split(Card::Seven, 3, 4),
];

/// Swap targets per source: every public square except the source.
const SWAP_TARGETS: usize = PUBLIC_TRACK_LEN as usize - 1;

impl ActionBlock {
    /// Single-piece forward move block.
    #[must_use]
    pub const fn forward(card: Card, steps: u8) -> Self {
        ActionBlock::SingleForward { card, steps }
    }

    /// Single-piece backward move block.
    #[must_use]
    pub const fn backward(card: Card, steps: u8) -> Self {
        ActionBlock::SingleBackward { card, steps }
    }

    /// Two-piece split move block.
    #[must_use]
    pub const fn split(card: Card, first_steps: u8, second_steps: u8) -> Self {
        ActionBlock::DoubleMove {
            card,
            first_steps,
            second_steps,
        }
    }

    /// Number of action indices in this block, or `None` if its step
    /// counts cannot be played on the board.
    #[must_use]
    pub const fn checked_len(self) -> Option<usize> {
        match self {
            ActionBlock::Discard => Some(CARD_TYPE_COUNT),
            ActionBlock::MoveFromStart { .. } => Some(1),
            ActionBlock::Sorry => Some(PUBLIC_TRACK_LEN as usize),
            ActionBlock::Swap => Some(PUBLIC_TRACK_LEN as usize * SWAP_TARGETS),
            ActionBlock::SingleForward { steps, .. } => forward_start_count(steps),
            ActionBlock::SingleBackward { steps, .. } => {
                if is_backward_step(steps) {
                    Some(backward_start_count())
                } else {
                    None
                }
            }
            ActionBlock::DoubleMove {
                first_steps,
                second_steps,
                ..
            } => match (
                forward_start_count(first_steps),
                forward_start_count(second_steps),
            ) {
                (Some(first), Some(second)) => Some(first * second),
                _ => None,
            },
        }
    }

    /// Number of action indices in this block. Unplayable blocks span none.
    #[must_use]
    pub const fn len(self) -> usize {
        match self.checked_len() {
            Some(len) => len,
            None => 0,
        }
    }

    /// Whether the block spans no indices.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Stable name for logs and diagnostics.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            ActionBlock::Discard => "discard".to_string(),
            ActionBlock::MoveFromStart { card } => format!("move_from_start({card})"),
            ActionBlock::Sorry => "sorry".to_string(),
            ActionBlock::Swap => "swap".to_string(),
            ActionBlock::SingleForward { card, steps } => {
                format!("single_forward({card}, +{steps})")
            }
            ActionBlock::SingleBackward { card, steps } => {
                format!("single_backward({card}, -{steps})")
            }
            ActionBlock::DoubleMove {
                card,
                first_steps,
                second_steps,
            } => format!("double_move({card}, {first_steps}+{second_steps})"),
        }
    }

    /// Decode a local index into an action.
    ///
    /// `local` must be below [`len`](Self::len). Pieces are looked up
    /// through `resolver` for `color`, and a piece outside `0..4` is
    /// rejected with [`ResolveError::BadPiece`].
    pub fn decode<R>(
        self,
        local: usize,
        color: PlayerColor,
        resolver: &R,
    ) -> Result<Action, CodecError>
    where
        R: PieceResolver + ?Sized,
    {
        let len = self
            .checked_len()
            .ok_or_else(|| CodecError::InvalidBlock(self.label()))?;
        if local >= len {
            return Err(CodecError::LocalIndexOutOfRange {
                block: self.label(),
                local,
                len,
            });
        }

        let piece_at = |square: Square| resolve_checked(resolver, color, square);

        let action = match self {
            ActionBlock::Discard => Action::Discard {
                card: card_from_index(local)?,
            },

            ActionBlock::MoveFromStart { card } => Action::SingleMove {
                card,
                piece: piece_at(Square::Player(START))?,
                destination: FIRST_TRACK,
            },

            ActionBlock::Sorry => Action::Sorry {
                target: self.coordinate(local)?,
            },

            ActionBlock::Swap => {
                let source = local / SWAP_TARGETS;
                let raw = local % SWAP_TARGETS;
                let target = if raw < source { raw } else { raw + 1 };
                Action::Swap {
                    piece: piece_at(Square::Public(self.coordinate(source)?))?,
                    target: self.coordinate(target)?,
                }
            }

            ActionBlock::SingleForward { card, steps } => {
                let start = FIRST_TRACK + self.coordinate(local)?;
                Action::SingleMove {
                    card,
                    piece: piece_at(Square::Player(start))?,
                    destination: start + steps,
                }
            }

            ActionBlock::SingleBackward { card, steps } => {
                let start = FIRST_TRACK + self.coordinate(local)?;
                let destination = backward_destination(start, steps)
                    .ok_or_else(|| CodecError::InvalidBlock(self.label()))?;
                Action::SingleMove {
                    card,
                    piece: piece_at(Square::Player(start))?,
                    destination,
                }
            }

            ActionBlock::DoubleMove {
                card,
                first_steps,
                second_steps,
            } => {
                let width = forward_start_count(second_steps)
                    .ok_or_else(|| CodecError::InvalidBlock(self.label()))?;
                let first_start = FIRST_TRACK + self.coordinate(local / width)?;
                let second_start = FIRST_TRACK + self.coordinate(local % width)?;
                Action::DoubleMove {
                    card,
                    first_piece: piece_at(Square::Player(first_start))?,
                    first_destination: first_start + first_steps,
                    second_piece: piece_at(Square::Player(second_start))?,
                    second_destination: second_start + second_steps,
                }
            }
        };

        Ok(action)
    }

    /// Narrow a board coordinate derived from a local index.
    fn coordinate(self, value: usize) -> Result<u8, CodecError> {
        u8::try_from(value).map_err(|_| CodecError::InvalidBlock(self.label()))
    }
}

impl std::fmt::Display for ActionBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Ask the resolver for a piece and reject indices the player cannot own.
fn resolve_checked<R>(
    resolver: &R,
    color: PlayerColor,
    square: Square,
) -> Result<PieceIndex, ResolveError>
where
    R: PieceResolver + ?Sized,
{
    let piece = resolver.resolve_piece(color, square)?;
    PieceIndex::new(piece.0).ok_or(ResolveError::BadPiece {
        color,
        square,
        piece: piece.0,
    })
}
