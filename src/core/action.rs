//! Structured game actions.
//!
//! An [`Action`] is what a decoded policy index means: which card is played
//! and which pieces move where. Actions have a legal *shape* but are not
//! checked against the rules; that is the game engine's job.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use super::player::PieceIndex;

/// A fully specified action for one player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Discard a card without moving.
    Discard { card: Card },

    /// Move one piece to `destination` (player-relative).
    SingleMove {
        card: Card,
        piece: PieceIndex,
        destination: u8,
    },

    /// Play a Sorry card on the opponent piece at a public position.
    Sorry { target: u8 },

    /// Swap `piece` with the opponent piece at a public position (Eleven card).
    Swap { piece: PieceIndex, target: u8 },

    /// Split a move between two pieces (Seven card).
    DoubleMove {
        card: Card,
        first_piece: PieceIndex,
        first_destination: u8,
        second_piece: PieceIndex,
        second_destination: u8,
    },
}

impl Action {
    /// The card this action plays or discards.
    #[must_use]
    pub fn card(&self) -> Card {
        match *self {
            Action::Discard { card }
            | Action::SingleMove { card, .. }
            | Action::DoubleMove { card, .. } => card,
            Action::Sorry { .. } => Card::Sorry,
            Action::Swap { .. } => Card::Eleven,
        }
    }

    /// Pieces this action moves, in order.
    #[must_use]
    pub fn pieces(&self) -> SmallVec<[PieceIndex; 2]> {
        match *self {
            Action::Discard { .. } | Action::Sorry { .. } => SmallVec::new(),
            Action::SingleMove { piece, .. } | Action::Swap { piece, .. } => {
                SmallVec::from_slice(&[piece])
            }
            Action::DoubleMove {
                first_piece,
                second_piece,
                ..
            } => SmallVec::from_slice(&[first_piece, second_piece]),
        }
    }

    /// Check if this action moves no pieces.
    #[must_use]
    pub fn is_discard(&self) -> bool {
        matches!(self, Action::Discard { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Discard { card } => write!(f, "discard {card}"),
            Action::SingleMove {
                card,
                piece,
                destination,
            } => write!(f, "play {card}: {piece} -> {destination}"),
            Action::Sorry { target } => write!(f, "play Sorry on public square {target}"),
            Action::Swap { piece, target } => {
                write!(f, "play 11: swap {piece} with public square {target}")
            }
            Action::DoubleMove {
                card,
                first_piece,
                first_destination,
                second_piece,
                second_destination,
            } => write!(
                f,
                "play {card}: {first_piece} -> {first_destination}, {second_piece} -> {second_destination}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_card() {
        assert_eq!(Action::Discard { card: Card::Two }.card(), Card::Two);
        assert_eq!(Action::Sorry { target: 4 }.card(), Card::Sorry);
        assert_eq!(
            Action::Swap {
                piece: PieceIndex(1),
                target: 9
            }
            .card(),
            Card::Eleven
        );
    }

    #[test]
    fn test_action_pieces() {
        assert!(Action::Discard { card: Card::One }.pieces().is_empty());

        let single = Action::SingleMove {
            card: Card::Five,
            piece: PieceIndex(2),
            destination: 10,
        };
        assert_eq!(single.pieces().as_slice(), &[PieceIndex(2)]);

        let double = Action::DoubleMove {
            card: Card::Seven,
            first_piece: PieceIndex(0),
            first_destination: 3,
            second_piece: PieceIndex(3),
            second_destination: 20,
        };
        assert_eq!(double.pieces().as_slice(), &[PieceIndex(0), PieceIndex(3)]);
    }

    #[test]
    fn test_action_display() {
        let action = Action::SingleMove {
            card: Card::Twelve,
            piece: PieceIndex(1),
            destination: 13,
        };
        assert_eq!(action.to_string(), "play 12: Piece 1 -> 13");
        assert!(Action::Discard { card: Card::Sorry }.is_discard());
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::DoubleMove {
            card: Card::Seven,
            first_piece: PieceIndex(0),
            first_destination: 2,
            second_piece: PieceIndex(1),
            second_destination: 7,
        };
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }
}
