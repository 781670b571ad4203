//! Card faces and the dense card-type ordering.
//!
//! Sorry! has eleven card faces. Their face values are not contiguous (there
//! is no Six or Nine), so the dense index used by the observation and action
//! layouts is a separate ordering that always goes through [`CARD_TYPES`].

use serde::{Deserialize, Serialize};

use super::error::CodecError;

/// Number of distinct card types.
pub const CARD_TYPE_COUNT: usize = 11;

/// A card face.
///
/// The discriminant is the face value. It is never used as an index; see
/// [`Card::type_index`] and [`card_from_index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Card {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Seven = 7,
    Eight = 8,
    Ten = 10,
    Eleven = 11,
    Twelve = 12,
    Sorry = 13,
}

/// Dense index -> card. Part of the observation and action wire layout.
pub const CARD_TYPES: [Card; CARD_TYPE_COUNT] = [
    Card::One,
    Card::Two,
    Card::Three,
    Card::Four,
    Card::Five,
    Card::Seven,
    Card::Eight,
    Card::Ten,
    Card::Eleven,
    Card::Twelve,
    Card::Sorry,
];

impl Card {
    /// Dense index of this card in [`CARD_TYPES`].
    #[must_use]
    pub const fn type_index(self) -> usize {
        match self {
            Card::One => 0,
            Card::Two => 1,
            Card::Three => 2,
            Card::Four => 3,
            Card::Five => 4,
            Card::Seven => 5,
            Card::Eight => 6,
            Card::Ten => 7,
            Card::Eleven => 8,
            Card::Twelve => 9,
            Card::Sorry => 10,
        }
    }

    /// Printed face value (13 for Sorry).
    #[must_use]
    pub const fn face_value(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Sorry => write!(f, "Sorry"),
            other => write!(f, "{}", other.face_value()),
        }
    }
}

/// Look up the card at a dense index.
///
/// Anything outside `0..CARD_TYPE_COUNT` is a lookup-table misuse and fails
/// with [`CodecError::InvalidCardIndex`].
pub fn card_from_index(index: usize) -> Result<Card, CodecError> {
    CARD_TYPES
        .get(index)
        .copied()
        .ok_or(CodecError::InvalidCardIndex(index))
}
