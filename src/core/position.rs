//! Board position scheme.
//!
//! Positions are player-relative:
//!
//! - `0` is Start
//! - `1..=60` is the loop of the shared track, beginning at the square in
//!   front of this player's Start
//! - `61..=65` is the player's safety zone
//! - `66` is Home
//!
//! Public positions (`0..60`) address the shared track independently of any
//! player and are used by Sorry and Swap targets.

use serde::{Deserialize, Serialize};

/// Start position.
pub const START: u8 = 0;

/// Home position.
pub const HOME: u8 = 66;

/// Distinct position states per piece (`0..=HOME`).
pub const POSITION_COUNT: usize = HOME as usize + 1;

/// Squares on the shared track.
pub const PUBLIC_TRACK_LEN: u8 = 60;

/// First square of the safety zone.
pub const FIRST_SAFETY: u8 = PUBLIC_TRACK_LEN + 1;

/// Square a piece lands on when it leaves Start.
pub const FIRST_TRACK: u8 = 1;

/// A square as seen by a position -> piece resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Player-relative position, `0..=HOME`.
    Player(u8),
    /// Public track position, `0..PUBLIC_TRACK_LEN`.
    Public(u8),
}

impl Square {
    /// Whether the square exists on the board.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            Square::Player(p) => p <= HOME,
            Square::Public(p) => p < PUBLIC_TRACK_LEN,
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Player(START) => write!(f, "Start"),
            Square::Player(HOME) => write!(f, "Home"),
            Square::Player(p) => write!(f, "position {p}"),
            Square::Public(p) => write!(f, "public square {p}"),
        }
    }
}

/// Number of starting positions from which a forward move of `steps` stays
/// on the board, i.e. starts `1..=HOME - steps`.
///
/// `None` unless `steps` is in `1..HOME`.
#[must_use]
pub const fn forward_start_count(steps: u8) -> Option<usize> {
    if steps == 0 || steps >= HOME {
        None
    } else {
        Some((HOME - steps) as usize)
    }
}

/// Number of starting positions for a backward move: anywhere between the
/// first track square and the last safety square.
#[must_use]
pub const fn backward_start_count() -> usize {
    (HOME - FIRST_TRACK) as usize
}

/// Whether a backward move of `steps` can be played at all.
#[must_use]
pub const fn is_backward_step(steps: u8) -> bool {
    steps > 0 && steps < PUBLIC_TRACK_LEN
}

/// Destination of a backward move of `steps` from `start`.
///
/// The track loop `1..=60` wraps, so backing up past position 1 continues
/// from 60. Starts in the safety zone back out onto the track without
/// wrapping. `None` if `start` is not in `1..HOME` or `steps` is not a
/// backward step.
#[must_use]
pub const fn backward_destination(start: u8, steps: u8) -> Option<u8> {
    if start < FIRST_TRACK || start >= HOME || !is_backward_step(steps) {
        return None;
    }
    if start >= FIRST_TRACK + steps {
        Some(start - steps)
    } else {
        Some(start + PUBLIC_TRACK_LEN - steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(POSITION_COUNT, 67);
        assert_eq!(FIRST_SAFETY, 61);
    }

    #[test]
    fn test_forward_start_count() {
        assert_eq!(forward_start_count(1), Some(65));
        assert_eq!(forward_start_count(4), Some(62));
        assert_eq!(forward_start_count(12), Some(54));
        assert_eq!(forward_start_count(65), Some(1));
        assert_eq!(backward_start_count(), 65);
    }

    #[test]
    fn test_forward_start_count_rejects_bad_steps() {
        assert_eq!(forward_start_count(0), None);
        assert_eq!(forward_start_count(HOME), None);
        assert_eq!(forward_start_count(70), None);
        assert_eq!(forward_start_count(u8::MAX), None);
    }

    #[test]
    fn test_backward_without_wrap() {
        assert_eq!(backward_destination(10, 1), Some(9));
        assert_eq!(backward_destination(5, 4), Some(1));
        assert_eq!(backward_destination(2, 1), Some(1));
    }

    #[test]
    fn test_backward_wraps_around_track() {
        assert_eq!(backward_destination(1, 1), Some(60));
        assert_eq!(backward_destination(1, 4), Some(57));
        assert_eq!(backward_destination(4, 4), Some(60));
        assert_eq!(backward_destination(3, 4), Some(59));
        assert_eq!(backward_destination(1, 59), Some(2));
    }

    #[test]
    fn test_backward_from_safety_zone() {
        assert_eq!(backward_destination(61, 1), Some(60));
        assert_eq!(backward_destination(61, 4), Some(57));
        assert_eq!(backward_destination(65, 4), Some(61));
    }

    #[test]
    fn test_backward_rejects_bad_input() {
        assert_eq!(backward_destination(1, 70), None);
        assert_eq!(backward_destination(1, 60), None);
        assert_eq!(backward_destination(10, 0), None);
        assert_eq!(backward_destination(START, 1), None);
        assert_eq!(backward_destination(HOME, 1), None);
        assert_eq!(backward_destination(u8::MAX, 1), None);
    }

    #[test]
    fn test_square_validity() {
        assert!(Square::Player(66).is_valid());
        assert!(!Square::Player(67).is_valid());
        assert!(Square::Public(59).is_valid());
        assert!(!Square::Public(60).is_valid());
    }

    #[test]
    fn test_square_display() {
        assert_eq!(Square::Player(0).to_string(), "Start");
        assert_eq!(Square::Player(66).to_string(), "Home");
        assert_eq!(Square::Player(7).to_string(), "position 7");
        assert_eq!(Square::Public(7).to_string(), "public square 7");
    }
}
