//! Property tests for the encoder and the action-space codec.
//!
//! Invariants covered:
//! - every observation has exactly 5 hand ones and 4 piece ones
//! - every index below the total decodes, every index at or above it fails
//! - decoded positions stay on the board and swap targets differ from the source

use proptest::prelude::*;
use sorry_agent::codec::{ActionBlock, ActionSpaceCodec};
use sorry_agent::core::{
    card_from_index, Action, CodecError, PieceIndex, PiecePositions, PlayerColor, PlayerHand,
    ResolveError, Square,
};
use sorry_agent::nn::{select_greedy, ObservationEncoder, HAND_BLOCK_LEN};

const TOTAL: usize = 16050;

type FnResolver = fn(PlayerColor, Square) -> Result<PieceIndex, ResolveError>;

fn piece_one(_: PlayerColor, square: Square) -> Result<PieceIndex, ResolveError> {
    assert!(square.is_valid());
    Ok(PieceIndex(1))
}

fn codec() -> ActionSpaceCodec<FnResolver> {
    ActionSpaceCodec::new(PlayerColor::Green, piece_one as FnResolver).unwrap()
}

fn hand_strategy() -> impl Strategy<Value = PlayerHand> {
    prop::array::uniform5(0usize..11)
        .prop_map(|idx| PlayerHand::new(idx.map(|i| card_from_index(i).unwrap())))
}

fn positions_strategy() -> impl Strategy<Value = PiecePositions> {
    prop::array::uniform4(0u8..=66).prop_map(|p| PiecePositions::new(p).unwrap())
}

proptest! {
    #[test]
    fn prop_observation_one_hot_counts(hand in hand_strategy(), positions in positions_strategy()) {
        let obs = ObservationEncoder::new().encode(&hand, &positions);

        let hand_ones = obs.hand_block().iter().filter(|&&v| v == 1.0).count();
        let piece_ones = obs.piece_block().iter().filter(|&&v| v == 1.0).count();
        let others = obs.tensor.iter().filter(|&&v| v != 0.0 && v != 1.0).count();

        prop_assert_eq!(hand_ones, 5);
        prop_assert_eq!(piece_ones, 4);
        prop_assert_eq!(others, 0);

        for (slot, card) in hand.cards().iter().enumerate() {
            prop_assert_eq!(obs.tensor[slot * 11 + card.type_index()], 1.0);
        }
        for (piece, position) in positions.iter() {
            let cell = HAND_BLOCK_LEN + piece.index() * 67 + position as usize;
            prop_assert_eq!(obs.tensor[cell], 1.0);
        }
    }

    #[test]
    fn prop_decode_in_range_is_on_board(index in 0usize..TOTAL) {
        let codec = codec();
        let (block, local) = codec.locate(index).unwrap();
        prop_assert!(local < block.len());

        match codec.decode(index).unwrap() {
            Action::Discard { card } => prop_assert_eq!(block, ActionBlock::Discard, "{}", card),
            Action::Sorry { target } => prop_assert!(target < 60),
            Action::Swap { target, .. } => {
                let source = local / 59;
                prop_assert!(target < 60);
                prop_assert_ne!(target as usize, source);
            }
            Action::SingleMove { destination, .. } => prop_assert!((1..=66).contains(&destination)),
            Action::DoubleMove { first_destination, second_destination, card, .. } => {
                prop_assert_eq!(card.type_index(), 5);
                prop_assert!(first_destination <= 66);
                prop_assert!(second_destination <= 66);
            }
        }
    }

    #[test]
    fn prop_decode_out_of_range_fails(index in TOTAL..usize::MAX) {
        let result = codec().decode(index);
        let is_out_of_range = matches!(result, Err(CodecError::IndexOutOfRange { .. }));
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn prop_negative_indices_fail(index in i64::MIN..0) {
        let result = codec().decode_signed(index);
        let is_out_of_range = matches!(result, Err(CodecError::IndexOutOfRange { .. }));
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn prop_greedy_picks_max_non_nan(
        scores in prop::collection::vec(prop::option::of(-100.0f32..100.0), 1..64)
    ) {
        let raw: Vec<f32> = scores.iter().map(|s| s.unwrap_or(f32::NAN)).collect();
        match select_greedy(&raw) {
            None => prop_assert!(raw.iter().all(|s| s.is_nan())),
            Some(best) => {
                prop_assert!(!raw[best].is_nan());
                for (i, &s) in raw.iter().enumerate() {
                    if s.is_nan() {
                        continue;
                    }
                    prop_assert!(s <= raw[best]);
                    if i < best {
                        prop_assert!(s < raw[best]);
                    }
                }
            }
        }
    }
}
