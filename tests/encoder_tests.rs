//! Integration tests for observation encoding.

use sorry_agent::core::{Card, PiecePositions, PlayerHand, CARD_TYPES};
use sorry_agent::nn::{ObservationEncoder, HAND_BLOCK_LEN, OBSERVATION_LEN, PIECE_BLOCK_LEN};

fn ones(block: &[f32]) -> Vec<usize> {
    block
        .iter()
        .enumerate()
        .filter(|(_, &v)| v == 1.0)
        .map(|(i, _)| i)
        .collect()
}

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_observation_length() {
    assert_eq!(OBSERVATION_LEN, 5 * 11 + 4 * 67);
    assert_eq!(HAND_BLOCK_LEN + PIECE_BLOCK_LEN, OBSERVATION_LEN);
}

#[test]
fn test_opening_hand_scenario() {
    let hand = PlayerHand::new([Card::One, Card::One, Card::Two, Card::Three, Card::Five]);
    let obs = ObservationEncoder::new().encode(&hand, &PiecePositions::all_at_start());

    // (slot, column) pairs flattened row-major with 11 columns.
    assert_eq!(ones(obs.hand_block()), vec![0, 11, 23, 35, 48]);
    // Column 0 of each 67-wide piece row.
    assert_eq!(ones(obs.piece_block()), vec![0, 67, 134, 201]);
}

#[test]
fn test_every_card_type_has_its_own_column() {
    let encoder = ObservationEncoder::new();
    for (column, card) in CARD_TYPES.iter().enumerate() {
        let obs = encoder.encode(&PlayerHand::new([*card; 5]), &PiecePositions::all_at_start());
        let expected: Vec<usize> = (0..5).map(|slot| slot * 11 + column).collect();
        assert_eq!(ones(obs.hand_block()), expected, "card {card}");
    }
}

#[test]
fn test_encoding_is_pure() {
    let hand = PlayerHand::new([Card::Sorry, Card::Ten, Card::Four, Card::Seven, Card::Eleven]);
    let positions = PiecePositions::new([66, 61, 30, 0]).unwrap();
    let encoder = ObservationEncoder::new();

    let a = encoder.encode(&hand, &positions);
    let b = encoder.encode(&hand, &positions);
    assert_eq!(a, b);
    assert_eq!(ones(a.piece_block()), vec![66, 67 + 61, 134 + 30, 201]);
}
