//! Action-space codec: flat policy index <-> structured [`Action`](crate::core::Action).
//!
//! The action space is a fixed sequence of [`ActionBlock`]s laid back to
//! back in a [`RangeTable`]. Decoding finds the block containing an index
//! and runs that block's arithmetic on the local index.
//!
//! ## Layout
//!
//! | Blocks | Indices |
//! |---|---|
//! | Discard | 0..11 |
//! | Move from Start (1, 2) | 11..13 |
//! | Sorry | 13..73 |
//! | Swap | 73..3613 |
//! | Single forward (10 cards) | 3613..4210 |
//! | Single backward (10 as -1, 4 as -4) | 4210..4340 |
//! | Double move (7 split 1+6, 2+5, 3+4) | 4340..16050 |

pub mod block;
pub mod decoder;
pub mod resolver;
pub mod table;

pub use block::{ActionBlock, STANDARD_LAYOUT};
pub use decoder::ActionSpaceCodec;
pub use resolver::{PieceResolver, PositionResolver};
pub use table::{ActionRange, RangeTable};
