//! Decoding policy indices into actions.

use std::sync::Arc;

use log::{debug, trace};

use crate::core::{Action, CodecError, PlayerColor};

use super::block::ActionBlock;
use super::resolver::PieceResolver;
use super::table::{ActionRange, RangeTable};

/// Maps flat action indices to [`Action`]s for one player.
///
/// The range table is validated when the codec is built and never changes
/// afterwards, so a codec can be shared across threads whenever its
/// resolver can.
///
/// ## Example
///
/// ```
/// use sorry_agent::codec::{ActionSpaceCodec, PositionResolver};
/// use sorry_agent::core::{Action, Card, PiecePositions, PlayerColor};
///
/// let positions = PiecePositions::all_at_start();
/// let resolver = PositionResolver::new(PlayerColor::Yellow, positions, 0).unwrap();
/// let codec = ActionSpaceCodec::new(PlayerColor::Yellow, resolver).unwrap();
///
/// assert_eq!(codec.total_action_count(), 16050);
/// assert_eq!(codec.decode(3).unwrap(), Action::Discard { card: Card::Four });
/// assert!(codec.decode(16050).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ActionSpaceCodec<R> {
    table: Arc<RangeTable>,
    color: PlayerColor,
    resolver: R,
}

impl<R: PieceResolver> ActionSpaceCodec<R> {
    /// Build a codec over the standard layout.
    ///
    /// Fails with [`CodecError::RangeTableInvariant`] if the layout does not
    /// partition the index space.
    pub fn new(color: PlayerColor, resolver: R) -> Result<Self, CodecError> {
        let table = RangeTable::standard()?;
        debug!(
            "built action space for {}: {} ranges, {} actions",
            color,
            table.ranges().len(),
            table.total()
        );
        Ok(Self::with_table(Arc::new(table), color, resolver))
    }

    /// Build a codec over an already validated table.
    ///
    /// Lets several players share one table.
    pub fn with_table(table: Arc<RangeTable>, color: PlayerColor, resolver: R) -> Self {
        Self {
            table,
            color,
            resolver,
        }
    }

    /// Total number of action indices; the length the model must score.
    #[must_use]
    pub fn total_action_count(&self) -> usize {
        self.table.total()
    }

    #[must_use]
    pub fn ranges(&self) -> &[ActionRange] {
        self.table.ranges()
    }

    #[must_use]
    pub fn table(&self) -> &Arc<RangeTable> {
        &self.table
    }

    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut R {
        &mut self.resolver
    }

    /// Block and local index for `index`, without resolving pieces.
    pub fn locate(&self, index: usize) -> Result<(ActionBlock, usize), CodecError> {
        self.table
            .locate(index)
            .map(|(range, local)| (range.block, local))
            .ok_or_else(|| self.out_of_range(i64::try_from(index).unwrap_or(i64::MAX)))
    }

    /// Decode a global action index.
    pub fn decode(&self, index: usize) -> Result<Action, CodecError> {
        let (block, local) = self.locate(index)?;
        trace!("decoding index {index} as {block} local {local}");
        block.decode(local, self.color, &self.resolver)
    }

    /// Decode an index that may be negative (e.g. from a foreign caller).
    pub fn decode_signed(&self, index: i64) -> Result<Action, CodecError> {
        let index = usize::try_from(index).map_err(|_| self.out_of_range(index))?;
        self.decode(index)
    }

    fn out_of_range(&self, index: i64) -> CodecError {
        CodecError::IndexOutOfRange {
            index,
            total: self.table.total(),
        }
    }
}
