//! The surface contracts: capability traits that any bounded region of the
//! grid can satisfy. The sparse maps in [crate::map] are parametrized over
//! these traits rather than over any concrete region, so a rectangle, a
//! custom polygon, or anything else with a notion of "inside" can bound a
//! map exactly like the built-in [Disk](crate::Disk) does.

use std::ops::Range;

/// A bounded region of positions. The only obligations are a validity test
/// and a total cell count; nothing about the region's shape leaks through.
pub trait Surface {
    /// The position type this region is made of, e.g.
    /// [GridPoint](crate::GridPoint).
    type Position;

    /// Is this position inside the region?
    fn contains(&self, position: &Self::Position) -> bool;

    /// The number of positions in the region.
    fn size(&self) -> usize;
}

/// A [Surface] whose positions are additionally in bijection with the
/// linear index range `[0, size())`. This is what lets a map key its
/// storage by dense indices while callers keep talking in positions.
///
/// Implementations must guarantee the round trip both ways: for every valid
/// index `i`, `index_of(position_at(i))` is `Some(i)`, and for every
/// contained position `p`, `position_at(index_of(p))` is `Some(p)`.
pub trait IndexedSurface: Surface {
    /// The position at the given index of the region's canonical
    /// enumeration, or `None` if the index is out of range.
    fn position_at(&self, index: usize) -> Option<Self::Position>;

    /// The canonical index of the given position, or `None` if the
    /// position is outside the region.
    fn index_of(&self, position: &Self::Position) -> Option<usize>;

    /// Is this index inside the region's index range?
    fn is_valid_index(&self, index: usize) -> bool {
        index < self.size()
    }

    /// All indices of the region, in canonical order.
    fn indices(&self) -> Range<usize> {
        0..self.size()
    }

    /// All positions of the region, in canonical order.
    fn positions(&self) -> impl Iterator<Item = Self::Position> + '_ {
        self.indices().filter_map(|index| self.position_at(index))
    }
}
