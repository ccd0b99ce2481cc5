use crate::{InvalidMergeState, Tile};

/// A fixed grid slot that owns at most one resident tile and, transiently
/// during a move, at most one tile that is sliding in to merge with it.
///
/// Outside of an in-flight move the merge-incoming slot is always empty;
/// the merge phase of every move clears it.
#[derive(Clone, Debug)]
pub struct Cell {
    x: u8,
    y: u8,
    resident: Option<Tile>,
    incoming: Option<Tile>,
}

impl Cell {
    pub(crate) fn new(x: u8, y: u8) -> Self {
        Cell {
            x,
            y,
            resident: None,
            incoming: None,
        }
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn is_empty(&self) -> bool {
        self.resident.is_none()
    }

    pub fn has_merge_incoming(&self) -> bool {
        self.incoming.is_some()
    }

    pub fn resident(&self) -> Option<&Tile> {
        self.resident.as_ref()
    }

    /// The sole legality predicate for whether a sliding tile may enter this
    /// cell. It governs both the slide decision and the merge decision.
    ///
    /// A cell that has already been claimed for a merge this move rejects
    /// further candidates even when values match; this is what rules out
    /// chained triple-merges within a single move.
    pub fn can_accept(&self, candidate: &Tile) -> bool {
        match &self.resident {
            None => true,
            Some(resident) => self.incoming.is_none() && resident.value() == candidate.value(),
        }
    }

    /// Takes the tile in as resident, updating its position to this cell's
    /// coordinate. The caller must have taken the tile out of its previous
    /// cell first; exactly one cell holds a given tile at any time.
    pub(crate) fn set_resident(&mut self, mut tile: Tile) {
        debug_assert!(self.resident.is_none());
        tile.set_position(self.x, self.y);
        self.resident = Some(tile);
    }

    pub(crate) fn take_resident(&mut self) -> Option<Tile> {
        self.resident.take()
    }

    /// Takes the tile in as this move's merge candidate.
    pub(crate) fn set_merge_incoming(&mut self, mut tile: Tile) {
        debug_assert!(self.can_accept(&tile) && !self.is_empty());
        tile.set_position(self.x, self.y);
        self.incoming = Some(tile);
    }

    /// Absorbs the merge-incoming tile into the resident, doubling the
    /// resident's value and dropping the absorbed tile.
    pub(crate) fn apply_pending_merge(&mut self) -> Result<(), InvalidMergeState> {
        let err = InvalidMergeState {
            x: self.x,
            y: self.y,
        };
        let incoming = self.incoming.take().ok_or(err)?;
        let resident = self.resident.as_mut().ok_or(err)?;
        resident.absorb(incoming);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TileId;

    fn tile(id: u32, value: u32) -> Tile {
        Tile::new(TileId(id), value, 0, 0)
    }

    #[test]
    fn empty_cell_accepts_anything() {
        let cell = Cell::new(1, 2);
        assert!(cell.is_empty());
        assert!(cell.can_accept(&tile(0, 2)));
        assert!(cell.can_accept(&tile(1, 2048)));
    }

    #[test]
    fn occupied_cell_accepts_only_equal_values() {
        let mut cell = Cell::new(0, 0);
        cell.set_resident(tile(0, 4));
        assert!(cell.can_accept(&tile(1, 4)));
        assert!(!cell.can_accept(&tile(2, 2)));
        assert!(!cell.can_accept(&tile(3, 8)));
    }

    #[test]
    fn cell_with_pending_merge_rejects_equal_values() {
        let mut cell = Cell::new(0, 0);
        cell.set_resident(tile(0, 2));
        cell.set_merge_incoming(tile(1, 2));
        // A third 2 may not pile onto the same cell within one move
        assert!(!cell.can_accept(&tile(2, 2)));
    }

    #[test]
    fn set_resident_updates_tile_position() {
        let mut cell = Cell::new(3, 1);
        cell.set_resident(tile(0, 2));
        let resident = cell.resident().unwrap();
        assert_eq!((resident.x(), resident.y()), (3, 1));
    }

    #[test]
    fn apply_pending_merge_doubles_and_clears() {
        let mut cell = Cell::new(2, 2);
        cell.set_resident(tile(0, 8));
        cell.set_merge_incoming(tile(1, 8));
        cell.apply_pending_merge().unwrap();
        assert!(!cell.has_merge_incoming());
        assert_eq!(cell.resident().unwrap().value(), 16);
        assert_eq!(cell.resident().unwrap().id(), TileId(0));
    }

    #[test]
    fn apply_pending_merge_without_incoming_is_an_error() {
        let mut cell = Cell::new(1, 3);
        cell.set_resident(tile(0, 2));
        assert_eq!(
            cell.apply_pending_merge(),
            Err(InvalidMergeState { x: 1, y: 3 })
        );
    }
}
