use crate::TileId;

/// A value-bearing game piece occupying exactly one cell at a time.
///
/// A tile is owned by whichever [`Cell`](crate::Cell) currently links it as
/// resident or merge-incoming. It holds no reference back to its cell; its
/// position is updated by the cell that takes it in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    value: u32,
    x: u8,
    y: u8,
}

impl Tile {
    pub(crate) fn new(id: TileId, value: u32, x: u8, y: u8) -> Self {
        debug_assert!(value >= 2 && value.is_power_of_two());
        Tile { id, value, x, y }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    /// The tile's value, a power of two >= 2.
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub(crate) fn set_position(&mut self, x: u8, y: u8) {
        self.x = x;
        self.y = y;
    }

    /// Takes over the value of an equal-valued tile that slid into this
    /// tile's cell. The absorbed tile is dropped, i.e. removed from play.
    pub(crate) fn absorb(&mut self, other: Tile) {
        debug_assert_eq!(self.value, other.value);
        self.value += other.value;
    }
}
