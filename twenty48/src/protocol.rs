use serde::{Deserialize, Serialize};

/// Identifies a tile for the whole span of its life, from spawn to
/// merge-absorption.
///
/// Frontends key their animations on this, so ids are never reused
/// within one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

/// The direction a move slides the tiles in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// The tile relocates into an empty cell.
    Slide,
    /// The tile relocates into an occupied cell of equal value and will be
    /// absorbed by its resident in the merge phase.
    MergeTarget,
}

/// A single tile relocation, surfaced to the rendering collaborator so it
/// can animate the move before any merge mutates displayed values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub tile: TileId,
    pub from: (u8, u8),
    pub to: (u8, u8),
    pub kind: TransitionKind,
}

/// A tile freshly spawned into an empty cell, for initial render.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnEvent {
    pub tile: TileId,
    pub x: u8,
    pub y: u8,
    pub value: u32,
}

/// What a single call to [`Game::attempt_move`](crate::Game::attempt_move)
/// did to the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Whether the move was legal and therefore executed.
    pub moved: bool,
    /// All tile relocations of this move, in group traversal order.
    pub transitions: Vec<Transition>,
    /// The tile spawned after a successful move.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub spawned: Option<SpawnEvent>,
    /// True once no direction has a legal move left.
    pub game_over: bool,
}

impl MoveOutcome {
    pub(crate) fn rejected(game_over: bool) -> Self {
        MoveOutcome {
            moved: false,
            transitions: Vec::new(),
            spawned: None,
            game_over,
        }
    }
}

/// One cell of a read-only board snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub x: u8,
    pub y: u8,
    /// Id and value of the resident tile, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub tile: Option<(TileId, u32)>,
}
