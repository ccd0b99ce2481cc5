//! The direction-agnostic slide-and-merge pass.
//!
//! One algorithm runs over one of the four precomputed traversal groupings.
//! Sliding is resolved fully before any merge is committed, so a tile can
//! never merge and immediately re-merge within the same move, and a
//! rendering collaborator can animate all slides before any displayed value
//! changes.

use crate::{Cell, Direction, Grid, InvalidMergeState, Transition, TransitionKind};

/// True iff at least one tile would shift when sliding in this direction.
///
/// This mirrors the slide pass's entry condition exactly: some non-empty
/// cell at group index >= 1 whose immediate predecessor can accept its tile.
pub(crate) fn can_move(grid: &Grid, direction: Direction) -> bool {
    grid.grouping(direction)
        .iter()
        .any(|group| can_move_in_group(grid.cells(), group))
}

fn can_move_in_group(cells: &[Cell], group: &[usize]) -> bool {
    (1..group.len()).any(|pos| {
        match cells[group[pos]].resident() {
            None => false,
            Some(tile) => cells[group[pos - 1]].can_accept(tile),
        }
    })
}

/// Slides every tile in the given direction as far as its group allows,
/// recording one [`Transition`] per tile that moved.
///
/// Tiles that land on an equal-valued resident are parked as that cell's
/// merge-incoming tile; committing those merges is the separate
/// [`apply_pending_merges`] phase, run after the transitions have been
/// acknowledged.
pub(crate) fn slide_tiles(grid: &mut Grid, direction: Direction, transitions: &mut Vec<Transition>) {
    // Groups never share cells, so their processing order is irrelevant.
    for group in grid.grouping(direction) {
        slide_group(grid, &group, transitions);
    }
}

fn slide_group(grid: &mut Grid, group: &[usize], transitions: &mut Vec<Transition>) {
    // Index 0 can never move further towards the front.
    for pos in 1..group.len() {
        let Some(tile) = grid.cell_mut(group[pos]).take_resident() else {
            continue;
        };

        // Walk towards the front while the next cell accepts the tile,
        // keeping the furthest accepting cell.
        let mut target = None;
        for &idx in group[..pos].iter().rev() {
            if grid.cells()[idx].can_accept(&tile) {
                target = Some(idx);
            } else {
                break;
            }
        }

        match target {
            None => {
                // The tile does not move; put it back.
                grid.cell_mut(group[pos]).set_resident(tile);
            }
            Some(idx) => {
                let destination = &grid.cells()[idx];
                let kind = if destination.is_empty() {
                    TransitionKind::Slide
                } else {
                    TransitionKind::MergeTarget
                };
                transitions.push(Transition {
                    tile: tile.id(),
                    from: (tile.x(), tile.y()),
                    to: (destination.x(), destination.y()),
                    kind,
                });
                match kind {
                    TransitionKind::Slide => grid.cell_mut(idx).set_resident(tile),
                    TransitionKind::MergeTarget => grid.cell_mut(idx).set_merge_incoming(tile),
                }
            }
        }
    }
}

/// The merge phase: absorbs every pending merge-incoming tile into its
/// cell's resident. Cells are disjoint, so the order is irrelevant.
pub(crate) fn apply_pending_merges(grid: &mut Grid) -> Result<(), InvalidMergeState> {
    for idx in 0..grid.cells().len() {
        if grid.cells()[idx].has_merge_incoming() {
            grid.cell_mut(idx).apply_pending_merge()?;
        }
    }
    Ok(())
}
