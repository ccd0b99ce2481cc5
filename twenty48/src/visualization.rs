use crate::{CellSnapshot, GRID_SIZE};

/// Renders a board snapshot as a box-drawn grid, for logs and debugging.
pub fn visualize_board(snapshot: &[CellSnapshot]) -> String {
    let value_at = |x: u8, y: u8| -> Option<u32> {
        snapshot
            .iter()
            .find(|cell| cell.x == x && cell.y == y)
            .and_then(|cell| cell.tile.map(|(_, value)| value))
    };

    let mut result = String::from("╭");
    for x in 0..GRID_SIZE {
        result += "──────";
        result += if x + 1 < GRID_SIZE { "┬" } else { "╮\n" };
    }
    for y in 0..GRID_SIZE as u8 {
        result += "│";
        for x in 0..GRID_SIZE as u8 {
            match value_at(x, y) {
                Some(value) => result += &format!("{:>5} │", value),
                None => result += "      │",
            }
        }
        result += "\n";
        if (y as usize) + 1 < GRID_SIZE {
            result += "├";
            for x in 0..GRID_SIZE {
                result += "──────";
                result += if x + 1 < GRID_SIZE { "┼" } else { "┤\n" };
            }
        }
    }
    result += "╰";
    for x in 0..GRID_SIZE {
        result += "──────";
        result += if x + 1 < GRID_SIZE { "┴" } else { "╯" };
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Game;

    #[test]
    fn renders_every_tile_value() {
        let game = Game::from_rows(
            [[2, 0, 0, 0], [0, 16, 0, 0], [0, 0, 128, 0], [0, 0, 0, 2048]],
            0,
        );
        let rendered = visualize_board(&game.snapshot());
        for value in ["2", "16", "128", "2048"] {
            assert!(rendered.contains(value), "{rendered}");
        }
        assert_eq!(rendered.lines().count(), 2 * GRID_SIZE + 1);
    }
}
