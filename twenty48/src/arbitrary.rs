use crate::GRID_SIZE;

/// A board position plus an RNG seed, for property tests.
#[derive(Clone, Debug)]
pub struct BoardSetup {
    /// Tile values per row, 0 meaning an empty cell.
    pub rows: [[u32; GRID_SIZE]; GRID_SIZE],
    pub seed: u64,
}

impl quickcheck::Arbitrary for BoardSetup {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Skewed towards empty cells and low values, like positions that
        // actually occur in play.
        const VALUES: [u32; 12] = [0, 0, 0, 0, 2, 2, 2, 4, 4, 8, 16, 2048];
        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for row in rows.iter_mut() {
            for value in row.iter_mut() {
                *value = *g.choose(&VALUES).unwrap();
            }
        }
        BoardSetup {
            rows,
            seed: u64::arbitrary(g),
        }
    }
}
