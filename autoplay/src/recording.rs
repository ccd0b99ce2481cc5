use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use twenty48::{CellSnapshot, Direction, MoveOutcome};

/// Writes one JSON file per game into a directory, containing the seed and
/// every move outcome. Useful for replaying odd games.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    current: GameRecording,
}

#[derive(Default, Serialize, Deserialize)]
pub struct GameRecording {
    seed: u64,
    moves: Vec<RecordedMove>,
    final_board: Vec<CellSnapshot>,
}

#[derive(Serialize, Deserialize)]
pub struct RecordedMove {
    direction: Direction,
    outcome: MoveOutcome,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            current: GameRecording::default(),
        })
    }

    pub fn start_game(&mut self, seed: u64) {
        self.current = GameRecording {
            seed,
            ..GameRecording::default()
        };
    }

    pub fn record_move(&mut self, direction: Direction, outcome: &MoveOutcome) {
        self.current.moves.push(RecordedMove {
            direction,
            outcome: outcome.clone(),
        });
    }

    pub fn write_game_recording(&mut self, final_board: Vec<CellSnapshot>) -> anyhow::Result<()> {
        self.current.final_board = final_board;
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(filepath)?);
        serde_json::to_writer_pretty(writer, &self.current)?;
        self.num += 1;
        self.current = GameRecording::default();
        Ok(())
    }
}
