use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};
use twenty48::{visualize_board, Direction, Game};

use crate::recording::Recorder;

pub struct GameStats {
    pub turns: u32,
    pub highest_tile: u32,
}

/// Plays a single game to completion, choosing uniformly among the legal
/// directions each turn.
pub fn play_game(
    seed: u64,
    rng: &mut StdRng,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameStats> {
    let mut game = Game::new(seed);
    if let Some(rec) = recorder {
        rec.start_game(seed);
    }

    let mut turns = 0;
    loop {
        let legal: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&direction| game.can_move(direction))
            .collect();
        let Some(&direction) = legal.choose(rng) else {
            break;
        };

        let outcome = game.attempt_move(direction)?;
        turns += 1;
        trace!(?direction, turns, "Moved");
        if let Some(rec) = recorder {
            rec.record_move(direction, &outcome);
        }
        if outcome.game_over {
            break;
        }
    }

    debug!("Final board:\n{}", visualize_board(&game.snapshot()));
    if let Some(rec) = recorder {
        rec.write_game_recording(game.snapshot())?;
    }

    Ok(GameStats {
        turns,
        highest_tile: game.highest_tile(),
    })
}
